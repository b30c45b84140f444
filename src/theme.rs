//! Centralized theme constants for the portfolio site
//! All colors and sizes in the stylesheet reference these constants

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: &str = "#09090b"; // zinc-950
pub const BG_ELEVATED: &str = "#18181b"; // zinc-900
pub const BG_INPUT: &str = "#141418"; // input field background
pub const BG_SURFACE: &str = "#27272a"; // zinc-800
pub const BG_HOVER: &str = "#0f1a19"; // subtle teal hover

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: &str = "#2dd4bf"; // teal-400
pub const ACCENT_LIGHT: &str = "#5eead4"; // teal-300
pub const ACCENT_DARK: &str = "#115e59"; // teal-800

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#e4e4e7"; // zinc-200
pub const TEXT_MUTED: &str = "#a1a1aa"; // zinc-400
pub const TEXT_DIM: &str = "#71717a"; // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: &str = "#27272a"; // zinc-800
pub const BORDER_DEFAULT: &str = "#3f3f46"; // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: &str = "#34d399"; // emerald-400
pub const STATUS_WARNING: &str = "#fbbf24"; // amber-400
pub const STATUS_ERROR: &str = "#f87171"; // red-400
pub const STATUS_INFO: &str = "#38bdf8"; // sky-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_ACCENT: &str = "#2dd4bf"; // teal-400
pub const BTN_ACCENT_HOVER: &str = "#14b8a6"; // teal-500

// =============================================================================
// SIZES
// =============================================================================
pub const SIDEBAR_WIDTH: u32 = 240;
pub const CONTENT_MAX_WIDTH: u32 = 1200;
pub const RADIUS: u32 = 6;
pub const THUMBNAIL_SIZE: u32 = 120;

/// Badge colors per artifact kind: (background ~6% alpha, text)
pub fn artifact_colors(kind: &str) -> (&'static str, &'static str) {
    match kind {
        "dataset" => ("rgba(52, 211, 153, 0.06)", STATUS_SUCCESS),
        "notebook" => ("rgba(56, 189, 248, 0.06)", STATUS_INFO),
        "video" => ("rgba(251, 191, 36, 0.06)", STATUS_WARNING),
        _ => ("rgba(161, 161, 170, 0.06)", TEXT_MUTED),
    }
}

/// Build the site stylesheet from the palette
pub fn stylesheet() -> String {
    let mut css = format!(
        r#":root {{ color-scheme: dark; }}
* {{ box-sizing: border-box; }}
body {{ margin: 0; display: flex; min-height: 100vh; background: {BG_BASE}; color: {TEXT_SECONDARY}; font-family: system-ui, -apple-system, "Segoe UI", Ubuntu, sans-serif; }}
a {{ color: {ACCENT}; text-decoration: none; }}
a:hover {{ color: {ACCENT_LIGHT}; }}
h1, h2, h3 {{ color: {TEXT_PRIMARY}; }}
.sidebar {{ width: {SIDEBAR_WIDTH}px; flex-shrink: 0; padding: 24px 16px; background: {BG_ELEVATED}; border-right: 1px solid {BORDER_SUBTLE}; }}
.sidebar h2 {{ font-size: 1.1rem; margin-top: 0; }}
.sidebar a {{ display: block; padding: 8px 12px; margin-bottom: 4px; border-radius: {RADIUS}px; color: {TEXT_MUTED}; }}
.sidebar a:hover {{ background: {BG_HOVER}; color: {TEXT_SECONDARY}; }}
.sidebar a.active {{ background: {ACCENT_DARK}; color: {TEXT_PRIMARY}; }}
main {{ flex: 1; padding: 32px 48px; max-width: {CONTENT_MAX_WIDTH}px; }}
hr {{ border: none; border-top: 1px solid {BORDER_SUBTLE}; margin: 24px 0; }}
.muted {{ color: {TEXT_DIM}; }}
.card {{ display: flex; gap: 24px; padding: 16px; margin-bottom: 16px; background: {BG_ELEVATED}; border: 1px solid {BORDER_SUBTLE}; border-radius: {RADIUS}px; }}
.card .thumb {{ width: {THUMBNAIL_SIZE}px; height: {THUMBNAIL_SIZE}px; display: flex; align-items: center; justify-content: center; font-size: 3rem; background: {BG_SURFACE}; border-radius: {RADIUS}px; overflow: hidden; }}
.card .thumb img {{ width: 100%; height: 100%; object-fit: cover; }}
.card h3 {{ margin: 0 0 8px 0; }}
.badge {{ display: inline-block; padding: 2px 8px; margin-right: 6px; border-radius: 999px; font-size: 0.8rem; }}
.banner {{ padding: 12px 16px; margin: 16px 0; border-radius: {RADIUS}px; border: 1px solid {BORDER_DEFAULT}; }}
.banner.info {{ color: {STATUS_INFO}; }}
.banner.success {{ color: {STATUS_SUCCESS}; }}
.banner.error {{ color: {STATUS_ERROR}; }}
.button {{ display: inline-block; padding: 8px 16px; border: none; border-radius: {RADIUS}px; background: {BTN_ACCENT}; color: {BG_BASE}; font-weight: 600; cursor: pointer; }}
.button:hover {{ background: {BTN_ACCENT_HOVER}; color: {BG_BASE}; }}
section.artifact {{ margin: 24px 0; padding: 16px 24px; background: {BG_ELEVATED}; border: 1px solid {BORDER_SUBTLE}; border-radius: {RADIUS}px; }}
table {{ border-collapse: collapse; margin: 12px 0; font-size: 0.9rem; }}
th, td {{ padding: 6px 12px; border-bottom: 1px solid {BORDER_SUBTLE}; text-align: left; }}
th {{ color: {TEXT_MUTED}; font-weight: 600; }}
td.num {{ text-align: right; font-variant-numeric: tabular-nums; }}
iframe.notebook {{ width: 100%; border: 1px solid {BORDER_DEFAULT}; border-radius: {RADIUS}px; background: {TEXT_PRIMARY}; }}
video {{ max-width: 100%; border-radius: {RADIUS}px; }}
form label {{ display: block; margin: 16px 0 6px 0; color: {TEXT_MUTED}; }}
input, select {{ padding: 8px 10px; min-width: 320px; background: {BG_INPUT}; color: {TEXT_SECONDARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: {RADIUS}px; }}
"#
    );

    for kind in ["dataset", "notebook", "video"] {
        let (bg, fg) = artifact_colors(kind);
        css.push_str(&format!(
            ".badge.{kind} {{ background: {bg}; color: {fg}; border: 1px solid {fg}; }}\n"
        ));
    }

    css
}
