//! Common types and data structures

/// Sidebar navigation entries
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavPage {
    Home,
    Projects,
    Upload,
    About,
}

impl NavPage {
    pub const ALL: [NavPage; 4] = [NavPage::Home, NavPage::Projects, NavPage::Upload, NavPage::About];

    pub fn label(self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::Projects => "Projects",
            NavPage::Upload => "Upload Dataset",
            NavPage::About => "About",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            NavPage::Home => "/",
            NavPage::Projects => "/projects",
            NavPage::Upload => "/upload",
            NavPage::About => "/about",
        }
    }
}

/// Status banner shown after a form submission
#[derive(Clone, PartialEq, Debug)]
pub enum Flash {
    Success(String),
    Error(String),
}

/// Where a project's video plays from
#[derive(Clone, PartialEq, Debug)]
pub enum VideoSource {
    /// Externally hosted; rendered as a link
    External(String),
    /// An .mp4 file inside the project folder; played inline
    Local(String),
}

/// Health endpoint payload
#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub projects: usize,
    pub started_at: chrono::DateTime<chrono::Utc>,
}
