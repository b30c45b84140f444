//! Reusable HTML components
//!
//! Standalone building blocks used by every page. All text passed in is
//! escaped unless the function name says otherwise.

use crate::types::{Flash, NavPage};
use std::fmt::Write;

/// Escape text for use in HTML content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full page shell: sidebar navigation plus main content
pub fn page(site_title: &str, page_title: &str, active: NavPage, body: &str) -> String {
    let mut nav = String::new();
    for item in NavPage::ALL {
        let class = if item == active { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{}\"{}>{}</a>", item.href(), class, item.label());
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{page} · {site}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n\
         <body>\n<nav class=\"sidebar\"><h2>Navigation</h2>{nav}</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        page = escape(page_title),
        site = escape(site_title),
    )
}

pub fn banner(flash: &Flash) -> String {
    match flash {
        Flash::Success(msg) => format!("<div class=\"banner success\">{}</div>", escape(msg)),
        Flash::Error(msg) => format!("<div class=\"banner error\">{}</div>", escape(msg)),
    }
}

pub fn info(msg: &str) -> String {
    format!("<div class=\"banner info\">{}</div>", escape(msg))
}

pub fn divider() -> &'static str {
    "<hr>"
}

/// Artifact badge, colored per kind by the stylesheet
pub fn badge(kind: &str, label: &str) -> String {
    format!("<span class=\"badge {}\">{}</span>", escape(kind), escape(label))
}

/// Plain table; cells that parse as numbers are right-aligned
pub fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for h in headers {
        let _ = write!(html, "<th>{}</th>", escape(h));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            let class = if cell.trim().parse::<f64>().is_ok() { " class=\"num\"" } else { "" };
            let _ = write!(html, "<td{}>{}</td>", class, escape(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Format a statistic the way a summary table shows it
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.3}", value)
    }
}
