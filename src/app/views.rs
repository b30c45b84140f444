//! Page rendering (home, projects, upload, about)

use crate::catalog::Project;
use crate::constants::*;
use crate::dataset::{ColumnSummary, DatasetPreview};
use crate::render::ProjectView;
use crate::types::{Flash, NavPage, VideoSource};
use crate::ui::components::*;
use std::fmt::Write;

fn file_href(project: &str, file: &str) -> String {
    format!(
        "/projects/{}/files/{}",
        urlencoding::encode(project),
        urlencoding::encode(file)
    )
}

// ============================================================================
// HOME
// ============================================================================

pub fn home_page(site_title: &str, projects: &[Project]) -> String {
    let mut body = format!(
        "<h1>📊 {}</h1><p>Welcome! Explore my datasets, notebooks, analyses, and dashboards.</p>{}",
        escape(site_title),
        divider()
    );

    if projects.is_empty() {
        body.push_str(&info("No projects yet. Add a folder under the projects directory or upload a dataset."));
    }

    for project in projects {
        let thumb = match project.preview_image {
            Some(_) => format!(
                "<img src=\"{}\" alt=\"{}\">",
                file_href(&project.name, PREVIEW_FILE),
                escape(&project.title())
            ),
            None => "🗂️".to_string(),
        };

        let _ = write!(
            body,
            "<div class=\"card\"><div class=\"thumb\">{thumb}</div><div>\
             <h3>{title}</h3><p>{badges}</p>\
             <a class=\"button\" href=\"/projects/{href}\">Open {name}</a></div></div>",
            title = escape(&project.title()),
            badges = artifact_badges(project),
            href = urlencoding::encode(&project.name),
            name = escape(&project.name),
        );
    }

    page(site_title, "Home", NavPage::Home, &body)
}

fn artifact_badges(project: &Project) -> String {
    let mut badges = String::new();
    if project.has_datasets() {
        badges.push_str(&badge("dataset", "Dataset"));
    }
    if project.notebook_preview.is_some() {
        badges.push_str(&badge("notebook", "Notebook"));
    }
    if project.video_reference.is_some() {
        badges.push_str(&badge("video", "Video"));
    }
    if !project.has_artifacts() {
        badges.push_str("<span class=\"muted\">No artifacts yet</span>");
    }
    badges
}

// ============================================================================
// PROJECTS
// ============================================================================

fn project_chooser(projects: &[Project], selected: Option<&str>) -> String {
    let mut options = String::new();
    for project in projects {
        let sel = if Some(project.name.as_str()) == selected { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(&project.name),
            sel
        );
    }
    format!(
        "<form method=\"get\" action=\"/projects\"><label for=\"project\">Choose a project</label>\
         <select id=\"project\" name=\"project\">{options}</select> \
         <button class=\"button\" type=\"submit\">Open</button></form>"
    )
}

pub fn projects_index(site_title: &str, projects: &[Project]) -> String {
    let mut body = String::from("<h1>📁 Projects</h1>");
    if projects.is_empty() {
        body.push_str(&info("No projects found."));
    } else {
        body.push_str(&project_chooser(projects, None));
    }
    page(site_title, "Projects", NavPage::Projects, &body)
}

pub fn project_page(site_title: &str, projects: &[Project], view: &ProjectView) -> String {
    let mut body = String::from("<h1>📁 Projects</h1>");
    body.push_str(&project_chooser(projects, Some(&view.name)));
    let _ = write!(body, "<h2>{}</h2>{}", escape(&view.title), divider());

    if view.is_empty() {
        body.push_str(&info("This project has no dataset, notebook or video yet."));
    }

    if let Some(video) = &view.video {
        body.push_str("<section class=\"artifact\" id=\"video\"><h3>🎥 Video</h3>");
        match video {
            Ok(VideoSource::External(url)) => {
                let _ = write!(
                    body,
                    "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">▶️ Watch video</a>",
                    escape(url)
                );
            }
            Ok(VideoSource::Local(file)) => {
                let _ = write!(body, "<video controls src=\"{}\"></video>", file_href(&view.name, file));
            }
            Err(msg) => body.push_str(&banner(&Flash::Error(msg.clone()))),
        }
        body.push_str("</section>");
    }

    if view.dataset.is_some() || !view.extra_datasets.is_empty() {
        body.push_str("<section class=\"artifact\" id=\"dataset\"><h3>📁 Dataset</h3>");
        let primary = view.dataset.iter().map(|d| (DATASET_FILE, d));
        let extras = view.extra_datasets.iter().map(|(file, d)| (file.as_str(), d));
        for (file, dataset) in primary.chain(extras) {
            let _ = write!(body, "<h4>{}</h4>", escape(file));
            match dataset {
                Ok(preview) => body.push_str(&dataset_section(&view.name, file, preview)),
                Err(msg) => body.push_str(&banner(&Flash::Error(msg.clone()))),
            }
        }
        body.push_str("</section>");
    }

    if let Some(notebook) = &view.notebook {
        body.push_str("<section class=\"artifact\" id=\"notebook\"><h3>📓 Notebook</h3>");
        match notebook {
            Ok(html) => {
                let _ = write!(
                    body,
                    "<iframe class=\"notebook\" sandbox=\"allow-scripts\" height=\"{}\" srcdoc=\"{}\"></iframe>",
                    NOTEBOOK_FRAME_HEIGHT,
                    escape(html)
                );
            }
            Err(msg) => body.push_str(&banner(&Flash::Error(msg.clone()))),
        }
        body.push_str("</section>");
    }

    if let Some(Ok(preview)) = &view.dataset {
        body.push_str("<section class=\"artifact\" id=\"dashboard\"><h3>📊 Dashboard</h3><h4>Quick Summary</h4>");
        if preview.summary.is_empty() {
            body.push_str(&info("No numeric columns to summarize."));
        } else {
            body.push_str(&summary_table(&preview.summary));
        }
        body.push_str("</section>");
    }

    page(site_title, &view.title, NavPage::Projects, &body)
}

fn dataset_section(project: &str, file: &str, preview: &DatasetPreview) -> String {
    let mut html = table(&preview.headers, &preview.rows);
    let _ = write!(
        html,
        "<p class=\"muted\">Showing {} of {} rows</p>\
         <a class=\"button\" href=\"{}\" download>Download CSV</a>",
        preview.rows.len(),
        preview.total_rows,
        file_href(project, file)
    );
    html
}

/// describe()-style table: one row per statistic, one column per numeric column
fn summary_table(summary: &[ColumnSummary]) -> String {
    let mut headers = vec![String::new()];
    headers.extend(summary.iter().map(|c| c.name.clone()));

    type Stat = fn(&ColumnSummary) -> String;
    let stats: [(&str, Stat); 8] = [
        ("count", |c| c.count.to_string()),
        ("mean", |c| format_stat(c.mean)),
        ("std", |c| c.std.map(format_stat).unwrap_or_else(|| "NaN".to_string())),
        ("min", |c| format_stat(c.min)),
        ("25%", |c| format_stat(c.q25)),
        ("50%", |c| format_stat(c.median)),
        ("75%", |c| format_stat(c.q75)),
        ("max", |c| format_stat(c.max)),
    ];

    let rows: Vec<Vec<String>> = stats
        .iter()
        .map(|(label, stat)| {
            let mut row = vec![label.to_string()];
            row.extend(summary.iter().map(|c| stat(c)));
            row
        })
        .collect();

    table(&headers, &rows)
}

// ============================================================================
// UPLOAD
// ============================================================================

pub fn upload_page(site_title: &str, projects: &[Project], flash: Option<&Flash>) -> String {
    let mut body = String::from("<h1>Upload a Dataset</h1>");
    if let Some(flash) = flash {
        body.push_str(&banner(flash));
    }

    let mut suggestions = String::new();
    for project in projects {
        let _ = write!(suggestions, "<option value=\"{}\">", escape(&project.name));
    }

    let _ = write!(
        body,
        "<form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\
         <label for=\"file\">Upload CSV</label>\
         <input id=\"file\" name=\"file\" type=\"file\" accept=\".csv\" required>\
         <label for=\"project\">Project (e.g., telecom_analysis)</label>\
         <input id=\"project\" name=\"project\" list=\"projects\" required>\
         <datalist id=\"projects\">{suggestions}</datalist>\
         <label for=\"filename\">Save as</label>\
         <input id=\"filename\" name=\"filename\" value=\"{DATASET_FILE}\">\
         <p><button class=\"button\" type=\"submit\">Save file</button></p></form>"
    );

    page(site_title, "Upload Dataset", NavPage::Upload, &body)
}

// ============================================================================
// ABOUT / ERRORS
// ============================================================================

pub fn about_page(site_title: &str) -> String {
    let body = format!(
        "<h1>About This Portfolio</h1>\
         <p>A clean, simple portfolio for showcasing data analysis projects.</p>\
         <p class=\"muted\">Each folder under the projects directory is one project. \
         Drop in <code>{DATASET_FILE}</code>, <code>{NOTEBOOK_FILE}</code>, <code>{VIDEO_FILE}</code> \
         or <code>{PREVIEW_FILE}</code> and it shows up here.</p>\
         <p class=\"muted\">Version {APP_VERSION}</p>"
    );
    page(site_title, "About", NavPage::About, &body)
}

pub fn error_page(site_title: &str, heading: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>{}<p><a href=\"/\">Back to home</a></p>",
        escape(heading),
        banner(&Flash::Error(message.to_string()))
    );
    page(site_title, heading, NavPage::Home, &body)
}
