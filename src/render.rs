//! Builds the presentation payload for one project.
//!
//! Each artifact becomes an optional section. A section that fails to load
//! carries its error message instead of content so the page can show it
//! inline while the other sections render normally.

use crate::catalog::Project;
use crate::dataset::DatasetPreview;
use crate::types::VideoSource;
use crate::utils::is_plain_component;
use std::path::Path;
use tracing::warn;

/// Section content, or the message to show in its place
pub type Section<T> = Result<T, String>;

#[derive(Debug, Clone)]
pub struct ProjectView {
    pub name: String,
    pub title: String,
    pub dataset: Option<Section<DatasetPreview>>,
    /// Other CSV files, keyed by file name
    pub extra_datasets: Vec<(String, Section<DatasetPreview>)>,
    pub notebook: Option<Section<String>>,
    pub video: Option<Section<VideoSource>>,
}

impl ProjectView {
    pub fn is_empty(&self) -> bool {
        self.dataset.is_none()
            && self.extra_datasets.is_empty()
            && self.notebook.is_none()
            && self.video.is_none()
    }
}

pub async fn render_project(project: &Project, preview_rows: usize) -> ProjectView {
    let dataset = match &project.dataset {
        Some(path) => Some(
            DatasetPreview::load(path, preview_rows)
                .await
                .map_err(|e| section_error(project, "dataset", e.to_string())),
        ),
        None => None,
    };

    let mut extra_datasets = Vec::with_capacity(project.extra_datasets.len());
    for path in &project.extra_datasets {
        let file = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let preview = DatasetPreview::load(path, preview_rows)
            .await
            .map_err(|e| section_error(project, "dataset", e.to_string()));
        extra_datasets.push((file, preview));
    }

    let notebook = match &project.notebook_preview {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| section_error(project, "notebook", format!("Could not read notebook: {}", e))),
        ),
        None => None,
    };

    let video = match &project.video_reference {
        Some(path) => Some(
            load_video(path)
                .await
                .map_err(|e| section_error(project, "video", e)),
        ),
        None => None,
    };

    ProjectView {
        name: project.name.clone(),
        title: project.title(),
        dataset,
        extra_datasets,
        notebook,
        video,
    }
}

fn section_error(project: &Project, section: &str, message: String) -> String {
    warn!(project = %project.name, section, error = %message, "Section failed to load");
    message
}

/// Read the link out of video.txt. A bare `.mp4` name that exists next to it
/// plays from the project folder. Anything else must be an http(s) URL.
async fn load_video(path: &Path) -> Result<VideoSource, String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Could not read video reference: {}", e))?;

    let link = text.lines().next().unwrap_or("").trim().to_string();
    if link.is_empty() {
        return Err("Video reference is empty".to_string());
    }

    if link.to_ascii_lowercase().ends_with(".mp4") && is_plain_component(&link) {
        if let Some(dir) = path.parent() {
            let local = tokio::fs::metadata(dir.join(&link))
                .await
                .map(|m| m.is_file())
                .unwrap_or(false);
            if local {
                return Ok(VideoSource::Local(link));
            }
        }
    }

    if !is_web_link(&link) {
        return Err("Video link must start with http:// or https://".to_string());
    }
    Ok(VideoSource::External(link))
}

fn is_web_link(link: &str) -> bool {
    let lower = link.to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::fs;
    use tempfile::TempDir;

    async fn view_of(root: &Path, name: &str) -> ProjectView {
        let project = Catalog::new(root).project(name).await.unwrap().unwrap();
        render_project(&project, 5).await
    }

    #[tokio::test]
    async fn dataset_only_project_omits_other_sections() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("alpha")).unwrap();
        fs::write(tmp.path().join("alpha/dataset.csv"), "x,y\n1,2\n3,4\n").unwrap();

        let view = view_of(tmp.path(), "alpha").await;
        let preview = view.dataset.unwrap().unwrap();
        assert_eq!(preview.total_rows, 2);
        assert!(view.notebook.is_none());
        assert!(view.video.is_none());
        assert_eq!(view.title, "Alpha");
    }

    #[tokio::test]
    async fn malformed_dataset_is_contained_to_its_section() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("beta")).unwrap();
        fs::write(tmp.path().join("beta/dataset.csv"), "x,y\n1\n").unwrap();
        fs::write(tmp.path().join("beta/notebook.html"), "<p>analysis</p>").unwrap();

        let view = view_of(tmp.path(), "beta").await;
        assert!(view.dataset.unwrap().unwrap_err().contains("malformed CSV"));
        assert_eq!(view.notebook.unwrap().unwrap(), "<p>analysis</p>");
    }

    #[tokio::test]
    async fn extra_csv_files_get_their_own_previews() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("telecom_analysis")).unwrap();
        fs::write(tmp.path().join("telecom_analysis/new.csv"), "calls\n10\n20\n").unwrap();
        fs::write(tmp.path().join("telecom_analysis/broken.csv"), "a,b\n1\n").unwrap();

        let view = view_of(tmp.path(), "telecom_analysis").await;
        assert!(view.dataset.is_none());
        assert!(!view.is_empty());

        let names: Vec<_> = view.extra_datasets.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(names, ["broken.csv", "new.csv"]);
        assert!(view.extra_datasets[0].1.is_err());
        assert_eq!(view.extra_datasets[1].1.as_ref().unwrap().total_rows, 2);
    }

    #[tokio::test]
    async fn video_link_is_trimmed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("gamma")).unwrap();
        fs::write(tmp.path().join("gamma/video.txt"), "  https://youtu.be/abc  \n").unwrap();

        let view = view_of(tmp.path(), "gamma").await;
        assert_eq!(
            view.video.unwrap().unwrap(),
            VideoSource::External("https://youtu.be/abc".to_string())
        );
    }

    #[tokio::test]
    async fn local_mp4_plays_from_project_folder() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("delta")).unwrap();
        fs::write(tmp.path().join("delta/video.txt"), "demo.mp4\n").unwrap();
        fs::write(tmp.path().join("delta/demo.mp4"), b"\0\0").unwrap();

        let view = view_of(tmp.path(), "delta").await;
        assert_eq!(view.video.unwrap().unwrap(), VideoSource::Local("demo.mp4".to_string()));
    }

    #[tokio::test]
    async fn missing_mp4_falls_back_to_link() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("eps")).unwrap();
        fs::write(tmp.path().join("eps/video.txt"), "https://cdn.example.com/clip.mp4").unwrap();

        let view = view_of(tmp.path(), "eps").await;
        assert!(matches!(view.video.unwrap().unwrap(), VideoSource::External(_)));
    }

    #[tokio::test]
    async fn non_web_video_links_are_section_errors() {
        let tmp = TempDir::new().unwrap();
        for (name, link) in [
            ("js", "javascript:alert(document.domain)"),
            ("data", "data:text/html,<script>alert(1)</script>"),
            ("bare", "clip.mov"),
            ("scheme_only", "https://"),
        ] {
            fs::create_dir_all(tmp.path().join(name)).unwrap();
            fs::write(tmp.path().join(name).join("video.txt"), link).unwrap();

            let err = view_of(tmp.path(), name).await.video.unwrap().unwrap_err();
            assert!(err.contains("http:// or https://"), "{name}: {err}");
        }
    }

    #[tokio::test]
    async fn uppercase_scheme_is_accepted() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("up")).unwrap();
        fs::write(tmp.path().join("up/video.txt"), "HTTPS://youtu.be/abc").unwrap();

        let view = view_of(tmp.path(), "up").await;
        assert!(matches!(view.video.unwrap().unwrap(), VideoSource::External(_)));
    }

    #[tokio::test]
    async fn empty_video_reference_is_a_section_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("zeta")).unwrap();
        fs::write(tmp.path().join("zeta/video.txt"), "\n").unwrap();

        let view = view_of(tmp.path(), "zeta").await;
        assert!(view.video.unwrap().is_err());
    }

    #[tokio::test]
    async fn bare_project_renders_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("eta")).unwrap();
        assert!(view_of(tmp.path(), "eta").await.is_empty());
    }
}
