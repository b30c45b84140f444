//! Project catalog for the portfolio
//! The projects folder is the database: every call re-reads it from disk

use crate::constants::*;
use crate::error::{PortfolioError, Result};
use crate::utils::{display_title, is_plain_component};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One portfolio entry, derived from a folder under the projects root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub dataset: Option<PathBuf>,
    pub notebook_preview: Option<PathBuf>,
    pub video_reference: Option<PathBuf>,
    pub preview_image: Option<PathBuf>,
    /// Other `*.csv` files in the folder, sorted by file name
    pub extra_datasets: Vec<PathBuf>,
}

impl Project {
    pub fn title(&self) -> String {
        display_title(&self.name)
    }

    pub fn has_artifacts(&self) -> bool {
        self.has_datasets() || self.notebook_preview.is_some() || self.video_reference.is_some()
    }

    pub fn has_datasets(&self) -> bool {
        self.dataset.is_some() || !self.extra_datasets.is_empty()
    }
}

pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// List every project folder under the root.
    ///
    /// A missing root is an empty portfolio. Folders that cannot be read are
    /// skipped so one bad project never hides the rest.
    pub async fn list_projects(&self) -> Vec<Project> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "Projects root missing, catalog is empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "Failed to read projects root");
                return Vec::new();
            }
        };

        let mut projects = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(root = %self.root.display(), error = %e, "Directory listing interrupted");
                    break;
                }
            };

            let path = entry.path();
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            }

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                warn!(path = %path.display(), "Skipping project with non UTF-8 name");
                continue;
            };

            match scan_project(&path, name).await {
                Ok(project) => projects.push(project),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable project"),
            }
        }

        projects.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = projects.len(), "Projects listed");
        projects
    }

    /// Look up a single project by folder name
    pub async fn project(&self, name: &str) -> Result<Option<Project>> {
        check_name("project", name)?;
        let path = self.root.join(name);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(PortfolioError::Read { path, source }),
        }

        match scan_project(&path, name.to_string()).await {
            Ok(project) => Ok(Some(project)),
            Err(source) => Err(PortfolioError::Read { path, source }),
        }
    }

    /// Write an uploaded file into a project folder, creating the folder if
    /// needed. An existing file of the same name is replaced.
    pub async fn accept_upload(&self, project: &str, bytes: &[u8], filename: &str) -> Result<PathBuf> {
        check_name("project", project)?;
        check_name("file", filename)?;

        let dir = self.root.join(project);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| PortfolioError::Write { path: dir.clone(), source })?;

        let dest = dir.join(filename);
        tokio::fs::write(&dest, bytes)
            .await
            .map_err(|source| PortfolioError::Write { path: dest.clone(), source })?;

        info!(project, file = filename, bytes = bytes.len(), "Upload saved");
        Ok(dest)
    }

    /// Read one file from a project folder
    pub async fn read_artifact(&self, project: &str, file: &str) -> Result<Vec<u8>> {
        check_name("project", project)?;
        check_name("file", file)?;

        let dir = self.root.join(project);
        if !is_dir(&dir).await {
            return Err(PortfolioError::ProjectNotFound(project.to_string()));
        }

        let path = dir.join(file);
        if !is_file(&path).await {
            return Err(PortfolioError::ArtifactNotFound {
                project: project.to_string(),
                file: file.to_string(),
            });
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(source) => Err(PortfolioError::Read { path, source }),
        }
    }
}

fn check_name(kind: &'static str, value: &str) -> Result<()> {
    if is_plain_component(value) {
        Ok(())
    } else {
        Err(PortfolioError::InvalidName { kind, value: value.to_string() })
    }
}

/// Probe a project folder for its conventional artifacts
async fn scan_project(dir: &Path, name: String) -> std::io::Result<Project> {
    let mut entries = tokio::fs::read_dir(dir).await?;

    let mut extra_datasets = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name();
        let Some(file) = file_name.to_str() else {
            continue;
        };
        if file == DATASET_FILE || !file.to_ascii_lowercase().ends_with(".csv") {
            continue;
        }
        let path = entry.path();
        if is_file(&path).await {
            extra_datasets.push(path);
        }
    }
    extra_datasets.sort();

    Ok(Project {
        dataset: artifact(dir, DATASET_FILE).await,
        notebook_preview: artifact(dir, NOTEBOOK_FILE).await,
        video_reference: artifact(dir, VIDEO_FILE).await,
        preview_image: artifact(dir, PREVIEW_FILE).await,
        extra_datasets,
        name,
    })
}

async fn artifact(dir: &Path, file: &str) -> Option<PathBuf> {
    let path = dir.join(file);
    is_file(&path).await.then_some(path)
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn missing_root_is_an_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::new(tmp.path().join("does-not-exist"));
        assert!(catalog.list_projects().await.is_empty());
    }

    #[tokio::test]
    async fn folder_without_artifacts_is_still_a_project() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("empty_project")).unwrap();

        let projects = Catalog::new(tmp.path()).list_projects().await;
        assert_eq!(projects.len(), 1);
        let p = &projects[0];
        assert_eq!(p.name, "empty_project");
        assert!(p.dataset.is_none());
        assert!(p.notebook_preview.is_none());
        assert!(p.video_reference.is_none());
        assert!(!p.has_artifacts());
    }

    #[tokio::test]
    async fn alpha_and_beta_scenario() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "alpha/dataset.csv", "a,b\n1,2\n3,4\n");
        write(tmp.path(), "beta/video.txt", "https://example.com/watch?v=1\n");

        let projects = Catalog::new(tmp.path()).list_projects().await;
        assert_eq!(projects.len(), 2);

        let alpha = projects.iter().find(|p| p.name == "alpha").unwrap();
        assert!(alpha.dataset.is_some());
        assert!(alpha.video_reference.is_none());
        assert!(alpha.notebook_preview.is_none());

        let beta = projects.iter().find(|p| p.name == "beta").unwrap();
        assert!(beta.video_reference.is_some());
        assert!(beta.dataset.is_none());
        assert!(beta.notebook_preview.is_none());
    }

    #[tokio::test]
    async fn plain_files_in_root_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "README.md", "# notes");
        write(tmp.path(), "gamma/notebook.html", "<h1>hi</h1>");
        write(tmp.path(), "gamma/preview.png", "png");

        let projects = Catalog::new(tmp.path()).list_projects().await;
        assert_eq!(projects.len(), 1);
        assert!(projects[0].notebook_preview.is_some());
        assert!(projects[0].preview_image.is_some());
    }

    #[tokio::test]
    async fn artifact_names_must_be_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("delta/dataset.csv")).unwrap();

        let projects = Catalog::new(tmp.path()).list_projects().await;
        assert!(projects[0].dataset.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unreadable_project_does_not_abort_listing() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "alpha/dataset.csv", "a\n1\n");
        let locked = tmp.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through the mode bits, leaving nothing to check
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let projects = Catalog::new(tmp.path()).list_projects().await;

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(projects.iter().any(|p| p.name == "alpha"));
        assert!(!projects.iter().any(|p| p.name == "locked"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn dangling_entry_does_not_abort_listing() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "alpha/dataset.csv", "a\n1\n");
        write(tmp.path(), "beta/video.txt", "https://example.com");
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("broken")).unwrap();

        let projects = Catalog::new(tmp.path()).list_projects().await;
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[tokio::test]
    async fn other_csv_files_are_extra_datasets() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "telecom_analysis/dataset.csv", "a\n1\n");
        write(tmp.path(), "telecom_analysis/new.csv", "b\n2\n");
        write(tmp.path(), "telecom_analysis/Archive.CSV", "c\n3\n");
        write(tmp.path(), "telecom_analysis/notes.txt", "not data");
        fs::create_dir_all(tmp.path().join("telecom_analysis/dir.csv")).unwrap();
        write(tmp.path(), "only_extra/new.csv", "b\n2\n");

        let catalog = Catalog::new(tmp.path());
        let telecom = catalog.project("telecom_analysis").await.unwrap().unwrap();
        assert!(telecom.dataset.is_some());
        assert_eq!(
            telecom.extra_datasets,
            [
                tmp.path().join("telecom_analysis/Archive.CSV"),
                tmp.path().join("telecom_analysis/new.csv"),
            ]
        );

        let only_extra = catalog.project("only_extra").await.unwrap().unwrap();
        assert!(only_extra.dataset.is_none());
        assert!(only_extra.has_datasets());
        assert!(only_extra.has_artifacts());
    }

    #[tokio::test]
    async fn upload_makes_dataset_visible() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::new(tmp.path().join("projects"));

        let dest = catalog
            .accept_upload("telecom_analysis", b"x,y\n1,2\n", DATASET_FILE)
            .await
            .unwrap();
        assert_eq!(dest, tmp.path().join("projects/telecom_analysis/dataset.csv"));

        let projects = catalog.list_projects().await;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "telecom_analysis");
        assert!(projects[0].dataset.is_some());
    }

    #[tokio::test]
    async fn second_upload_wins() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::new(tmp.path());

        catalog.accept_upload("p", b"first", DATASET_FILE).await.unwrap();
        let dest = catalog.accept_upload("p", b"second", DATASET_FILE).await.unwrap();

        assert_eq!(fs::read(dest).unwrap(), b"second");
    }

    #[tokio::test]
    async fn upload_rejects_escaping_names() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::new(tmp.path().join("projects"));

        let err = catalog.accept_upload("..", b"x", DATASET_FILE).await.unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidName { kind: "project", .. }));

        let err = catalog.accept_upload("p", b"x", "../evil.csv").await.unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidName { kind: "file", .. }));
        assert!(!tmp.path().join("evil.csv").exists());
    }

    #[tokio::test]
    async fn upload_into_a_file_is_a_write_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "not_a_dir", "plain file");
        let catalog = Catalog::new(tmp.path());

        let err = catalog.accept_upload("not_a_dir", b"x", DATASET_FILE).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Write { .. }));
    }

    #[tokio::test]
    async fn single_project_lookup() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "alpha/video.txt", "https://example.com");
        let catalog = Catalog::new(tmp.path());

        let alpha = catalog.project("alpha").await.unwrap().unwrap();
        assert!(alpha.video_reference.is_some());
        assert!(catalog.project("missing").await.unwrap().is_none());
        assert!(catalog.project("../alpha").await.is_err());
    }

    #[tokio::test]
    async fn read_artifact_distinguishes_missing_project_and_file() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "alpha/dataset.csv", "a\n1\n");
        let catalog = Catalog::new(tmp.path());

        assert_eq!(catalog.read_artifact("alpha", DATASET_FILE).await.unwrap(), b"a\n1\n");
        assert!(matches!(
            catalog.read_artifact("nope", DATASET_FILE).await,
            Err(PortfolioError::ProjectNotFound(_))
        ));
        assert!(matches!(
            catalog.read_artifact("alpha", VIDEO_FILE).await,
            Err(PortfolioError::ArtifactNotFound { .. })
        ));
    }
}
