//! Error types shared by the catalog, the renderer and the web layer

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the project tree.
///
/// A missing projects root or a missing artifact is not an error: the
/// catalog reports an empty list or an absent reference instead.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("invalid {kind} name: {value:?}")]
    InvalidName { kind: &'static str, value: String },

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("file {file:?} not found in project {project:?}")]
    ArtifactNotFound { project: String, file: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid upload: {0}")]
    Upload(String),

    #[error("upload is larger than the {limit_mb} MB limit")]
    UploadTooLarge { limit_mb: usize },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
