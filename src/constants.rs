//! Application constants and configuration

pub const APP_NAME: &str = "Data Analysis Portfolio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conventional artifact filenames inside a project folder
pub const DATASET_FILE: &str = "dataset.csv";
pub const NOTEBOOK_FILE: &str = "notebook.html";
pub const VIDEO_FILE: &str = "video.txt";
pub const PREVIEW_FILE: &str = "preview.png";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_PROJECTS_DIR: &str = "projects";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 200;

/// Height of the embedded notebook frame, in pixels
pub const NOTEBOOK_FRAME_HEIGHT: u32 = 800;
