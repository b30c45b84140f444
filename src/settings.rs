//! Server settings stored as settings.json in the app data directory

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Server
    pub host: String,
    pub port: u16,
    pub open_browser: bool,

    // Content
    pub projects_dir: PathBuf,
    pub site_title: String,
    pub preview_rows: usize,

    // Uploads
    pub max_upload_mb: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: false,
            projects_dir: PathBuf::from(DEFAULT_PROJECTS_DIR),
            site_title: APP_NAME.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    /// Apply environment overrides on top of the file settings.
    ///
    /// `PORT` is what hosting platforms inject; the `PORTFOLIO_*` variables
    /// are for local use.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(p) => self.port = p,
                Err(e) => warn!(value = %port, error = %e, "Ignoring invalid PORT"),
            }
        }
        if let Some(host) = lookup("PORTFOLIO_HOST").filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }
        if let Some(dir) = lookup("PORTFOLIO_PROJECTS_DIR").filter(|d| !d.trim().is_empty()) {
            self.projects_dir = PathBuf::from(dir.trim());
        }
    }

    /// Projects directory, resolved against the working directory when relative
    pub fn projects_dir_in(&self, base: &Path) -> PathBuf {
        if self.projects_dir.is_absolute() {
            self.projects_dir.clone()
        } else {
            base.join(&self.projects_dir)
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
