//! Serving project files: CSV downloads, preview images, local videos

use super::AppState;
use crate::error::PortfolioError;
use crate::utils::content_type_for;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue};
use tracing::debug;

pub async fn project_file(
    State(state): State<AppState>,
    Path((project, file)): Path<(String, String)>,
) -> Result<(HeaderMap, Vec<u8>), PortfolioError> {
    let bytes = state.catalog.read_artifact(&project, &file).await?;
    debug!(project = %project, file = %file, bytes = bytes.len(), "Serving project file");

    let content_type = content_type_for(&file);
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(header::CONTENT_SECURITY_POLICY, HeaderValue::from_static("sandbox"));

    // Preview images and local videos display inline; everything else downloads
    if !displays_inline(content_type) {
        headers.insert(header::CONTENT_DISPOSITION, attachment(&file));
    }

    Ok((headers, bytes))
}

fn displays_inline(content_type: &str) -> bool {
    content_type.starts_with("image/") || content_type.starts_with("video/")
}

fn attachment(file: &str) -> HeaderValue {
    let safe: String = file
        .chars()
        .map(|c| if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' { c } else { '_' })
        .collect();
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", safe))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
