//! Dataset upload form and multipart handler

use super::{error_status, views, AppState};
use crate::constants::DATASET_FILE;
use crate::error::PortfolioError;
use crate::types::Flash;
use crate::utils::format_bytes;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{info, warn};

/// Fields of the upload form once the multipart body is read
struct UploadForm {
    project: String,
    filename: String,
    data: Bytes,
}

pub async fn upload_form(State(state): State<AppState>) -> Html<String> {
    let projects = state.catalog.list_projects().await;
    Html(views::upload_page(state.site_title(), &projects, None))
}

pub async fn upload(State(state): State<AppState>, multipart: Multipart) -> Response {
    let result = match read_form(multipart, state.settings.max_upload_mb).await {
        Ok(form) => {
            let saved = state
                .catalog
                .accept_upload(&form.project, &form.data, &form.filename)
                .await;
            saved.map(|_| form)
        }
        Err(e) => Err(e),
    };

    let (status, flash) = match result {
        Ok(form) => {
            info!(project = %form.project, file = %form.filename, "Dataset uploaded");
            (
                StatusCode::OK,
                Flash::Success(format!(
                    "Saved {} ({}) to project {}",
                    form.filename,
                    format_bytes(form.data.len() as u64),
                    form.project
                )),
            )
        }
        Err(e) => {
            let status = error_status(&e);
            warn!(error = %e, status = status.as_u16(), "Upload failed");
            let message = match &e {
                PortfolioError::Write { .. } => format!("Upload failed: {}", e),
                _ => e.to_string(),
            };
            (status, Flash::Error(message))
        }
    };

    let projects = state.catalog.list_projects().await;
    (status, Html(views::upload_page(state.site_title(), &projects, Some(&flash)))).into_response()
}

async fn read_form(mut multipart: Multipart, limit_mb: usize) -> Result<UploadForm, PortfolioError> {
    let form_error = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            PortfolioError::UploadTooLarge { limit_mb }
        } else {
            PortfolioError::Upload(e.body_text())
        }
    };

    let mut project = None;
    let mut filename = None;
    let mut data = None;

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let original = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(form_error)?;
                // Browsers send an empty, unnamed part when no file was chosen
                if original.as_deref().is_some_and(|f| !f.is_empty()) || !bytes.is_empty() {
                    data = Some(bytes);
                }
            }
            Some("project") => {
                project = Some(field.text().await.map_err(form_error)?);
            }
            Some("filename") => {
                filename = Some(field.text().await.map_err(form_error)?);
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| PortfolioError::Upload("Choose a CSV file to upload.".to_string()))?;

    let project = project
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .ok_or_else(|| PortfolioError::Upload("Enter a valid project name.".to_string()))?;

    let filename = filename
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DATASET_FILE.to_string());

    Ok(UploadForm { project, filename, data })
}
