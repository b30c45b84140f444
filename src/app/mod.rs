//! App module - shared state, routes and error responses

mod downloads;
mod pages;
mod upload;
mod views;

use crate::catalog::Catalog;
use crate::constants::APP_NAME;
use crate::error::PortfolioError;
use crate::settings::Settings;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

// ============================================================================
// APP STATE
// ============================================================================

/// Shared by every request. Holds no project data: the catalog re-reads the
/// projects folder on each call.
#[derive(Clone)]
pub struct AppState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) settings: Arc<Settings>,
    pub(crate) started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
            started_at: Utc::now(),
        }
    }

    pub(crate) fn site_title(&self) -> &str {
        &self.settings.site_title
    }
}

// ============================================================================
// ROUTES
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.settings.max_upload_bytes();

    Router::new()
        .route("/", get(pages::home))
        .route("/projects", get(pages::projects))
        .route("/projects/{name}", get(pages::project))
        .route("/projects/{name}/files/{file}", get(downloads::project_file))
        .route("/upload", get(upload::upload_form).post(upload::upload))
        .route("/about", get(pages::about))
        .route("/static/style.css", get(pages::stylesheet))
        .route("/health", get(pages::health))
        .fallback(pages::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// ERRORS
// ============================================================================

pub(crate) fn error_status(err: &PortfolioError) -> StatusCode {
    match err {
        PortfolioError::InvalidName { .. } | PortfolioError::Upload(_) => StatusCode::BAD_REQUEST,
        PortfolioError::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        PortfolioError::ProjectNotFound(_) | PortfolioError::ArtifactNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        PortfolioError::Write { .. } | PortfolioError::Read { .. } | PortfolioError::Csv { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let heading = status.canonical_reason().unwrap_or("Error");
        (status, Html(views::error_page(APP_NAME, heading, &self.to_string()))).into_response()
    }
}
