//! Page handlers (home, projects, about) and small static routes

use super::{views, AppState};
use crate::constants::APP_VERSION;
use crate::error::PortfolioError;
use crate::render::render_project;
use crate::theme;
use crate::types::HealthResponse;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let projects = state.catalog.list_projects().await;
    Html(views::home_page(state.site_title(), &projects))
}

#[derive(Deserialize)]
pub struct ProjectQuery {
    project: Option<String>,
}

pub async fn projects(State(state): State<AppState>, Query(query): Query<ProjectQuery>) -> Response {
    if let Some(name) = query.project.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return Redirect::to(&format!("/projects/{}", urlencoding::encode(name))).into_response();
    }

    let projects = state.catalog.list_projects().await;
    Html(views::projects_index(state.site_title(), &projects)).into_response()
}

pub async fn project(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, PortfolioError> {
    let project = state
        .catalog
        .project(&name)
        .await?
        .ok_or_else(|| PortfolioError::ProjectNotFound(name.clone()))?;

    let view = render_project(&project, state.settings.preview_rows).await;
    let projects = state.catalog.list_projects().await;
    debug!(project = %name, "Project rendered");

    Ok(Html(views::project_page(state.site_title(), &projects, &view)))
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    Html(views::about_page(state.site_title()))
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], theme::stylesheet())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let projects = state.catalog.list_projects().await.len();
    Json(HealthResponse {
        status: "ok",
        version: APP_VERSION,
        projects,
        started_at: state.started_at,
    })
}

pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page(
            state.site_title(),
            "Not Found",
            "Nothing lives at this address.",
        )),
    )
}
