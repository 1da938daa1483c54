use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracen_core::{Error, Route, ViewState};
use tracen_sections::sections::static_content::STATIC_SECTIONS;
use tracen_sections::{load_article, load_page, load_section, section_names, PageSection};

use crate::AppState;

/// Maps crate errors onto JSON error bodies.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn list_sections() -> impl IntoResponse {
    let names: Vec<String> = STATIC_SECTIONS
        .iter()
        .map(|name| name.to_string())
        .chain(section_names())
        .collect();
    Json(names)
}

pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ViewState>, ApiError> {
    let view = load_section(&name, state.client.clone()).await?;
    Ok(Json(view))
}

pub async fn get_home_page(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PageSection>>, ApiError> {
    Ok(Json(load_page(&Route::Home, state.client.clone()).await?))
}

pub async fn get_teachers_page(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PageSection>>, ApiError> {
    Ok(Json(load_page(&Route::Teachers, state.client.clone()).await?))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    Json(load_article(&slug, state.client.clone()).await)
}
