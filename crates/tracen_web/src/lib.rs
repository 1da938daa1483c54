use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/sections", get(handlers::list_sections))
        .route("/api/sections/:name", get(handlers::get_section))
        .route("/api/pages/home", get(handlers::get_home_page))
        .route("/api/pages/teachers", get(handlers::get_teachers_page))
        .route("/api/news/:slug", get(handlers::get_article))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use tracen_core::{Error, Result};
}
