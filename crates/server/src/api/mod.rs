//! HTTP routes.

pub mod error;
pub mod export;
pub mod script;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use rsvp_api_types::HealthResponse;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(script::list_submissions).post(script::run_action),
        )
        .route("/health", get(health))
        .route("/export.csv", get(export::export_csv))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
