//! Router construction and shared application state.
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::deepai::client::DeepAIClient;

pub struct AppState {
    pub deepai_client: DeepAIClient,
}

/// Build the application router with every route bound explicitly.
///
/// CORS is fully permissive: the frontend is served from a different origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/background-collection", get(handlers::background_collection))
        .route("/api/generate-background", post(handlers::generate_background))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
