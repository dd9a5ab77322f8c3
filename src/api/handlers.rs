//! Axum request handlers for the HTTP API.
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::backgrounds::{Background, COLLECTION};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    // Option so an explicit null is treated like an absent field
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub url: String,
}

pub async fn root() -> &'static str {
    "Quote Poster Backend"
}

/// Return the full static background collection in insertion order.
pub async fn background_collection() -> Json<[Background; 3]> {
    Json(COLLECTION)
}

/// Proxy a prompt to the text-to-image API and relay the image URL.
///
/// An absent or empty prompt is rejected before the upstream call; every
/// other failure comes back from the client as an `AppError` and is mapped
/// to its JSON error response by `IntoResponse`.
pub async fn generate_background(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = payload.prompt.unwrap_or_default();
    if prompt.is_empty() {
        return Err(AppError::MissingPrompt);
    }

    state
        .deepai_client
        .generate(&prompt)
        .await
        .map(|url| Json(GenerateResponse { url }))
        .map_err(|e| {
            tracing::error!("Failed to generate background: {:?}", e);
            e
        })
}
