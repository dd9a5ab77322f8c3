//! Common error type shared by the HTTP handlers and the DeepAI client.
//!
//! Every variant maps to a JSON `{"error": ...}` response so that no failure
//! ever reaches the caller as an unhandled fault.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body carried no usable prompt.
    #[error("Prompt is required")]
    MissingPrompt,
    /// The text-to-image API answered with a structured error instead of an
    /// output URL; the upstream message is forwarded as-is.
    #[error("{0}")]
    Generation(String),
    /// Transport-level or parse failure talking to the text-to-image API.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingPrompt => StatusCode::BAD_REQUEST,
            AppError::Generation(_) | AppError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
