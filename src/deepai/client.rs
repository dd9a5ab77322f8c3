//! Thin HTTP client for the DeepAI text-to-image endpoint.
//!
//! One form-encoded POST per generation, `api-key` header attached when a key
//! is configured. The response body is parsed as JSON regardless of HTTP
//! status: `output_url` wins, otherwise the upstream `error` message (or
//! "Unknown error") comes back as a `Generation` failure.
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct Text2ImgResponse {
    output_url: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct DeepAIClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl DeepAIClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        DeepAIClient { client: Client::new(), endpoint, api_key }
    }

    /// Generate an image for `prompt` and return its URL.
    ///
    /// Single attempt, no retries, no explicit timeout beyond the transport
    /// default. Every failure path resolves to an `AppError` variant.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        tracing::info!("Sending prompt to text-to-image API at URL: {}", self.endpoint);
        tracing::debug!("Prompt: {:?}", prompt);

        let mut request = self.client.post(&self.endpoint).form(&[("text", prompt)]);
        if let Some(key) = &self.api_key {
            request = request.header("api-key", key);
        }

        let response = request.send().await.map_err(AppError::HttpClient)?;
        let body: Text2ImgResponse = response.json().await.map_err(AppError::HttpClient)?;

        match body.output_url {
            Some(url) => {
                tracing::info!("Generated image at: {}", url);
                Ok(url)
            }
            None => {
                let message = body.error.unwrap_or_else(|| "Unknown error".to_string());
                tracing::error!("Text-to-image API returned an error: {}", message);
                Err(AppError::Generation(message))
            }
        }
    }
}
