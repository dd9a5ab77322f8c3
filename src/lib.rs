//! Quote Poster backend
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `deepai`: Thin client for the DeepAI text-to-image endpoint.
//! - `backgrounds`: Static background-image collection served to callers.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config` and `DeepAIClient`.
pub mod api;
pub mod backgrounds;
pub mod config;
pub mod deepai;
pub mod error;

pub use config::Config;
pub use deepai::client::DeepAIClient;
