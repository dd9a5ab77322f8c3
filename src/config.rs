//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
//! The API key is optional on purpose: its absence only surfaces as a
//! downstream failure at the text-to-image service.
use std::env;

use dotenv;

pub struct Config {
    pub deepai_url: String,
    pub deepai_api_key: Option<String>,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            deepai_url: env::var("DEEPAI_URL")
                .unwrap_or_else(|_| "https://api.deepai.org/api/text2img".to_string()),
            deepai_api_key: env::var("DEEPAI_API_KEY").ok(),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "5000".to_string()),
        })
    }

    pub fn print_env_vars() {
        println!("DEEPAI_URL: {}", env::var("DEEPAI_URL").unwrap_or_else(|_| "<unset>".to_string()));
        // Secret: report presence only
        println!(
            "DEEPAI_API_KEY: {}",
            if env::var("DEEPAI_API_KEY").is_ok() { "<set>" } else { "<unset>" }
        );
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}
