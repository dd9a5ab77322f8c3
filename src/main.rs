use std::net::SocketAddr;
use std::sync::Arc;

use quote_poster_backend::{api, config, deepai};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();
    if config.deepai_api_key.is_none() {
        tracing::warn!("DEEPAI_API_KEY is unset; generation requests will fail upstream");
    }

    let deepai_client =
        deepai::client::DeepAIClient::new(config.deepai_url.clone(), config.deepai_api_key.clone());
    let state = Arc::new(api::routes::AppState { deepai_client });

    let app = api::routes::create_router(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 5000", port_str);
        5000
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
