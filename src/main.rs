use std::sync::Arc;

use report_agent_svc::agent::OpenRouterRunner;
use report_agent_svc::app::{AppState, create_app, init_tracing};
use report_agent_svc::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing/logging
    init_tracing(&config);

    info!("Starting report agent service...");
    info!("Configuration loaded: {:?}", config);

    let runner = match OpenRouterRunner::from_env() {
        Ok(runner) => runner,
        Err(e) => {
            error!("Failed to create agent runner: {}", e);
            std::process::exit(1);
        }
    };

    // Create the application
    let app = create_app(AppState::new(&config, Arc::new(runner)));

    // Create TCP listener
    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Server running on {}", config.server_url());
            info!("Health check: GET /health");
            info!("Report endpoint: POST /generate");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    // Start the server
    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}
