use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::agent::AgentRunner;
use crate::config::Config;
use crate::routes::create_routes;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<dyn AgentRunner>,
    pub model: String,
    pub agent_debug: bool,
}

impl AppState {
    pub fn new(config: &Config, runner: Arc<dyn AgentRunner>) -> Self {
        Self {
            runner,
            model: config.model.clone(),
            agent_debug: config.agent_debug,
        }
    }
}

/// Initialize tracing and logging for the application
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| "report_agent_svc=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    info!(
        "Initializing application router (model: {}, agent debug: {})",
        state.model, state.agent_debug
    );

    Router::new()
        .merge(create_routes())
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
