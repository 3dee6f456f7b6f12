use crate::agent::{Agent, ContextVariables};
use crate::app::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{GenerateRequest, GenerateResponse, HealthResponse};
use axum::{
    Extension,
    extract::{Json, rejection::JsonRejection},
    response::Json as ResponseJson,
};
use tracing::{debug, error, info};

/// Client-facing message for any failure inside the agent run
pub const AGENT_RUN_FAILED: &str = "agent run failed";

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");

    let response = HealthResponse::ok();

    info!("Health check successful");
    Ok(ResponseJson(response))
}

/// Report generation handler
/// Sends the prompt and context to the agent as one user message and
/// returns the content of the agent's last message
pub async fn generate_report(
    Extension(state): Extension<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<ResponseJson<GenerateResponse>> {
    let Json(payload) = payload?;
    info!("Generate endpoint called with prompt: {}", payload.prompt);

    let agent = Agent::dummy(state.model.as_str());
    let messages = payload.to_messages();

    let response = state
        .runner
        .run(&agent, messages, &ContextVariables::new(), state.agent_debug)
        .await
        .map_err(|e| {
            error!("Agent run failed: {:#}", e);
            AppError::InternalServerError(AGENT_RUN_FAILED.to_string())
        })?;

    // The runner is trusted to return at least one message; fail loudly if not.
    let report = response
        .into_report()
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    info!("Report generated ({} characters)", report.len());
    Ok(ResponseJson(GenerateResponse::new(report)))
}
