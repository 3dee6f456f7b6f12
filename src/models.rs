use serde::{Deserialize, Serialize};

use crate::agent::Message;

/// Request payload for the generate endpoint
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub context: Option<String>,
}

/// Response payload for the generate endpoint
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub report: String,
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}

impl GenerateRequest {
    /// Prompt and context joined by a blank line; a missing or null context is empty
    pub fn message_content(&self) -> String {
        format!(
            "{}\n\n{}",
            self.prompt,
            self.context.as_deref().unwrap_or_default()
        )
    }

    pub fn to_messages(&self) -> Vec<Message> {
        vec![Message::user(self.message_content())]
    }
}

impl GenerateResponse {
    pub fn new(report: String) -> Self {
        Self { report }
    }
}
