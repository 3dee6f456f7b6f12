pub mod openrouter;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use openrouter::OpenRouterRunner;

/// Preamble given to the default general-purpose agent
pub const DUMMY_AGENT_INSTRUCTIONS: &str = "You are a helpful assistant.";

pub const EMPTY_RESPONSE: &str = "agent returned an empty response";

/// Configuration mapping passed through to a run
pub type ContextVariables = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Handle to a configured language-model persona
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub model: String,
    pub instructions: String,
}

impl Agent {
    /// Select the general-purpose agent backed by `model`
    pub fn dummy(model: impl Into<String>) -> Self {
        Self {
            name: "Dummy Agent".to_string(),
            model: model.into(),
            instructions: DUMMY_AGENT_INSTRUCTIONS.to_string(),
        }
    }
}

/// Messages produced by a single run, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResponse {
    pub messages: Vec<Message>,
}

impl RunResponse {
    /// Take the final message content as the report, failing on an empty run
    pub fn into_report(mut self) -> anyhow::Result<String> {
        self.messages
            .pop()
            .map(|m| m.content)
            .ok_or_else(|| anyhow::anyhow!(EMPTY_RESPONSE))
    }
}

/// Drives an agent over a conversation and returns the new messages
#[async_trait]
pub trait AgentRunner: Send + Sync {
    async fn run(
        &self,
        agent: &Agent,
        messages: Vec<Message>,
        context_variables: &ContextVariables,
        debug: bool,
    ) -> anyhow::Result<RunResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_agent_uses_model() {
        let agent = Agent::dummy("deepseek/deepseek-chat");
        assert_eq!(agent.model, "deepseek/deepseek-chat");
        assert_eq!(agent.instructions, DUMMY_AGENT_INSTRUCTIONS);
    }

    #[test]
    fn test_into_report() {
        let response = RunResponse {
            messages: vec![Message::assistant("draft"), Message::assistant("final")],
        };
        assert_eq!(response.into_report().unwrap(), "final");

        let err = RunResponse::default().into_report().unwrap_err();
        assert_eq!(err.to_string(), EMPTY_RESPONSE);
    }

    #[test]
    fn test_message_role_serialization() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
