use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rig::completion::{Chat, Message as RigMessage};
use rig::providers::openrouter;
use tracing::{debug, info};

use super::{Agent, AgentRunner, ContextVariables, Message, Role, RunResponse};

/// Runs agents against OpenRouter chat completions
#[derive(Clone)]
pub struct OpenRouterRunner {
    client: openrouter::Client,
}

impl OpenRouterRunner {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: openrouter::Client::new(api_key),
        }
    }

    /// Build a runner from `OPENROUTER_API_KEY`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| anyhow!("OPENROUTER_API_KEY not set"))?;
        Ok(Self::new(&api_key))
    }
}

#[async_trait]
impl AgentRunner for OpenRouterRunner {
    async fn run(
        &self,
        agent: &Agent,
        messages: Vec<Message>,
        context_variables: &ContextVariables,
        debug: bool,
    ) -> Result<RunResponse> {
        let conversation = Conversation::split(messages)?;
        let preamble = build_preamble(agent, context_variables, &conversation.system);

        if debug {
            debug!(agent = %agent.name, model = %agent.model, "Preamble: {}", preamble);
            for message in &conversation.history {
                debug!("[{:?}] {}", message.role, message.content);
            }
            debug!("[User] {}", conversation.prompt);
        }

        let llm = self
            .client
            .agent(&agent.model)
            .preamble(&preamble)
            .build();

        let history: Vec<RigMessage> = conversation
            .history
            .into_iter()
            .map(|m| match m.role {
                Role::Assistant => RigMessage::assistant(m.content),
                _ => RigMessage::user(m.content),
            })
            .collect();

        let reply = llm.chat(conversation.prompt, history).await?;
        if debug {
            debug!("[Assistant] {}", reply);
        }

        let response = RunResponse {
            messages: vec![Message::assistant(reply)],
        };
        info!(
            "Agent '{}' produced {} message(s)",
            agent.name,
            response.messages.len()
        );
        Ok(response)
    }
}

/// A message list split into the parts a chat completion takes
#[derive(Debug, PartialEq, Eq)]
struct Conversation {
    system: Vec<String>,
    history: Vec<Message>,
    prompt: String,
}

impl Conversation {
    fn split(messages: Vec<Message>) -> Result<Self> {
        let (system, mut rest): (Vec<Message>, Vec<Message>) = messages
            .into_iter()
            .partition(|m| m.role == Role::System);

        let last = rest
            .pop()
            .ok_or_else(|| anyhow!("Cannot run an agent without messages"))?;
        if last.role != Role::User {
            return Err(anyhow!("The last message must come from the user"));
        }

        Ok(Self {
            system: system.into_iter().map(|m| m.content).collect(),
            history: rest,
            prompt: last.content,
        })
    }
}

fn build_preamble(agent: &Agent, context_variables: &ContextVariables, system: &[String]) -> String {
    let mut preamble = agent.instructions.clone();

    for extra in system {
        preamble.push_str("\n\n");
        preamble.push_str(extra);
    }

    if !context_variables.is_empty() {
        preamble.push_str("\n\nContext:");
        for (key, value) in context_variables {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            preamble.push_str(&format!("\n{}: {}", key, value));
        }
    }

    preamble
}
