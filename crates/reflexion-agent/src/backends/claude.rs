use super::{read_json, LlmBackend};
use crate::config::{GenerationParams, ModelConfig};
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use reflexion_core::{ReflexionError, ReflexionResult, Role};
use serde::Serialize;
use tracing::debug;

/// Prefix applied to system messages that follow the first conversational turn.
pub const SYSTEM_NOTE_PREFIX: &str = "[System note] ";

/// Claude (Anthropic) API backend.
pub struct ClaudeBackend {
    config: ModelConfig,
    http: reqwest::Client,
}

impl ClaudeBackend {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmBackend for ClaudeBackend {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> ReflexionResult<String> {
        let url = format!("{}/v1/messages", self.config.base_url());
        let (system, api_messages) = to_claude_messages(messages);

        let mut body = serde_json::json!({
            "model": params.model,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
            "messages": api_messages,
        });

        if let Some(sys) = system {
            body["system"] = serde_json::json!(sys);
        }

        debug!(url = %url, messages = messages.len(), "Sending Claude message request");

        let resp = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ReflexionError::Http(e.to_string()))?;

        let resp_body = read_json(resp, "Claude").await?;
        parse_claude_response(&resp_body)
    }
}

// -- Claude wire types --

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaudeMessage {
    pub role: String,
    pub content: String,
}

/// Splits a prompt into Claude's top-level `system` field and its message list.
///
/// Leading system messages are joined into `system`. System messages after the
/// first user or assistant turn are sent as user content prefixed with
/// [`SYSTEM_NOTE_PREFIX`]. Consecutive messages with the same role are merged.
pub fn to_claude_messages(messages: &[ChatMessage]) -> (Option<String>, Vec<ClaudeMessage>) {
    let mut system_parts: Vec<&str> = Vec::new();
    let mut out: Vec<ClaudeMessage> = Vec::new();

    for m in messages {
        let (role, content) = match m.role {
            Role::System if out.is_empty() => {
                system_parts.push(&m.content);
                continue;
            }
            Role::System => ("user", format!("{SYSTEM_NOTE_PREFIX}{}", m.content)),
            Role::User => ("user", m.content.clone()),
            Role::Assistant => ("assistant", m.content.clone()),
        };

        match out.last_mut() {
            Some(prev) if prev.role == role => {
                prev.content.push_str("\n\n");
                prev.content.push_str(&content);
            }
            _ => out.push(ClaudeMessage {
                role: role.to_string(),
                content,
            }),
        }
    }

    let system = (!system_parts.is_empty()).then(|| system_parts.join("\n\n"));
    (system, out)
}

pub fn parse_claude_response(body: &serde_json::Value) -> ReflexionResult<String> {
    let content = body["content"]
        .as_array()
        .ok_or_else(|| ReflexionError::Response("Missing content in Claude response".into()))?;

    let text_parts: Vec<&str> = content
        .iter()
        .filter(|block| block["type"].as_str() == Some("text"))
        .filter_map(|block| block["text"].as_str())
        .collect();

    if text_parts.is_empty() {
        return Err(ReflexionError::Response(
            "No text content in Claude response".into(),
        ));
    }
    Ok(text_parts.join("\n"))
}
