use super::{read_json, LlmBackend};
use crate::config::{GenerationParams, LlmProvider, ModelConfig};
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use reflexion_core::{ReflexionError, ReflexionResult};
use tracing::debug;

/// OpenAI-compatible API backend.
///
/// Works with OpenAI, OpenRouter, Groq, Ollama, and any other provider
/// that implements the OpenAI chat completions API.
pub struct OpenAiBackend {
    config: ModelConfig,
    http: reqwest::Client,
}

impl OpenAiBackend {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// System messages may appear anywhere in the list, so roles map 1:1.
    pub fn build_messages(messages: &[ChatMessage]) -> Vec<serde_json::Value> {
        messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "content": m.content,
                })
            })
            .collect()
    }

    fn add_provider_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");

        // OpenRouter requires extra headers
        if matches!(self.config.provider, LlmProvider::OpenRouter) {
            request
                .header("HTTP-Referer", "https://github.com/reflexion-agent/reflexion")
                .header("X-Title", "Reflexion")
        } else {
            request
        }
    }
}

#[async_trait]
impl LlmBackend for OpenAiBackend {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> ReflexionResult<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url());

        let body = serde_json::json!({
            "model": params.model,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
            "messages": Self::build_messages(messages),
        });

        debug!(url = %url, messages = messages.len(), "Sending chat completion");

        let resp = self
            .add_provider_headers(self.http.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ReflexionError::Http(e.to_string()))?;

        let resp_body = read_json(resp, "OpenAI").await?;
        parse_openai_response(&resp_body)
    }
}

pub fn parse_openai_response(body: &serde_json::Value) -> ReflexionResult<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ReflexionError::Response("Missing message content in OpenAI response".into()))
}
