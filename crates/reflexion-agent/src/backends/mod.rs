pub mod claude;
pub mod openai;

#[cfg(test)]
pub(crate) mod mock;

use crate::config::GenerationParams;
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use reflexion_core::{ReflexionError, ReflexionResult};
use tracing::warn;

/// Trait for LLM provider backends.
///
/// A backend receives an ordered, role-tagged message list plus generation
/// parameters and returns the generated text. Any provider failure surfaces
/// as a single [`ReflexionError`]; backends never retry.
///
/// To add a new provider:
/// 1. Create a new module in `backends/`
/// 2. Implement `LlmBackend` for your struct
/// 3. Add the variant to `LlmProvider` enum in `config.rs`
/// 4. Wire it up in `LlmClient::new()` in `llm.rs`
#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> ReflexionResult<String>;
}

/// Reads a JSON body, mapping non-success statuses to a provider error.
pub(crate) async fn read_json(
    resp: reqwest::Response,
    provider: &str,
) -> ReflexionResult<serde_json::Value> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        warn!(provider, status = status.as_u16(), "Provider rejected request");
        return Err(ReflexionError::provider(
            status.as_u16(),
            format!("{provider} API error: {body}"),
        ));
    }
    resp.json()
        .await
        .map_err(|e| ReflexionError::Response(format!("{provider} returned invalid JSON: {e}")))
}
