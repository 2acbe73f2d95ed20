use crate::backends::claude::ClaudeBackend;
use crate::backends::openai::OpenAiBackend;
use crate::backends::LlmBackend;
use crate::config::{GenerationParams, LlmProvider, ModelConfig};
use crate::prompt::ChatMessage;
use reflexion_core::ReflexionResult;
use tracing::{debug, warn};

/// LLM client that dispatches to the correct provider backend.
///
/// Uses the `LlmBackend` trait to abstract away provider-specific API differences.
/// Each call is a single request: no retry, no backoff.
pub struct LlmClient {
    backend: Box<dyn LlmBackend>,
    params: GenerationParams,
}

impl LlmClient {
    pub fn new(config: ModelConfig) -> Self {
        let params = config.params();
        let backend: Box<dyn LlmBackend> = match config.provider {
            LlmProvider::Claude => Box::new(ClaudeBackend::new(config)),
            LlmProvider::OpenAi | LlmProvider::OpenRouter | LlmProvider::Groq => {
                Box::new(OpenAiBackend::new(config))
            }
        };
        Self { backend, params }
    }

    /// Create from a pre-built backend (for custom/external providers).
    pub fn from_backend(backend: Box<dyn LlmBackend>, params: GenerationParams) -> Self {
        Self { backend, params }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// One completion request; provider errors are returned unmodified.
    pub async fn complete(&self, messages: &[ChatMessage]) -> ReflexionResult<String> {
        debug!(
            model = %self.params.model,
            messages = messages.len(),
            "LLM completion"
        );
        let result = self.backend.complete(messages, &self.params).await;
        if let Err(e) = &result {
            warn!(model = %self.params.model, error = %e, "LLM completion failed");
        }
        result
    }
}
