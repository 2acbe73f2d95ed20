//! Scripted backend for unit tests.

use super::LlmBackend;
use crate::config::GenerationParams;
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use reflexion_core::{ReflexionError, ReflexionResult};
use std::sync::{Arc, Mutex};

/// Replies from a queue and records every prompt it receives.
#[derive(Clone, Default)]
pub(crate) struct ScriptedBackend {
    replies: Arc<Mutex<Vec<ReflexionResult<String>>>>,
    prompts: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl ScriptedBackend {
    pub(crate) fn new(replies: Vec<ReflexionResult<String>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            prompts: Arc::default(),
        }
    }

    pub(crate) fn texts(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub(crate) fn prompts(&self) -> Vec<Vec<ChatMessage>> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub(crate) fn last_prompt(&self) -> Vec<ChatMessage> {
        self.prompts().pop().unwrap_or_default()
    }
}

#[async_trait]
impl LlmBackend for ScriptedBackend {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &GenerationParams,
    ) -> ReflexionResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(messages.to_vec());
        }
        let mut replies = self
            .replies
            .lock()
            .map_err(|_| ReflexionError::Http("mock poisoned".into()))?;
        if replies.is_empty() {
            Err(ReflexionError::Http("ScriptedBackend: no more replies".into()))
        } else {
            replies.remove(0)
        }
    }
}

/// Wraps a scripted backend in a client with fixed test parameters.
pub(crate) fn client(backend: &ScriptedBackend) -> crate::llm::LlmClient {
    crate::llm::LlmClient::from_backend(
        Box::new(backend.clone()),
        GenerationParams {
            model: "mock-model".to_string(),
            max_tokens: 256,
            temperature: 0.0,
        },
    )
}
