//! The reflection-learning loop of the Reflexion agent.
//!
//! A [`SelfImprovingAgent`] answers user turns, periodically reflects on its
//! own transcript and folds the learned summary back into the next prompt.
//! The language model itself is an external collaborator reached through the
//! [`LlmBackend`] trait.

pub mod agent;
pub mod backends;
pub mod config;
pub mod llm;
pub mod prompt;
pub mod reflection;

pub use agent::{InsightsScope, SelfImprovingAgent};
pub use backends::LlmBackend;
pub use config::{GenerationParams, LlmProvider, ModelConfig};
pub use llm::LlmClient;
pub use prompt::{ChatMessage, LEARNED_MARKER};
