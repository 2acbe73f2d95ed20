use reflexion_core::{ReflexionError, ReflexionResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Claude,
    OpenAi,
    OpenRouter,
    /// Groq cloud inference, OpenAI-compatible API.
    Groq,
}

impl LlmProvider {
    /// Environment variable the credential is read from by default.
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            LlmProvider::Claude => "ANTHROPIC_API_KEY",
            LlmProvider::OpenAi => "OPENAI_API_KEY",
            LlmProvider::OpenRouter => "OPENROUTER_API_KEY",
            LlmProvider::Groq => "GROQ_API_KEY",
        }
    }
}

impl std::str::FromStr for LlmProvider {
    type Err = ReflexionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "claude" | "anthropic" => Ok(LlmProvider::Claude),
            "openai" => Ok(LlmProvider::OpenAi),
            "openrouter" => Ok(LlmProvider::OpenRouter),
            "groq" => Ok(LlmProvider::Groq),
            other => Err(ReflexionError::Config(format!("Unknown provider '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub provider: LlmProvider,
    pub model_id: String,
    /// Usually left empty in config files and filled by [`ModelConfig::resolve_api_key`].
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Overrides the provider's default credential variable.
    #[serde(default)]
    pub api_key_env: Option<String>,
    pub api_base_url: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAi,
            model_id: "gpt-4o-mini".to_string(),
            api_key: String::new(),
            api_key_env: None,
            api_base_url: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ModelConfig {
    pub fn base_url(&self) -> &str {
        if let Some(url) = &self.api_base_url {
            url
        } else {
            match self.provider {
                LlmProvider::Claude => "https://api.anthropic.com",
                LlmProvider::OpenAi => "https://api.openai.com",
                LlmProvider::OpenRouter => "https://openrouter.ai/api",
                LlmProvider::Groq => "https://api.groq.com/openai",
            }
        }
    }

    /// Name of the environment variable holding the credential.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_api_key_env())
    }

    /// Fills `api_key` from the process environment unless already set.
    pub fn resolve_api_key(&mut self) -> ReflexionResult<()> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`ModelConfig::resolve_api_key`] with an explicit lookup.
    pub fn resolve_api_key_with<F>(&mut self, lookup: F) -> ReflexionResult<()>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if !self.api_key.is_empty() {
            return Ok(());
        }
        let var = self.api_key_env().to_string();
        match lookup(&var).filter(|k| !k.trim().is_empty()) {
            Some(key) => {
                debug!(env = %var, "API key loaded from environment");
                self.api_key = key;
                Ok(())
            }
            None => Err(ReflexionError::Config(format!(
                "No API key for provider {:?}: set {}",
                self.provider, var
            ))),
        }
    }

    /// Generation parameters passed with every completion request.
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            model: self.model_id.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// Per-request generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_from_default_var() {
        let mut config = ModelConfig::default();
        config
            .resolve_api_key_with(|name| {
                assert_eq!(name, "OPENAI_API_KEY");
                Some("sk-env".to_string())
            })
            .unwrap();
        assert_eq!(config.api_key, "sk-env");
    }

    #[test]
    fn test_resolve_api_key_custom_var() {
        let mut config = ModelConfig {
            api_key_env: Some("MY_KEY".to_string()),
            ..ModelConfig::default()
        };
        config
            .resolve_api_key_with(|name| (name == "MY_KEY").then(|| "k".to_string()))
            .unwrap();
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn test_explicit_key_wins_over_environment() {
        let mut config = ModelConfig {
            api_key: "inline".to_string(),
            ..ModelConfig::default()
        };
        config
            .resolve_api_key_with(|_| panic!("environment must not be consulted"))
            .unwrap();
        assert_eq!(config.api_key, "inline");
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let mut config = ModelConfig {
            provider: LlmProvider::Claude,
            ..ModelConfig::default()
        };
        let err = config.resolve_api_key_with(|_| None).unwrap_err();
        assert!(matches!(err, ReflexionError::Config(_)));
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let mut config = ModelConfig::default();
        assert!(config
            .resolve_api_key_with(|_| Some("   ".to_string()))
            .is_err());
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("Claude".parse::<LlmProvider>().unwrap(), LlmProvider::Claude);
        assert_eq!("openrouter".parse::<LlmProvider>().unwrap(), LlmProvider::OpenRouter);
        assert!("bard".parse::<LlmProvider>().is_err());
    }

    #[test]
    fn test_params_mirror_config() {
        let config = ModelConfig {
            model_id: "gpt-4".to_string(),
            temperature: 0.2,
            max_tokens: 512,
            ..ModelConfig::default()
        };
        let params = config.params();
        assert_eq!(params.model, "gpt-4");
        assert_eq!(params.max_tokens, 512);
        assert_eq!(params.temperature, 0.2);
    }
}
