use reflexion_agent::{InsightsScope, LlmProvider, ModelConfig};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Contents of `reflexion.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct ReflexionConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub insights_scope: InsightsScope,
    #[serde(default = "default_session")]
    pub default_session: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            insights_scope: InsightsScope::default(),
            default_session: default_session(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_session() -> String {
    "default".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

/// Command-line overrides for the `[model]` table.
#[derive(Debug, Default)]
pub struct ModelOverrides {
    pub provider: Option<LlmProvider>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ReflexionConfig {
    /// Parses the file at `path`. A missing file yields the built-in defaults.
    pub fn load(path: &Path) -> anyhow::Result<(Self, bool)> {
        if !path.exists() {
            return Ok((Self::default(), false));
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Invalid config file '{}': {}", path.display(), e))?;
        Ok((config, true))
    }

    pub fn apply(&mut self, overrides: ModelOverrides) {
        if let Some(provider) = overrides.provider {
            self.model.provider = provider;
        }
        if let Some(model) = overrides.model {
            self.model.model_id = model;
        }
        if let Some(t) = overrides.temperature {
            self.model.temperature = t;
        }
        if let Some(n) = overrides.max_tokens {
            self.model.max_tokens = n;
        }
        info!(
            provider = ?self.model.provider,
            model = %self.model.model_id,
            temperature = self.model.temperature,
            max_tokens = self.model.max_tokens,
            "Model configured"
        );
    }
}
