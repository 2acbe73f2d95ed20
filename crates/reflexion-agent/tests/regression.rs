//! Regression tests for reflexion-agent: ModelConfig, LlmProvider, InsightsScope.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use reflexion_agent::{InsightsScope, LlmProvider, ModelConfig};

// --- ModelConfig & LlmProvider ---

#[test]
fn test_llm_provider_serialization() {
    let cases = [
        (LlmProvider::Claude, "\"claude\""),
        (LlmProvider::OpenAi, "\"openai\""),
        (LlmProvider::OpenRouter, "\"openrouter\""),
        (LlmProvider::Groq, "\"groq\""),
    ];
    for (provider, expected) in cases {
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, expected);
        let back: LlmProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(back, provider);
    }
}

#[test]
fn test_model_config_serialization_omits_api_key() {
    let config = ModelConfig {
        provider: LlmProvider::OpenRouter,
        model_id: "anthropic/claude-sonnet-4".to_string(),
        api_key: "sk-test-123".to_string(),
        api_key_env: None,
        api_base_url: None,
        temperature: 0.5,
        max_tokens: 2048,
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("sk-test-123"));

    let deserialized: ModelConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.provider, LlmProvider::OpenRouter);
    assert_eq!(deserialized.model_id, "anthropic/claude-sonnet-4");
    assert_eq!(deserialized.temperature, 0.5);
    assert_eq!(deserialized.max_tokens, 2048);
    assert!(deserialized.api_key.is_empty());
}

#[test]
fn test_model_config_base_url_defaults() {
    let url_for = |provider| ModelConfig {
        provider,
        ..ModelConfig::default()
    };
    assert_eq!(url_for(LlmProvider::Claude).base_url(), "https://api.anthropic.com");
    assert_eq!(url_for(LlmProvider::OpenAi).base_url(), "https://api.openai.com");
    assert_eq!(
        url_for(LlmProvider::OpenRouter).base_url(),
        "https://openrouter.ai/api"
    );
    assert_eq!(
        url_for(LlmProvider::Groq).base_url(),
        "https://api.groq.com/openai"
    );
}

#[test]
fn test_model_config_base_url_custom_override() {
    let config = ModelConfig {
        provider: LlmProvider::Claude,
        api_base_url: Some("http://localhost:8080".to_string()),
        ..ModelConfig::default()
    };
    assert_eq!(config.base_url(), "http://localhost:8080");
}

#[test]
fn test_model_config_deserialization_with_defaults() {
    let toml_str = r#"
        provider = "claude"
        model_id = "test-model"
    "#;

    let config: ModelConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.provider, LlmProvider::Claude);
    assert_eq!(config.temperature, 0.7); // default
    assert_eq!(config.max_tokens, 4096); // default
    assert!(config.api_key.is_empty());
    assert!(config.api_base_url.is_none());
    assert_eq!(config.api_key_env(), "ANTHROPIC_API_KEY");
}

#[test]
fn test_model_config_custom_key_env() {
    let toml_str = r#"
        provider = "groq"
        model_id = "llama-3.1-8b-instant"
        api_key_env = "MY_GROQ_KEY"
    "#;

    let config: ModelConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.api_key_env(), "MY_GROQ_KEY");
}

// --- InsightsScope ---

#[test]
fn test_insights_scope_wire_names() {
    assert_eq!(
        serde_json::to_string(&InsightsScope::Shared).unwrap(),
        "\"shared\""
    );
    assert_eq!(
        serde_json::to_string(&InsightsScope::PerSession).unwrap(),
        "\"per_session\""
    );
    assert_eq!(InsightsScope::default(), InsightsScope::Shared);
}
