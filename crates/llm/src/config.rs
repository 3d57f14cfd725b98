use std::sync::Arc;

use pmm_common::{PmmError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::anthropic::AnthropicClient;
use crate::client::LlmClient;
use crate::openai::OpenAiClient;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 20_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "anthropic" or "openai"
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_provider() -> String {
    "anthropic".into()
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            api_url: None,
            temperature: None,
            max_tokens: default_max_tokens(),
        }
    }
}

impl LlmConfig {
    /// Environment variable consulted when no key is configured.
    pub fn api_key_env_var(&self) -> Option<&'static str> {
        match self.provider.as_str() {
            "anthropic" => Some("ANTHROPIC_API_KEY"),
            "openai" => Some("OPENAI_API_KEY"),
            _ => None,
        }
    }

    /// Explicit key first, then the provider's environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Some(key.clone());
        }
        self.api_key_env_var()
            .and_then(|var| std::env::var(var).ok())
            .filter(|k| !k.is_empty())
    }
}

pub fn build_llm_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    let api_key = config.resolve_api_key();

    let client: Arc<dyn LlmClient> = match config.provider.as_str() {
        "anthropic" => {
            let api_key = api_key.ok_or_else(|| {
                PmmError::Config(
                    "Anthropic requires an API key (set ANTHROPIC_API_KEY)".to_string(),
                )
            })?;
            let mut client = AnthropicClient::new(config.model.clone(), api_key)
                .with_default_max_tokens(config.max_tokens);
            if let Some(ref url) = config.api_url {
                client = client.with_base_url(url.clone());
            }
            Arc::new(client)
        }
        "openai" => Arc::new(OpenAiClient::new(
            config.api_url.clone(),
            config.model.clone(),
            api_key,
        )),
        other => {
            return Err(PmmError::Config(format!("Unknown LLM provider: {other}")));
        }
    };

    info!(provider = %config.provider, model = %config.model, "LLM client ready");
    Ok(client)
}
