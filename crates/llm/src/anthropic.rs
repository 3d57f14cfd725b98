use async_trait::async_trait;
use pmm_common::{PmmError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::{LlmClient, LlmRequest, LlmResponse, Role, TokenUsage};
use crate::config::DEFAULT_MAX_TOKENS;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
}

#[derive(Serialize, Debug, Clone)]
struct AnthropicMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    model: String,
    usage: Option<Usage>,
    stop_reason: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Client for the Anthropic Messages API.
pub struct AnthropicClient {
    model: String,
    api_key: String,
    base_url: String,
    default_max_tokens: u32,
    http_client: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: ANTHROPIC_API_URL.to_string(),
            default_max_tokens: DEFAULT_MAX_TOKENS,
            http_client: reqwest::Client::new(),
        }
    }

    /// Override the API host, e.g. for a gateway.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// `max_tokens` used when a request does not set one.
    pub fn with_default_max_tokens(mut self, max_tokens: u32) -> Self {
        self.default_max_tokens = max_tokens;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    // System turns travel in the top-level `system` field, not as messages.
    fn build_body(&self, request: &LlmRequest) -> MessagesRequest {
        let messages = request
            .messages
            .iter()
            .filter_map(|msg| {
                let role = match msg.role {
                    Role::System => return None,
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                Some(AnthropicMessage {
                    role,
                    content: msg.content.clone(),
                })
            })
            .collect();

        MessagesRequest {
            model: self.model.clone(),
            messages,
            system: request.system_prompt.clone(),
            temperature: request.temperature,
            max_tokens: request.max_tokens.unwrap_or(self.default_max_tokens),
        }
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let body = self.build_body(&request);
        debug!(
            model = %self.model,
            messages = body.messages.len(),
            max_tokens = body.max_tokens,
            "Sending Anthropic request"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| PmmError::Llm(format!("Anthropic request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Anthropic API returned an error");
            return Err(PmmError::Llm(format!(
                "Anthropic API error {status}: {body_text}"
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| PmmError::Llm(format!("Failed to parse Anthropic response: {e}")))?;

        let content = parsed
            .content
            .into_iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(LlmResponse {
            content,
            model: parsed.model,
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.input_tokens,
                completion_tokens: u.output_tokens,
            }),
            finish_reason: parsed.stop_reason,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
