use async_trait::async_trait;
use pmm_common::{PmmError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::{LlmClient, LlmRequest, LlmResponse, Role, TokenUsage};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct WireMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    model: String,
    usage: Option<WireUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: WireMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Client for OpenAI-compatible chat-completion endpoints.
pub struct OpenAiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(base_url: Option<String>, model: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    fn role_name(role: Role) -> &'static str {
        match role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    fn build_body(&self, request: &LlmRequest) -> ChatCompletionRequest {
        let system = request.system_prompt.iter().map(|s| WireMessage {
            role: "system".to_string(),
            content: Some(s.clone()),
        });
        let turns = request.messages.iter().map(|msg| WireMessage {
            role: Self::role_name(msg.role).to_string(),
            content: Some(msg.content.clone()),
        });

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: system.chain(turns).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_body(&request);
        debug!(model = %self.model, url = %url, messages = body.messages.len(), "Sending chat completion");

        let mut http_req = self.http_client.post(&url).json(&body);
        if let Some(ref key) = self.api_key {
            http_req = http_req.bearer_auth(key);
        }

        let response = http_req
            .send()
            .await
            .map_err(|e| PmmError::Llm(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Chat completion endpoint returned an error");
            return Err(PmmError::Llm(format!(
                "OpenAI API error {status}: {body_text}"
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| PmmError::Llm(format!("Failed to parse OpenAI response: {e}")))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PmmError::Llm("No choices in OpenAI response".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
            model: parsed.model,
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ChatMessage;

    #[test]
    fn system_prompt_leads_the_message_list() {
        let client = OpenAiClient::new(None, "gpt-4o", Some("sk-test".to_string()));
        let request = LlmRequest::conversation(
            "You are a senior PMM.",
            vec![ChatMessage::user("Score this hero")],
        )
        .with_temperature(0.5)
        .with_max_tokens(512);

        let json = serde_json::to_value(client.build_body(&request)).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 512);

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "You are a senior PMM.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Score this hero");
    }

    #[test]
    fn optional_fields_are_omitted() {
        let client = OpenAiClient::new(None, "gpt-4o", None);
        let request = LlmRequest {
            messages: vec![ChatMessage::user("Hello")],
            ..Default::default()
        };

        let json = serde_json::to_value(client.build_body(&request)).unwrap();
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn base_url_defaults_to_openai() {
        let client = OpenAiClient::new(None, "gpt-4o", None);
        assert_eq!(client.base_url, "https://api.openai.com");
        let local = OpenAiClient::new(Some("http://localhost:11434/".into()), "llama3", None);
        assert_eq!(local.base_url, "http://localhost:11434");
    }
}
