//! Chat-completion clients.
//!
//! [`LlmClient`] is the single "complete a conversation" capability the
//! agent depends on. A failed call is returned to the caller as-is; there
//! is no retry or backoff layer.

pub mod anthropic;
pub mod client;
pub mod config;
pub mod openai;

pub use anthropic::AnthropicClient;
pub use client::{ChatMessage, LlmClient, LlmRequest, LlmResponse, Role, TokenUsage};
pub use config::{build_llm_client, LlmConfig, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
pub use openai::OpenAiClient;
