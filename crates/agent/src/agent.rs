use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use pmm_common::{PmmError, Result};
use pmm_llm::{ChatMessage, LlmClient, LlmRequest};
use pmm_tools::{render_turn, ToolKind};

use crate::selector::{select, AgentAssembly, AgentOptions};

/// Anything that can answer a prompt within an ongoing conversation.
#[async_trait]
pub trait Conversation: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String>;

    /// Renders the `kind` template from `args` and sends the envelope as
    /// the next user turn.
    async fn invoke_tool(&self, kind: ToolKind, args: Value) -> Result<String> {
        let turn = render_turn(kind, args)?;
        self.invoke(&turn).await
    }
}

/// The PMM evaluator bound to a model client.
///
/// With memory enabled every successful turn is appended to the history
/// under this agent's thread id; otherwise each call stands alone.
pub struct PmmAgent {
    client: Arc<dyn LlmClient>,
    assembly: AgentAssembly,
    system_prompt: String,
    thread_id: Uuid,
    history: Mutex<Vec<ChatMessage>>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl PmmAgent {
    pub fn new(client: Arc<dyn LlmClient>, assembly: AgentAssembly) -> Self {
        let system_prompt = compose_system_prompt(&assembly);
        Self {
            client,
            assembly,
            system_prompt,
            thread_id: Uuid::new_v4(),
            history: Mutex::new(Vec::new()),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn assembly(&self) -> &AgentAssembly {
        &self.assembly
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn thread_id(&self) -> Uuid {
        self.thread_id
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().await.clone()
    }

    pub async fn reset(&self) {
        self.history.lock().await.clear();
    }
}

#[async_trait]
impl Conversation for PmmAgent {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(PmmError::MissingInput("prompt".into()));
        }

        // Held across the call so concurrent turns on one thread stay ordered.
        let mut history = self.history.lock().await;

        let mut messages = if self.assembly.use_memory {
            history.clone()
        } else {
            Vec::new()
        };
        messages.push(ChatMessage::user(prompt));

        info!(
            thread_id = %self.thread_id,
            mode = %self.assembly.mode,
            turns = messages.len(),
            "Running agent turn"
        );

        let mut request = LlmRequest::conversation(self.system_prompt.clone(), messages);
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        let response = match self.client.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(thread_id = %self.thread_id, error = %e, "Agent turn failed");
                return Err(e);
            }
        };

        if self.assembly.use_memory {
            history.push(ChatMessage::user(prompt));
            history.push(ChatMessage::assistant(response.content.clone()));
        }

        Ok(response.content)
    }

    async fn invoke_tool(&self, kind: ToolKind, args: Value) -> Result<String> {
        if !self.assembly.exposes(kind) {
            return Err(PmmError::ToolUnavailable {
                tool: kind.name().to_string(),
                mode: self.assembly.mode.to_string(),
            });
        }

        let turn = render_turn(kind, args)?;
        info!(thread_id = %self.thread_id, tool = kind.name(), "Rendered template turn");
        self.invoke(&turn).await
    }
}

pub fn create_pmm_agent(client: Arc<dyn LlmClient>, options: &AgentOptions) -> PmmAgent {
    PmmAgent::new(client, select(options))
}

/// Evaluator prompt followed by the catalogue of exposed frameworks,
/// specialists and operations that need confirmation.
///
/// Frameworks are not callable functions. Their rendered instructions
/// arrive inside user turns headed `## TASK:`.
pub fn compose_system_prompt(assembly: &AgentAssembly) -> String {
    let mut prompt = String::from(assembly.system_prompt.trim_end());

    prompt.push_str("\n\n## ANALYSIS FRAMEWORKS\n");
    prompt.push_str(
        "A user turn that starts with `## TASK:` carries one of these frameworks, rendered: \
         its instructions followed by the user's inputs as JSON. Apply the instructions to \
         those inputs. Otherwise pick the framework that fits the request and follow it \
         in your answer.\n\n",
    );
    for kind in &assembly.tools {
        prompt.push_str(&format!("- `{}`: {}\n", kind.name(), kind.description()));
    }

    if !assembly.subagents.is_empty() {
        prompt.push_str("\n## SPECIALISTS\n");
        for spec in &assembly.subagents {
            let tools: Vec<&str> = spec.tools.iter().map(|kind| kind.name()).collect();
            prompt.push_str(&format!(
                "- `{}`: {} (frameworks: {})\n",
                spec.name,
                spec.description,
                tools.join(", ")
            ));
        }
    }

    let gated: Vec<&str> = assembly
        .tools
        .iter()
        .filter(|kind| assembly.requires_confirmation(**kind))
        .map(|kind| kind.name())
        .collect();
    if !gated.is_empty() {
        prompt.push_str("\n## CONFIRM BEFORE FINALIZING\n");
        prompt.push_str(
            "Present a draft and wait for the user's approval before finalizing output from:\n",
        );
        for name in gated {
            prompt.push_str(&format!("- `{name}`\n"));
        }
    }

    prompt
}
