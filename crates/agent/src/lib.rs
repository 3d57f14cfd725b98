//! The PMM evaluator: mode-based tool selection, specialist records,
//! settings and the conversation agent.

pub mod agent;
pub mod config;
pub mod prompts;
pub mod quickstart;
pub mod selector;
pub mod subagents;

pub use agent::{compose_system_prompt, create_pmm_agent, Conversation, PmmAgent};
pub use config::AgentSettings;
pub use selector::{select, AgentAssembly, AgentOptions, Mode, CONFIRMATION_REQUIRED};
pub use subagents::{SubagentSpec, SPECIALISTS};
