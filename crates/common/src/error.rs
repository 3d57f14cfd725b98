//! Error types for the PMM agent.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PmmError {
    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Score {0} is outside the range 0-100")]
    ScoreOutOfRange(i64),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool {tool} is not available in {mode} mode")]
    ToolUnavailable { tool: String, mode: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PmmError>;
