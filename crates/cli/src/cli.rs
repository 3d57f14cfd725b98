//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use pmm_agent::Mode;

#[derive(Debug, Parser)]
#[command(name = "pmm")]
#[command(about = "Evaluate and create B2B product marketing assets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true, env = "PMM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model provider: anthropic or openai
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Tool set: evaluate, create or full
    #[arg(long, global = true)]
    pub mode: Option<Mode>,

    /// Forget earlier turns on every prompt
    #[arg(long, global = true)]
    pub no_memory: bool,

    /// Leave the specialist subagents out of the catalogue
    #[arg(long, global = true)]
    pub no_subagents: bool,

    /// Subcommand (defaults to chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive session with the evaluator
    Chat,

    /// List tools by group (filtered by --mode when given)
    Tools,

    /// Render a tool's instruction envelope without calling a model
    Render {
        /// Tool name, e.g. run_five_second_test
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Print the JSON Schema of a structured result
    Schema {
        #[arg(value_enum, default_value_t = SchemaKind::Evaluation)]
        kind: SchemaKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// Complete PMM evaluation result
    Evaluation,
    /// Positioning canvas
    Canvas,
}
