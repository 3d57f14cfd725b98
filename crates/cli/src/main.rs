//! `pmm`: interactive PMM evaluator plus offline template tooling.
//!
//! Usage:
//!   pmm                              # chat (default)
//!   pmm --mode evaluate --no-memory
//!   pmm tools --mode create
//!   pmm render run_five_second_test --args '{"asset_content": "..."}'
//!   pmm schema canvas
//!
//! # Environment Variables
//!
//! - `ANTHROPIC_API_KEY` / `OPENAI_API_KEY` - provider credentials
//! - `PMM_CONFIG` - settings file path
//! - `RUST_LOG` - log filter (default: warn)

mod cli;
mod repl;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pmm_agent::{create_pmm_agent, AgentSettings};
use pmm_common::model::{evaluation_result_schema, positioning_canvas_schema};
use pmm_tools::{ToolGroup, ToolKind};

use crate::cli::{Cli, Commands, SchemaKind};
use crate::repl::Repl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the REPL's stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    match cli.command.as_ref().unwrap_or(&Commands::Chat) {
        Commands::Chat => chat(settings).await,
        Commands::Tools => list_tools(cli.mode.map(|mode| mode.tools())),
        Commands::Render { tool, args } => render(tool, args),
        Commands::Schema { kind } => print_schema(*kind),
    }
}

/// Settings file first, then command-line overrides.
fn load_settings(cli: &Cli) -> anyhow::Result<AgentSettings> {
    let mut settings = match &cli.config {
        Some(path) => AgentSettings::from_file(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display()))?,
        None => AgentSettings::default(),
    };

    if let Some(provider) = &cli.provider {
        settings.llm.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        settings.llm.model = model.clone();
    }
    if let Some(mode) = cli.mode {
        settings.agent.mode = mode;
    }
    if cli.no_memory {
        settings.agent.use_memory = false;
    }
    if cli.no_subagents {
        settings.agent.include_subagents = false;
    }
    Ok(settings)
}

async fn chat(settings: AgentSettings) -> anyhow::Result<()> {
    // A local OpenAI-compatible endpoint may run without a key.
    let keyless = settings.llm.provider == "openai" && settings.llm.api_url.is_some();
    if !keyless && !settings.has_api_key() {
        let var = settings.llm.api_key_env_var().unwrap_or("the provider's API key");
        eprintln!("Error: {var} not set.");
        eprintln!("Create a .env file with your API key or set the environment variable.");
        std::process::exit(1);
    }

    println!("\nInitializing PMM Agent...");
    let client = settings.build_client()?;
    let mut agent =
        create_pmm_agent(client, &settings.agent).with_max_tokens(settings.llm.max_tokens);
    if let Some(temperature) = settings.llm.temperature {
        agent = agent.with_temperature(temperature);
    }
    info!(
        thread_id = %agent.thread_id(),
        mode = %settings.agent.mode,
        model = %settings.llm.model,
        "Agent ready"
    );
    println!("Ready!");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(&agent, stdin.lock(), stdout.lock()).run().await
}

fn list_tools(filter: Option<Vec<ToolKind>>) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for group in [ToolGroup::Evaluation, ToolGroup::Web, ToolGroup::Creation] {
        let tools: Vec<ToolKind> = group
            .tools()
            .filter(|kind| filter.as_ref().map_or(true, |f| f.contains(kind)))
            .collect();
        if tools.is_empty() {
            continue;
        }
        writeln!(out, "{group}:")?;
        for kind in tools {
            writeln!(out, "  {:<38} {}", kind.name(), kind.description())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render(tool: &str, args: &str) -> anyhow::Result<()> {
    let args: serde_json::Value =
        serde_json::from_str(args).context("--args must be a JSON object")?;
    let envelope = pmm_tools::render(tool, args)?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn print_schema(kind: SchemaKind) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Evaluation => evaluation_result_schema(),
        SchemaKind::Canvas => positioning_canvas_schema(),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
