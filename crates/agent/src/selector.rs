//! Mode-based assembly of tools, specialists and prompt.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use pmm_common::PmmError;
use pmm_tools::{ToolGroup, ToolKind};

use crate::prompts::PMM_EVALUATOR_SYSTEM_PROMPT;
use crate::subagents::{SubagentSpec, SPECIALISTS};

/// Operations that pause for human review before their output is final.
pub const CONFIRMATION_REQUIRED: [ToolKind; 3] = [
    ToolKind::CreatePositioningCanvas,
    ToolKind::CreateMessagingFramework,
    ToolKind::CreateHomepageWireframe,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Analyze existing assets: evaluation and web tools.
    Evaluate,
    /// Generate new assets: creation tools.
    Create,
    #[default]
    Full,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Evaluate, Mode::Create, Mode::Full];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Evaluate => "evaluate",
            Mode::Create => "create",
            Mode::Full => "full",
        }
    }

    pub fn groups(self) -> &'static [ToolGroup] {
        match self {
            Mode::Evaluate => &[ToolGroup::Evaluation, ToolGroup::Web],
            Mode::Create => &[ToolGroup::Creation],
            Mode::Full => &[ToolGroup::Evaluation, ToolGroup::Web, ToolGroup::Creation],
        }
    }

    /// Exposed tools in registry order.
    pub fn tools(self) -> Vec<ToolKind> {
        ToolKind::ALL
            .into_iter()
            .filter(|kind| self.groups().contains(&kind.group()))
            .collect()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| {
                PmmError::Config(format!(
                    "unknown mode '{s}' (expected evaluate, create or full)"
                ))
            })
    }
}

/// Agent construction options; also the `[agent]` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentOptions {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_true")]
    pub use_memory: bool,
    #[serde(default = "default_true")]
    pub include_subagents: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            use_memory: true,
            include_subagents: true,
        }
    }
}

impl AgentOptions {
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentAssembly {
    pub mode: Mode,
    pub tools: Vec<ToolKind>,
    pub subagents: Vec<SubagentSpec>,
    #[serde(skip)]
    pub system_prompt: &'static str,
    pub use_memory: bool,
    pub interrupt_on: BTreeMap<ToolKind, bool>,
}

impl AgentAssembly {
    pub fn exposes(&self, kind: ToolKind) -> bool {
        self.tools.contains(&kind)
    }

    pub fn requires_confirmation(&self, kind: ToolKind) -> bool {
        self.interrupt_on.get(&kind).copied().unwrap_or(false)
    }
}

/// Pure lookup: equal options always give equal assemblies.
pub fn select(options: &AgentOptions) -> AgentAssembly {
    let subagents = if options.include_subagents {
        SPECIALISTS.to_vec()
    } else {
        Vec::new()
    };

    AgentAssembly {
        mode: options.mode,
        tools: options.mode.tools(),
        subagents,
        system_prompt: PMM_EVALUATOR_SYSTEM_PROMPT,
        use_memory: options.use_memory,
        interrupt_on: interrupt_on(),
    }
}

/// The confirmation set is the same in every mode.
pub fn interrupt_on() -> BTreeMap<ToolKind, bool> {
    CONFIRMATION_REQUIRED
        .into_iter()
        .map(|kind| (kind, true))
        .collect()
}
