//! Settings file for the agent and its model client.
//!
//! On Unix a settings file is refused when it is world-writable, or when it
//! holds an API key and is world-readable.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use pmm_llm::{build_llm_client, LlmClient, LlmConfig};

use crate::selector::AgentOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub agent: AgentOptions,
}

impl AgentSettings {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid settings TOML")
    }

    /// Loads settings after checking file permissions.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        #[cfg(unix)]
        validate_file_permissions(path)?;

        let settings = Self::from_file_unchecked(path)?;
        if settings.llm.api_key.is_some() {
            warn!(
                path = %path.display(),
                "API key found in settings file; prefer ANTHROPIC_API_KEY or OPENAI_API_KEY"
            );
        }
        Ok(settings)
    }

    /// Loads settings without permission checks. Meant for tests.
    pub fn from_file_unchecked(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn has_api_key(&self) -> bool {
        self.llm.resolve_api_key().is_some()
    }

    pub fn build_client(&self) -> pmm_common::Result<Arc<dyn LlmClient>> {
        build_llm_client(&self.llm)
    }
}

#[cfg(unix)]
fn validate_file_permissions(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;

    if !metadata.is_file() {
        anyhow::bail!("settings path '{}' is not a regular file", path.display());
    }

    let bits = metadata.permissions().mode() & 0o777;
    if bits & 0o002 != 0 {
        anyhow::bail!(
            "settings file '{}' is world-writable (mode {:04o}); fix with: chmod o-w {}",
            path.display(),
            bits,
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let holds_key = toml::from_str::<AgentSettings>(&content)
        .map(|settings| settings.llm.api_key.is_some())
        .unwrap_or_else(|_| content.contains("api_key"));

    if holds_key && bits & 0o004 != 0 {
        anyhow::bail!(
            "settings file '{}' contains an API key but is world-readable (mode {:04o}); \
             fix with: chmod 600 {}",
            path.display(),
            bits,
            path.display()
        );
    }
    if holds_key && bits & 0o040 != 0 {
        warn!(
            path = %path.display(),
            mode = %format!("{bits:04o}"),
            "Settings file with an API key is group-readable"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Mode;

    #[test]
    fn empty_settings_use_defaults() {
        let settings = AgentSettings::from_toml_str("").unwrap();
        assert_eq!(settings, AgentSettings::default());
        assert_eq!(settings.llm.provider, "anthropic");
        assert_eq!(settings.llm.max_tokens, 20_000);
        assert_eq!(settings.agent.mode, Mode::Full);
        assert!(settings.agent.use_memory);
        assert!(settings.agent.include_subagents);
    }

    #[test]
    fn partial_agent_table() {
        let settings = AgentSettings::from_toml_str(
            r#"
            [agent]
            mode = "create"
            include_subagents = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.agent.mode, Mode::Create);
        assert!(settings.agent.use_memory);
        assert!(!settings.agent.include_subagents);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = AgentSettings::from_toml_str("[agent]\nmode = \"audit\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("audit"));
    }
}
