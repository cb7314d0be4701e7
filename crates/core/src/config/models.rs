//! Configuration models that aggregate all settings.

use postline_protocol::agent_models::AgentDefinition;
use serde::{Deserialize, Serialize};

/// Global settings from `.postline/config.toml`.
///
/// # Example
///
/// ```toml
/// # .postline/config.toml
/// model = "gemini-2.0-flash"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GlobalConfig {
    /// Default model backend for definitions that omit `model` in their
    /// front matter. A definition's own model always takes precedence.
    #[serde(default)]
    pub model: Option<String>,
}

/// Unified configuration loaded from the `.postline/` directory.
///
/// Aggregates the global settings from `config.toml` and every agent
/// definition from `agents/*.md`. Missing files or directories produce
/// the default empty configuration, not an error.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// All agent definitions loaded from `agents/*.md`, validated.
    pub agents: Vec<AgentDefinition>,
}

impl AppConfig {
    /// Look up a loaded definition by name.
    pub fn agent(&self, name: &str) -> Option<&AgentDefinition> {
        self.agents.iter().find(|a| a.name == name)
    }
}
