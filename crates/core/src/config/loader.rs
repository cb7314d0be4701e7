//! Configuration file loader for the `.postline/` directory structure.
//!
//! Layout:
//! - `config.toml`: global settings (default model backend)
//! - `agents/*.md`: agent definitions with YAML front matter; the markdown
//!   body is the instruction

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::models::{AppConfig, GlobalConfig};
use gray_matter::engine::YAML;
use gray_matter::Matter;
use postline_protocol::agent_models::AgentDefinition;
use std::path::Path;
use walkdir::WalkDir;

/// Loads all configuration from the `.postline/` directory under `root`.
///
/// Every loaded definition is validated before it is returned: a file with
/// a missing or empty required field fails the whole load with
/// [`ConfigError::InvalidDefinition`] rather than producing a partially
/// populated record. A definition that omits `model` in its front matter
/// inherits the global `model` from `config.toml`.
///
/// If `.postline/` (or any of its subpaths) does not exist, the default
/// empty configuration is returned.
///
/// # Errors
///
/// Returns `ConfigError` if files exist but cannot be read, have invalid
/// TOML or front matter syntax, or describe an invalid definition.
///
/// # Example
///
/// ```rust,no_run
/// use postline_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} agent definitions", config.agents.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let postline_dir = root.join(".postline");

    if !postline_dir.exists() {
        return Ok(AppConfig::default());
    }

    let global = load_global_config(&postline_dir)?;
    let agents = load_agents(&postline_dir, &global)?;

    tracing::debug!(
        agents = agents.len(),
        default_model = global.model.as_deref().unwrap_or("<none>"),
        "loaded .postline configuration"
    );

    Ok(AppConfig { global, agents })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(postline_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = postline_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Loads and validates all agent definitions from `agents/*.md`.
fn load_agents(postline_dir: &Path, global: &GlobalConfig) -> ConfigResult<Vec<AgentDefinition>> {
    let agents_dir = postline_dir.join("agents");

    if !agents_dir.exists() {
        return Ok(Vec::new());
    }

    let mut agents = Vec::new();

    for entry in WalkDir::new(&agents_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: agents_dir.clone(),
            source,
        })?;

        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let matter = Matter::<YAML>::new();
        let result = matter.parse(&content);

        let mut agent: AgentDefinition = result
            .data
            .ok_or_else(|| ConfigError::MarkdownParse {
                path: path.to_path_buf(),
                reason: "Missing YAML front matter".to_string(),
            })?
            .deserialize()
            .map_err(|e| ConfigError::MarkdownParse {
                path: path.to_path_buf(),
                reason: format!("Failed to deserialize front matter: {}", e),
            })?;

        // The markdown body is the instruction.
        agent.instruction = result.content;

        // Fill an omitted model from the global default before validating.
        if agent.model.trim().is_empty() {
            if let Some(model) = &global.model {
                agent.model = model.clone();
            }
        }

        agent
            .validate()
            .map_err(|e| ConfigError::InvalidDefinition {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        agents.push(agent);
    }

    Ok(agents)
}
