//! Directory structure and file generation for `.postline/` scaffolding.
//!
//! The agent file is rendered from the built-in typed definition rather
//! than from embedded template text, so the definition record stays the
//! single source of truth.

use super::error::{InitError, InitResult};
use crate::builtin::{initial_post_generator, GEMINI_MODEL};
use postline_protocol::agent_models::AgentDefinition;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for scaffolding a `.postline/` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Target directory where `.postline/` will be created.
    pub target_dir: PathBuf,

    /// Overwrite an existing `.postline/` directory.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Generate a starter `.postline/` directory.
///
/// Creates the following structure:
/// ```text
/// .postline/
/// ├── config.toml
/// └── agents/
///     └── initial-post-generator.md
/// ```
///
/// The agent file round-trips: loading a scaffolded directory yields a
/// definition value-equal to [`initial_post_generator`].
///
/// # Errors
///
/// Returns an `InitError` if `.postline/` already exists without the
/// force flag, or if a directory or file cannot be written.
pub async fn scaffold_postline_dir(options: InitOptions) -> InitResult<()> {
    let postline_dir = options.target_dir.join(".postline");

    if postline_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(postline_dir));
    }

    let agents_dir = postline_dir.join("agents");
    fs::create_dir_all(&agents_dir).map_err(|source| InitError::DirectoryCreate {
        path: agents_dir.clone(),
        source,
    })?;

    write_file(
        &postline_dir.join("config.toml"),
        &format!(
            "# Default model backend for definitions that omit one.\nmodel = \"{}\"\n",
            GEMINI_MODEL
        ),
    )?;

    let generator = initial_post_generator();
    write_file(
        &agents_dir.join("initial-post-generator.md"),
        &render_definition(&generator)?,
    )?;

    tracing::info!(dir = %postline_dir.display(), "scaffolded .postline directory");

    Ok(())
}

/// Render a definition to front-matter markdown, the format the loader
/// reads back.
fn render_definition(definition: &AgentDefinition) -> InitResult<String> {
    let front_matter = serde_yaml::to_string(definition).map_err(|source| InitError::Render {
        name: definition.name.clone(),
        source,
    })?;

    Ok(format!(
        "---\n{}---\n\n{}",
        front_matter, definition.instruction
    ))
}

fn write_file(path: &Path, content: &str) -> InitResult<()> {
    fs::write(path, content).map_err(|source| InitError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
