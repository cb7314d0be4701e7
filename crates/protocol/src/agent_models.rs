//! Agent definition models for `.postline/agents/*.md`.
//!
//! An agent definition binds a name to a model backend, a fixed instruction,
//! and the key its output is stored under. Definitions are written as
//! Markdown files with YAML front matter; the file body is the instruction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a definition carries a missing or empty required field.
///
/// Definitions built from literal constants never produce this; it guards
/// the path where definitions come from external configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// A required field is absent or contains only whitespace.
    #[error("Agent definition field '{0}' is missing or empty")]
    EmptyField(&'static str),
}

/// A declarative agent configuration.
///
/// Definitions are immutable once constructed: every field is set at
/// construction time and the record exposes no mutating methods. When the
/// runtime executes the agent, its collected textual output is written to
/// the shared run-context under [`output_key`](Self::output_key).
///
/// # Example
///
/// ```markdown
/// ---
/// name: InitialPostGenerator
/// description: Generates the initial LinkedIn post
/// model: gemini-2.0-flash
/// output-key: current_post
/// ---
///
/// You are a LinkedIn Post Generator.
/// ...
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct AgentDefinition {
    /// Identifier for this agent, unique within a registry.
    pub name: String,

    /// Human-readable description. Documentation only; never inspected
    /// by the runtime.
    pub description: String,

    /// Backend model identifier (e.g. "gemini-2.0-flash"). Treated as an
    /// opaque configuration value.
    ///
    /// Optional in front matter: a missing model is filled from the global
    /// configuration at load time, and loading fails if neither is set.
    #[serde(default)]
    pub model: String,

    /// Run-context slot the agent's textual output is stored under, for
    /// later stages to read.
    pub output_key: String,

    /// The fixed prompt handed verbatim to the model backend as its
    /// system/task instruction. No parameters, no interpolation.
    ///
    /// This is the markdown body, not part of the front matter.
    #[serde(skip)]
    pub instruction: String,
}

impl AgentDefinition {
    /// Check that every required field is populated.
    ///
    /// Whitespace-only content counts as empty. Returns the first missing
    /// field; callers loading definitions from external configuration must
    /// fail fast on this rather than keep a partially populated record.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyField("name"));
        }
        if self.model.trim().is_empty() {
            return Err(DefinitionError::EmptyField("model"));
        }
        if self.output_key.trim().is_empty() {
            return Err(DefinitionError::EmptyField("output-key"));
        }
        if self.instruction.trim().is_empty() {
            return Err(DefinitionError::EmptyField("instruction"));
        }
        Ok(())
    }
}
