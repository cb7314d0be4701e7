//! Shared run-context models.
//!
//! A run-context is the keyed store that agents write their collected
//! output into. Later stages read what earlier agents wrote; the context
//! itself imposes no ordering and owns no control flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Keyed state shared across the stages of one run.
///
/// Each agent execution stores its textual result under the agent's
/// output key. Keys are overwritten on re-execution; distinct contexts
/// share no state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunContext {
    /// Unique identifier for this run.
    pub id: Uuid,

    /// When the context was created.
    pub started_at: DateTime<Utc>,

    /// Output-key to collected text.
    values: HashMap<String, String>,
}

impl RunContext {
    /// Create an empty context with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            values: HashMap::new(),
        }
    }

    /// Read the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Whether a value has been stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Cloned view of the stored values, for handing to an agent as
    /// read-only request context.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.values.clone()
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values have been stored yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}
