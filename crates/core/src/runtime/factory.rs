//! Agent factory for creating adapter instances from definitions.

use crate::runtime::adapters::{GeminiAdapter, MockAgent};
use crate::runtime::backend::BackendKind;
use crate::runtime::base::Agent;
use anyhow::Result;
use postline_protocol::agent_models::AgentDefinition;
use std::sync::Arc;

/// Factory for creating agent instances based on a definition.
///
/// The definition's model identifier selects the adapter; the definition
/// is validated before any adapter is built, so a half-populated record
/// never reaches a backend.
pub struct AgentFactory;

impl AgentFactory {
    /// Create an agent instance from a definition.
    ///
    /// # Behavior
    ///
    /// - Gemini models build a [`GeminiAdapter`].
    /// - `test-failure-model` and `test-unavailable-model` build the
    ///   corresponding mock variants for tests.
    /// - Any other identifier builds a successful [`MockAgent`].
    ///
    /// # Errors
    ///
    /// Fails fast if the definition is invalid (missing or empty required
    /// field).
    ///
    /// # Examples
    ///
    /// ```
    /// use postline_core::builtin::initial_post_generator;
    /// use postline_core::runtime::AgentFactory;
    ///
    /// let agent = AgentFactory::create(&initial_post_generator()).unwrap();
    /// ```
    pub fn create(definition: &AgentDefinition) -> Result<Arc<dyn Agent>> {
        definition.validate()?;

        match BackendKind::from_model_name(&definition.model) {
            BackendKind::Gemini => {
                let adapter = GeminiAdapter::new(definition)?;
                Ok(Arc::new(adapter))
            }
            BackendKind::Mock => {
                // Support different mock variants for testing based on the
                // model identifier.
                if definition.model == "test-failure-model" {
                    Ok(Arc::new(MockAgent::failing()))
                } else if definition.model == "test-unavailable-model" {
                    Ok(Arc::new(MockAgent::unavailable()))
                } else {
                    Ok(Arc::new(MockAgent::success()))
                }
            }
        }
    }
}
