//! Agent registry and runner.
//!
//! The registry holds validated definitions with their adapters, looks
//! agents up by name, and runs one agent at a time: execute, collect the
//! streamed text, store it in the run-context under the definition's
//! output key. Sequencing multiple agents belongs to callers.

use crate::runtime::base::{Agent, AgentError, AgentEvent, ExecutionContext};
use crate::runtime::factory::AgentFactory;
use postline_protocol::agent_models::{AgentDefinition, DefinitionError};
use postline_protocol::context_models::RunContext;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio_stream::StreamExt;

/// Errors raised while registering definitions.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A definition with this name is already registered. Names are
    /// unique within a registry.
    #[error("An agent named '{0}' is already registered")]
    DuplicateName(String),

    /// The definition failed validation.
    #[error("Invalid definition for agent '{name}': {source}")]
    InvalidDefinition {
        name: String,
        source: DefinitionError,
    },

    /// The adapter for the definition's model could not be built.
    #[error("Failed to build adapter for agent '{name}': {reason}")]
    AdapterBuild { name: String, reason: String },
}

struct RegisteredAgent {
    definition: AgentDefinition,
    adapter: Arc<dyn Agent>,
}

/// Registry of agent definitions and their backend adapters.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<String, RegisteredAgent>,
}

impl AgentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a set of definitions.
    ///
    /// Each definition gets the adapter its model identifier selects.
    pub fn from_definitions(
        definitions: Vec<AgentDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Register a definition, building the adapter for its model.
    ///
    /// # Errors
    ///
    /// Fails on an invalid definition, a duplicate name, or an adapter
    /// that cannot be built.
    pub fn register(&mut self, definition: AgentDefinition) -> Result<(), RegistryError> {
        let adapter =
            AgentFactory::create(&definition).map_err(|e| RegistryError::AdapterBuild {
                name: definition.name.clone(),
                reason: e.to_string(),
            })?;
        self.register_with(definition, adapter)
    }

    /// Register a definition with an explicitly supplied adapter.
    ///
    /// Used where the adapter choice should not be derived from the model
    /// identifier, e.g. scripted agents in tests.
    pub fn register_with(
        &mut self,
        definition: AgentDefinition,
        adapter: Arc<dyn Agent>,
    ) -> Result<(), RegistryError> {
        definition
            .validate()
            .map_err(|source| RegistryError::InvalidDefinition {
                name: definition.name.clone(),
                source,
            })?;

        if self.agents.contains_key(&definition.name) {
            return Err(RegistryError::DuplicateName(definition.name.clone()));
        }

        self.agents.insert(
            definition.name.clone(),
            RegisteredAgent {
                definition,
                adapter,
            },
        );
        Ok(())
    }

    /// Get an agent's adapter by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(name).map(|a| Arc::clone(&a.adapter))
    }

    /// Get a registered definition by name.
    pub fn definition(&self, name: &str) -> Option<&AgentDefinition> {
        self.agents.get(name).map(|a| &a.definition)
    }

    /// Whether an agent with the given name is registered.
    pub fn has_agent(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// All registered agent names.
    pub fn agent_names(&self) -> Vec<String> {
        self.agents.keys().cloned().collect()
    }

    /// Run one agent and store its output in the run-context.
    ///
    /// Executes the named agent with `prompt` and a snapshot of the
    /// current run-context values, concatenates the streamed message
    /// chunks until completion, writes the collected text into `context`
    /// under the definition's output key, and returns it.
    ///
    /// # Errors
    ///
    /// - [`AgentError::NotAvailable`] if the name is unknown or the
    ///   backend is not available.
    /// - Any error the agent's stream yields.
    /// - [`AgentError::OutputEmpty`] if the agent completes without
    ///   producing text; nothing is stored in that case.
    pub async fn run(
        &self,
        name: &str,
        prompt: &str,
        context: &mut RunContext,
    ) -> Result<String, AgentError> {
        let entry = self.agents.get(name).ok_or_else(|| {
            AgentError::NotAvailable(format!("Agent '{}' not found in registry", name))
        })?;

        if !entry.adapter.check_availability().await {
            return Err(AgentError::NotAvailable(format!(
                "Agent '{}' is not available",
                name
            )));
        }

        tracing::debug!(agent = name, model = %entry.definition.model, "running agent");

        let execution_context = ExecutionContext::new(prompt).with_state(context.snapshot());
        let mut stream = entry.adapter.execute(&execution_context).await?;

        let mut output = String::new();
        while let Some(event) = stream.next().await {
            match event? {
                AgentEvent::Thought(thought) => {
                    tracing::debug!(agent = name, "{}", thought);
                }
                AgentEvent::MessageChunk(chunk) => output.push_str(&chunk),
                AgentEvent::Completed => break,
            }
        }

        if output.trim().is_empty() {
            return Err(AgentError::OutputEmpty(name.to_string()));
        }

        context.set(entry.definition.output_key.clone(), output.clone());

        tracing::debug!(
            agent = name,
            output_key = %entry.definition.output_key,
            chars = output.len(),
            "stored agent output"
        );

        Ok(output)
    }
}
