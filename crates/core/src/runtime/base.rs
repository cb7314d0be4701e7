//! Base Agent trait and supporting types.

use async_trait::async_trait;
use std::collections::HashMap;
use std::pin::Pin;
use thiserror::Error;
use tokio_stream::Stream;

/// Request context passed to agents during execution.
///
/// Carries the user-turn prompt and a read-only snapshot of the
/// run-context values written by earlier stages. The agent's fixed
/// instruction is not part of the request; adapters hold it from the
/// definition they were built from.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// The request prompt for this execution.
    pub prompt: String,

    /// Snapshot of run-context values, keyed by output key.
    pub state: HashMap<String, String>,
}

impl ExecutionContext {
    /// Create a new ExecutionContext with the given prompt and no state.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            state: HashMap::new(),
        }
    }

    /// Attach a run-state snapshot.
    pub fn with_state(mut self, state: HashMap<String, String>) -> Self {
        self.state = state;
        self
    }

    /// Attach a single state value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.state.insert(key.into(), value.into());
        self
    }
}

/// Incremental output produced by an executing agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentEvent {
    /// Intermediate reasoning, never part of the collected output.
    Thought(String),
    /// A chunk of the textual response.
    MessageChunk(String),
    /// The backend finished producing output.
    Completed,
}

/// Runtime invocation failures.
///
/// Configuration-time failures never appear here; they are reported by
/// the config layer before an agent exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Agent not available: {0}")]
    NotAvailable(String),
    #[error("API call failed: {0}")]
    ApiError(String),
    #[error("Stream parsing error: {0}")]
    StreamParseError(String),
    #[error("Execution failed: {0}")]
    ExecutionError(String),
    #[error("Agent '{0}' completed without producing output")]
    OutputEmpty(String),
}

/// Stream of events produced by one agent execution.
pub type AgentEventStream = Pin<Box<dyn Stream<Item = Result<AgentEvent, AgentError>> + Send>>;

/// Capability seam between a definition and a model backend.
///
/// Implementations adapt one backend; they are constructed from an
/// [`AgentDefinition`](postline_protocol::agent_models::AgentDefinition)
/// and own nothing beyond what that record carries.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Whether the backend can currently be invoked.
    async fn check_availability(&self) -> bool;

    /// Execute the agent's instruction against its backend, streaming
    /// events until [`AgentEvent::Completed`].
    async fn execute(&self, context: &ExecutionContext) -> Result<AgentEventStream, AgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    struct ScriptedAgent {
        available: bool,
    }

    #[async_trait]
    impl Agent for ScriptedAgent {
        async fn check_availability(&self) -> bool {
            self.available
        }

        async fn execute(
            &self,
            context: &ExecutionContext,
        ) -> Result<AgentEventStream, AgentError> {
            if !self.available {
                return Err(AgentError::NotAvailable("scripted agent offline".to_string()));
            }

            let prompt = context.prompt.clone();
            let stream = tokio_stream::iter(vec![
                Ok(AgentEvent::Thought(format!("Handling: {}", prompt))),
                Ok(AgentEvent::MessageChunk("Draft ".to_string())),
                Ok(AgentEvent::MessageChunk("post".to_string())),
                Ok(AgentEvent::Completed),
            ]);

            Ok(Box::pin(stream))
        }
    }

    #[tokio::test]
    async fn test_agent_execute_streams_events() {
        let agent = ScriptedAgent { available: true };
        let context = ExecutionContext::new("generate the post");

        let mut stream = agent.execute(&context).await.expect("execute should succeed");
        let mut events = Vec::new();
        while let Some(event) = stream.next().await {
            events.push(event.expect("all events should be ok"));
        }

        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], AgentEvent::Thought(_)));
        assert_eq!(events[3], AgentEvent::Completed);
    }

    #[tokio::test]
    async fn test_agent_execute_unavailable() {
        let agent = ScriptedAgent { available: false };
        let context = ExecutionContext::new("generate the post");

        let result = agent.execute(&context).await;
        assert!(matches!(result, Err(AgentError::NotAvailable(_))));
    }

    #[test]
    fn test_execution_context_builder() {
        let context = ExecutionContext::new("generate the post")
            .with_value("current_post", "an earlier draft");

        assert_eq!(context.prompt, "generate the post");
        assert_eq!(
            context.state.get("current_post").map(String::as_str),
            Some("an earlier draft")
        );
    }

    #[test]
    fn test_execution_context_with_state_replaces() {
        let mut state = HashMap::new();
        state.insert("a".to_string(), "1".to_string());

        let context = ExecutionContext::new("prompt")
            .with_value("b", "2")
            .with_state(state);

        assert!(context.state.contains_key("a"));
        assert!(!context.state.contains_key("b"));
    }
}
