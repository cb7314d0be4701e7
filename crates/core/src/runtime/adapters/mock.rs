//! Mock agent implementation for testing.

use crate::runtime::base::{Agent, AgentError, AgentEvent, AgentEventStream, ExecutionContext};
use async_trait::async_trait;

/// Deterministic scripted agent.
///
/// Replays a fixed event sequence regardless of the request, which makes
/// registry and run-context behavior testable without a backend.
#[derive(Clone)]
pub struct MockAgent {
    available: bool,
    events: Vec<Result<AgentEvent, AgentError>>,
}

impl MockAgent {
    pub fn new(available: bool, events: Vec<Result<AgentEvent, AgentError>>) -> Self {
        Self { available, events }
    }

    /// An available agent producing a short successful response.
    pub fn success() -> Self {
        Self {
            available: true,
            events: vec![
                Ok(AgentEvent::Thought("Drafting response".to_string())),
                Ok(AgentEvent::MessageChunk("Mock response".to_string())),
                Ok(AgentEvent::Completed),
            ],
        }
    }

    /// An available agent producing the given chunks then completing.
    pub fn with_chunks(chunks: &[&str]) -> Self {
        let mut events: Vec<Result<AgentEvent, AgentError>> = chunks
            .iter()
            .map(|c| Ok(AgentEvent::MessageChunk((*c).to_string())))
            .collect();
        events.push(Ok(AgentEvent::Completed));
        Self {
            available: true,
            events,
        }
    }

    /// An agent whose availability check fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            events: vec![],
        }
    }

    /// An available agent that errors mid-stream.
    pub fn failing() -> Self {
        Self {
            available: true,
            events: vec![
                Ok(AgentEvent::Thought("Starting...".to_string())),
                Err(AgentError::ExecutionError("Mock failure".to_string())),
            ],
        }
    }
}

#[async_trait]
impl Agent for MockAgent {
    async fn check_availability(&self) -> bool {
        self.available
    }

    async fn execute(&self, _context: &ExecutionContext) -> Result<AgentEventStream, AgentError> {
        if !self.available {
            return Err(AgentError::NotAvailable(
                "Mock agent not available".to_string(),
            ));
        }

        let events = self.events.clone();
        Ok(Box::pin(tokio_stream::iter(events)))
    }
}
