//! Gemini adapter driving a local `gemini-cli` process.
//!
//! The adapter writes one newline-delimited JSON request to the CLI's
//! stdin and converts the NDJSON response lines on stdout into agent
//! events.

use crate::runtime::base::{Agent, AgentError, AgentEvent, AgentEventStream, ExecutionContext};
use async_trait::async_trait;
use postline_protocol::agent_models::AgentDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tokio_stream::StreamExt;

const GEMINI_CLI: &str = "gemini-cli";

/// Adapter for Gemini model backends.
///
/// Holds the immutable pieces of the definition it was built from; the
/// per-run prompt and state arrive with each [`ExecutionContext`].
pub struct GeminiAdapter {
    name: String,
    model: String,
    instruction: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter from an agent definition.
    pub fn new(definition: &AgentDefinition) -> Result<Self, AgentError> {
        Ok(Self {
            name: definition.name.clone(),
            model: definition.model.clone(),
            instruction: definition.instruction.clone(),
        })
    }
}

#[async_trait]
impl Agent for GeminiAdapter {
    async fn check_availability(&self) -> bool {
        let cli_available = which::which(GEMINI_CLI).is_ok();
        let api_key_available = std::env::var("GEMINI_API_KEY").is_ok();
        cli_available && api_key_available
    }

    async fn execute(&self, context: &ExecutionContext) -> Result<AgentEventStream, AgentError> {
        let mut child = Command::new(GEMINI_CLI)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                tracing::warn!(agent = %self.name, error = %e, "failed to spawn gemini-cli");
                AgentError::ExecutionError(format!("Failed to spawn {}: {}", GEMINI_CLI, e))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AgentError::ExecutionError("Failed to capture stdin".to_string()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AgentError::ExecutionError("Failed to capture stdout".to_string()))?;

        let request = GenerateRequest {
            model: self.model.clone(),
            system: self.instruction.clone(),
            prompt: context.prompt.clone(),
            state: context.state.clone(),
        };

        let request_line = serde_json::to_string(&request).map_err(|e| {
            AgentError::ExecutionError(format!("Failed to serialize request: {}", e))
        })?;

        stdin
            .write_all(request_line.as_bytes())
            .await
            .map_err(|e| AgentError::ExecutionError(format!("Failed to write request: {}", e)))?;
        stdin
            .write_all(b"\n")
            .await
            .map_err(|e| AgentError::ExecutionError(format!("Failed to write newline: {}", e)))?;
        stdin
            .flush()
            .await
            .map_err(|e| AgentError::ExecutionError(format!("Failed to flush stdin: {}", e)))?;

        // Close stdin to signal end of input.
        drop(stdin);

        let lines = BufReader::new(stdout).lines();
        let lines_stream = tokio_stream::wrappers::LinesStream::new(lines);

        let events_stream = lines_stream.filter_map(|line_result| match line_result {
            Ok(line) => {
                if line.trim().is_empty() {
                    return None;
                }

                match serde_json::from_str::<ResponseLine>(&line) {
                    Ok(response) => convert_response_line(response),
                    Err(e) => Some(Err(AgentError::StreamParseError(format!(
                        "Failed to parse response line: {} (line: {})",
                        e, line
                    )))),
                }
            }
            Err(e) => Some(Err(AgentError::StreamParseError(e.to_string()))),
        });

        Ok(Box::pin(events_stream))
    }
}

/// One generation request, written as a single NDJSON line.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    system: String,
    prompt: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    state: HashMap<String, String>,
}

/// One NDJSON line read back from the CLI.
#[derive(Debug, Deserialize)]
struct ResponseLine {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<ResponseError>,
    #[serde(default)]
    done: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    code: i32,
    message: String,
}

/// Convert one response line to an agent event.
fn convert_response_line(line: ResponseLine) -> Option<Result<AgentEvent, AgentError>> {
    if let Some(error) = line.error {
        return Some(Err(AgentError::ApiError(format!(
            "Gemini API error (code {}): {}",
            error.code, error.message
        ))));
    }

    if let Some(text) = line.text {
        if !text.is_empty() {
            return Some(Ok(AgentEvent::MessageChunk(text)));
        }
        return None;
    }

    if line.done == Some(true) {
        return Some(Ok(AgentEvent::Completed));
    }

    None
}
