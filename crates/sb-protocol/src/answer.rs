use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commands::CommandToken;

/// Question submitted to the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Raw user question. A missing or null field is treated like an empty one.
    #[serde(default)]
    pub prompt: Option<String>,
}

impl AskRequest {
    /// The question text, empty when none was sent.
    pub fn question(&self) -> &str {
        self.prompt.as_deref().unwrap_or_default()
    }
}

/// Where the response text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Templated sentence built from a fresh ledger reading.
    Ledger,
    /// Classifier text passed through unchanged.
    Conversational,
    /// Apology returned because a ledger read failed.
    Fallback,
}

/// Assistant answer returned to the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Unique answer ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Natural-language response shown to the user.
    pub response: String,
    pub source: AnswerSource,
    /// Command token the question was routed to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandToken>,
    /// End-to-end processing latency in milliseconds.
    pub latency_ms: u64,
    pub answered_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(
        response: impl Into<String>,
        source: AnswerSource,
        command: Option<CommandToken>,
        latency_ms: u64,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            response: response.into(),
            source,
            command,
            latency_ms,
            answered_at: Utc::now(),
        }
    }
}
