//! Text-generation capability used for classification and elaboration.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SamplingConfig;

/// Errors from the external text-generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation transport error: {0}")]
    Transport(String),

    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("generation service returned no content")]
    EmptyCompletion,

    #[error("malformed generation response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenerationError::Decode(e.to_string())
        } else {
            GenerationError::Transport(e.to_string())
        }
    }
}

/// A single-shot generation: a system instruction, an optional user message,
/// and the sampling parameters to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub user: Option<String>,
    pub sampling: SamplingConfig,
}

impl GenerationRequest {
    pub fn new(system: impl Into<String>, sampling: SamplingConfig) -> Self {
        Self {
            system: system.into(),
            user: None,
            sampling,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Trait for text-generation backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the request. Succeeds only with non-empty content.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Backend name (for logging).
    fn name(&self) -> &str;
}
