//! Assistant error types.

use thiserror::Error;

use crate::generator::GenerationError;

/// Errors surfaced to the caller of `Assistant::submit`.
///
/// Ledger failures never appear here; the dispatcher absorbs them.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("text generation failed: {0}")]
    ExternalService(#[from] GenerationError),
}

/// Convenience alias for assistant results.
pub type AssistantResult<T> = Result<T, AssistantError>;
