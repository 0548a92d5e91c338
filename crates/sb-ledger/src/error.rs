//! Ledger error types.

use thiserror::Error;

/// Errors that can occur while talking to the ledger node.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger transport error: {0}")]
    Transport(String),

    #[error("ledger node returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("view function {function} returned no value")]
    EmptyResult { function: String },

    #[error("unexpected value from {function}: {value}")]
    Decode { function: String, value: String },

    #[error("invalid deposit amount: {0}")]
    InvalidAmount(f64),
}

impl From<reqwest::Error> for LedgerError {
    fn from(e: reqwest::Error) -> Self {
        LedgerError::Transport(e.to_string())
    }
}

/// Convenience alias for ledger results.
pub type LedgerResult<T> = Result<T, LedgerError>;
