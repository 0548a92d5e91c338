//! Shared application state for the Axum server.

use std::sync::Arc;

use sb_assistant::{Assistant, OpenAiClient};
use sb_ledger::{AptosViewClient, LedgerConfig};

use crate::config::ApiConfig;

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// Question classifier + ledger dispatcher.
    pub assistant: Arc<Assistant>,
    /// Contract addressing, used to build deposit payloads.
    pub ledger: Arc<LedgerConfig>,
}

impl AppState {
    pub fn new(assistant: Assistant, ledger: LedgerConfig) -> Self {
        Self {
            assistant: Arc::new(assistant),
            ledger: Arc::new(ledger),
        }
    }

    /// Wire the real OpenAI and Aptos clients from configuration.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let generator = Arc::new(OpenAiClient::new(config.openai.clone())?);
        let ledger = Arc::new(AptosViewClient::new(config.ledger.clone())?);
        let assistant = Assistant::new(generator, ledger, &config.assistant);
        Ok(Self::new(assistant, config.ledger.clone()))
    }
}
