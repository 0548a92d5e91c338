//! API server configuration.

use serde::Deserialize;

use sb_assistant::{AssistantConfig, OpenAiConfig};
use sb_ledger::LedgerConfig;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Text-generation endpoint used for classification.
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Ledger node and vault contract.
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self {
            openai: OpenAiConfig::from_env(),
            ledger: LedgerConfig::from_env(),
            assistant: AssistantConfig::from_env(),
            ..Self::default()
        };
        if let Ok(host) = std::env::var("SB_HOST") {
            config.host = host;
        }
        if let Some(port) = std::env::var("SB_PORT").ok().and_then(|s| s.parse().ok()) {
            config.port = port;
        }
        config
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            openai: OpenAiConfig::default(),
            ledger: LedgerConfig::default(),
            assistant: AssistantConfig::default(),
        }
    }
}
