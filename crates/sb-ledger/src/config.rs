//! Ledger node and contract addressing.

use serde::Deserialize;

/// Where the vault contract lives and how to reach it.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Aptos fullnode REST base URL (including the `/v1` prefix).
    #[serde(default = "default_node_url")]
    pub node_url: String,
    /// Account address the contract module is published under.
    #[serde(default = "default_contract_address")]
    pub contract_address: String,
    /// Move module exposing the vault functions.
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_node_url() -> String {
    "https://fullnode.devnet.aptoslabs.com/v1".into()
}
fn default_contract_address() -> String {
    "0x6d5363db550862fb6fdc64ce2a60ff59486a111d53576d3fd70f2c5ebd14b3b1".into()
}
fn default_module_name() -> String {
    "message_board".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            contract_address: default_contract_address(),
            module_name: default_module_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LedgerConfig {
    /// Fully qualified id of a function in the contract module.
    pub fn function_id(&self, function: &str) -> String {
        format!("{}::{}::{}", self.contract_address, self.module_name, function)
    }

    /// Overlay environment variables on top of the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("APTOS_NODE_URL") {
            config.node_url = url;
        }
        if let Ok(address) = std::env::var("SB_CONTRACT_ADDRESS") {
            config.contract_address = address;
        }
        if let Ok(module) = std::env::var("SB_MODULE_NAME") {
            config.module_name = module;
        }
        if let Some(secs) = std::env::var("APTOS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout_secs = secs;
        }
        config
    }
}
