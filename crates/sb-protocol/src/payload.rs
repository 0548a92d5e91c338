//! Unsigned transaction payloads handed to the wallet for signing.

use serde::{Deserialize, Serialize};

/// Aptos entry-function payload, in the JSON shape wallets accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunctionPayload {
    /// Always `entry_function_payload`.
    #[serde(rename = "type")]
    pub payload_type: String,
    /// Fully qualified function id (`<address>::<module>::<function>`).
    pub function: String,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    /// Move arguments; u64 values are encoded as decimal strings.
    #[serde(default)]
    pub arguments: Vec<String>,
}

impl EntryFunctionPayload {
    pub fn new(function: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            payload_type: "entry_function_payload".into(),
            function: function.into(),
            type_arguments: Vec::new(),
            arguments,
        }
    }
}

/// Request body for building a deposit payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositRequest {
    /// Stake amount in APT.
    pub amount_apt: f64,
}
