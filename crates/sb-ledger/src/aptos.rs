//! Aptos fullnode view-function client.
//!
//! Each query is a `POST {node_url}/view` with the fully qualified function id
//! and no arguments. The node answers with a JSON array of return values; the
//! vault functions return exactly one. Move `u64` values arrive as decimal
//! strings, so decoding accepts both strings and plain numbers.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::client::{LedgerClient, LedgerQuery};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};

/// Body of a `/view` request.
#[derive(Serialize)]
struct ViewRequest<'a> {
    function: &'a str,
    type_arguments: Vec<String>,
    arguments: Vec<Value>,
}

/// Client for the vault contract's view functions on an Aptos fullnode.
pub struct AptosViewClient {
    client: reqwest::Client,
    config: LedgerConfig,
}

impl AptosViewClient {
    pub fn new(config: LedgerConfig) -> LedgerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Call a view function and return its first return value.
    async fn view(&self, query: LedgerQuery) -> LedgerResult<Value> {
        let function = self.config.function_id(query.function_name());
        let url = format!("{}/view", self.config.node_url.trim_end_matches('/'));
        tracing::debug!(function = %function, "calling view function");

        let body = ViewRequest {
            function: &function,
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(function = %function, status = %status, "view function failed");
            return Err(LedgerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let values: Vec<Value> = response.json().await?;
        values
            .into_iter()
            .next()
            .ok_or(LedgerError::EmptyResult { function })
    }
}

#[async_trait]
impl LedgerClient for AptosViewClient {
    async fn get_vault_balance(&self) -> LedgerResult<u64> {
        let query = LedgerQuery::VaultBalance;
        decode_u64(query, self.view(query).await?)
    }

    async fn count_deposits(&self) -> LedgerResult<u64> {
        let query = LedgerQuery::DepositCount;
        decode_u64(query, self.view(query).await?)
    }

    async fn list_depositors(&self) -> LedgerResult<Vec<String>> {
        let query = LedgerQuery::Depositors;
        decode_addresses(query, self.view(query).await?)
    }

    async fn get_return_percentage(&self) -> LedgerResult<f64> {
        let query = LedgerQuery::ReturnPercentage;
        decode_f64(query, self.view(query).await?)
    }
}

fn decode_error(query: LedgerQuery, value: &Value) -> LedgerError {
    LedgerError::Decode {
        function: query.function_name().into(),
        value: value.to_string(),
    }
}

fn decode_u64(query: LedgerQuery, value: Value) -> LedgerResult<u64> {
    let parsed = match &value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    };
    parsed.ok_or_else(|| decode_error(query, &value))
}

fn decode_f64(query: LedgerQuery, value: Value) -> LedgerResult<f64> {
    let parsed = match &value {
        Value::String(s) => s.parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| decode_error(query, &value))
}

fn decode_addresses(query: LedgerQuery, value: Value) -> LedgerResult<Vec<String>> {
    let Value::Array(items) = &value else {
        return Err(decode_error(query, &value));
    };
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| decode_error(query, &value))
        })
        .collect()
}
