//! Mock ledger for testing.
//!
//! Each query either returns its scripted reading or, when no reading was
//! scripted, fails the way an unreachable node would. Every call is recorded
//! for assertions.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{LedgerClient, LedgerQuery};
use crate::error::{LedgerError, LedgerResult};

/// Mock ledger with scripted readings and call recording.
#[derive(Default)]
pub struct MockLedger {
    vault_balance: Option<u64>,
    deposit_count: Option<u64>,
    depositors: Option<Vec<String>>,
    return_percentage: Option<f64>,
    /// Every query issued, in call order.
    calls: Mutex<Vec<LedgerQuery>>,
}

impl MockLedger {
    /// Create a mock where every query fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with a small, plausible pool.
    pub fn with_sample_data() -> Self {
        Self::new()
            .with_vault_balance(150_000_000)
            .with_deposit_count(3)
            .with_depositors(["0xA", "0xB", "0xA"])
            .with_return_percentage(12.0)
    }

    pub fn with_vault_balance(mut self, octas: u64) -> Self {
        self.vault_balance = Some(octas);
        self
    }

    pub fn with_deposit_count(mut self, count: u64) -> Self {
        self.deposit_count = Some(count);
        self
    }

    pub fn with_depositors<I, S>(mut self, depositors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depositors = Some(depositors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_return_percentage(mut self, percentage: f64) -> Self {
        self.return_percentage = Some(percentage);
        self
    }

    /// Get copies of all queries that were issued.
    pub fn calls(&self) -> Vec<LedgerQuery> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times a given query was issued.
    pub fn call_count(&self, query: LedgerQuery) -> usize {
        self.calls.lock().unwrap().iter().filter(|q| **q == query).count()
    }

    fn record<T: Clone>(&self, query: LedgerQuery, reading: &Option<T>) -> LedgerResult<T> {
        self.calls.lock().unwrap().push(query);
        reading.clone().ok_or_else(|| {
            LedgerError::Transport(format!("mock: {} unavailable", query.function_name()))
        })
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn get_vault_balance(&self) -> LedgerResult<u64> {
        self.record(LedgerQuery::VaultBalance, &self.vault_balance)
    }

    async fn count_deposits(&self) -> LedgerResult<u64> {
        self.record(LedgerQuery::DepositCount, &self.deposit_count)
    }

    async fn list_depositors(&self) -> LedgerResult<Vec<String>> {
        self.record(LedgerQuery::Depositors, &self.depositors)
    }

    async fn get_return_percentage(&self) -> LedgerResult<f64> {
        self.record(LedgerQuery::ReturnPercentage, &self.return_percentage)
    }
}
