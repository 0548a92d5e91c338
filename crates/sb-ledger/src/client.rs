//! Ledger query abstraction.
//!
//! `LedgerClient` has one method per read-only view function of the vault
//! contract. Two impls:
//! - `AptosViewClient`: calls a fullnode's `/view` endpoint (in `aptos.rs`)
//! - `MockLedger`: scripted readings and call recording (in `mock.rs`)

use async_trait::async_trait;

use crate::error::LedgerResult;

/// The four read-only queries the assistant can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerQuery {
    VaultBalance,
    DepositCount,
    Depositors,
    ReturnPercentage,
}

impl LedgerQuery {
    /// Name of the Move view function backing this query.
    pub fn function_name(&self) -> &'static str {
        match self {
            LedgerQuery::VaultBalance => "get_vault_balance",
            LedgerQuery::DepositCount => "get_deposit_count",
            LedgerQuery::Depositors => "get_all_depositors",
            LedgerQuery::ReturnPercentage => "get_gambler_return_percentage",
        }
    }
}

/// Read-only access to the vault contract. Every call hits the ledger; nothing is cached.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Vault balance in octas.
    async fn get_vault_balance(&self) -> LedgerResult<u64>;

    /// Number of deposits received by the pool.
    async fn count_deposits(&self) -> LedgerResult<u64>;

    /// Depositor address of every deposit, in deposit order. May repeat.
    async fn list_depositors(&self) -> LedgerResult<Vec<String>>;

    /// Current gambler return percentage.
    async fn get_return_percentage(&self) -> LedgerResult<f64>;
}
