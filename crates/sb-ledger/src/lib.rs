//! Ledger adapters for the betting vault contract.
//!
//! Provides the `LedgerClient` abstraction over the contract's four read-only
//! view functions, an Aptos fullnode implementation, a scripted mock for
//! tests, and the builder for the unsigned `deposit` payload.

pub mod aptos;
pub mod client;
pub mod config;
pub mod deposit;
pub mod error;
pub mod mock;

pub use aptos::AptosViewClient;
pub use client::{LedgerClient, LedgerQuery};
pub use config::LedgerConfig;
pub use deposit::deposit_payload;
pub use error::{LedgerError, LedgerResult};
pub use mock::MockLedger;
