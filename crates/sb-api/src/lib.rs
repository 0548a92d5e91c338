//! StreamBet API: library crate for the assistant HTTP server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `sb-e2e-tests`) can access `AppState`, `build_router`, and the
//! config types.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
