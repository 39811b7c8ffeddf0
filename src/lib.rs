//! Ledger Gate - minimal account ledger service
//!
//! Users hold a two-decimal monetary balance; one operation atomically
//! moves funds between two accounts over PostgreSQL.
//!
//! # Modules
//!
//! - [`transfer`] - Funds transfer engine (the correctness-critical core)
//! - [`account`] - Account models and PostgreSQL store
//! - [`auth`] - Signup/signin and JWT verification
//! - [`gateway`] - axum HTTP layer, error-to-status mapping, OpenAPI docs
//! - [`config`] - yaml + env configuration
//! - [`db`] - connection pool management
//! - [`logging`] - tracing setup

pub mod account;
pub mod auth;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountId, AccountStore};
pub use db::Database;
pub use transfer::{TransferEngine, TransferError};
