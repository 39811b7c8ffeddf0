//! Account management module
//!
//! PostgreSQL-backed storage for user accounts and their balances.

pub mod models;
pub mod store;

pub use models::{Account, AccountId, AccountSummary, AuthRecord, normalize_balance};
pub use store::AccountStore;
