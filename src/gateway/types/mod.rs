//! Gateway types module
//!
//! Type-safe types for the API boundary:
//!
//! - [`Amount`]: format-validated two-decimal money input
//! - [`ApiResponse<T>`]: unified response wrapper
//! - [`error_codes`]: standard error code constants

pub mod money;
pub mod response;

pub use money::Amount;
pub use response::{ApiResponse, error_codes};
