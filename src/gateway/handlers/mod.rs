//! Gateway HTTP handlers

pub mod health;
pub mod transfer;
pub mod users;

pub use health::{HealthResponse, __path_health_check, health_check};
pub use transfer::{TransferRequest, __path_create_transfer, create_transfer};
pub use users::{
    SignupResponse, __path_list_accounts, __path_signin, __path_signup, list_accounts, signin,
    signup,
};

/// Flatten a validation failure into one stable, human-readable line,
/// fields sorted alphabetically.
pub(crate) fn violation_summary(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let msg = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            parts.push(format!("{}: {}", field, msg));
        }
    }
    parts.sort();
    parts.join("; ")
}
