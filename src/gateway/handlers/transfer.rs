//! Funds transfer handler

use axum::{Extension, Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{Amount, ApiResponse, error_codes};
use super::violation_summary;
use crate::auth::Claims;
use crate::transfer::TransferError;

/// Transfer request body
///
/// `fromId`/`toId` are account UUIDs; malformed ids are rejected during
/// deserialization. `amount` is a strict-format decimal string.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_id: Uuid,
    pub to_id: Uuid,
    #[validate(custom(function = validate_transfer_amount))]
    #[schema(value_type = String, example = "30.00")]
    pub amount: Amount,
}

fn validate_transfer_amount(amount: &Amount) -> Result<(), validator::ValidationError> {
    // Scale and sign format are enforced at the serde layer; positivity
    // is the transport-level business rule.
    if amount.inner() <= Decimal::ZERO {
        let mut err = validator::ValidationError::new("amount_positive");
        err.message = Some("amount must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

/// Move funds between two accounts
///
/// POST /api/v1/transfer
///
/// Returns 204 with no body on success; both balances change atomically
/// or not at all.
#[utoipa::path(
    post,
    path = "/api/v1/transfer",
    request_body = TransferRequest,
    responses(
        (status = 204, description = "Transfer committed"),
        (status = 400, description = "Malformed request or self-transfer"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Insufficient funds"),
        (status = 404, description = "Account not found"),
        (status = 503, description = "Transient store conflict, retry")
    ),
    security(("jwt_auth" = [])),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<TransferRequest>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    if let Err(violations) = req.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                error_codes::INVALID_PARAMETER,
                violation_summary(&violations),
            )),
        ));
    }

    tracing::info!(
        requested_by = %claims.sub,
        from = %req.from_id,
        to = %req.to_id,
        amount = %req.amount.inner(),
        "transfer requested"
    );

    match state
        .engine
        .transfer(req.from_id, req.to_id, req.amount.inner())
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(map_transfer_error(e)),
    }
}

/// Each engine error kind maps to a stable, distinguishable response, so
/// clients can tell a malformed request from a temporary fault.
fn map_transfer_error(err: TransferError) -> (StatusCode, Json<ApiResponse<()>>) {
    match err {
        TransferError::SameAccount | TransferError::InvalidAmount => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                error_codes::INVALID_PARAMETER,
                err.to_string(),
            )),
        ),
        TransferError::AccountNotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(
                error_codes::ACCOUNT_NOT_FOUND,
                err.to_string(),
            )),
        ),
        TransferError::InsufficientFunds => (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error(
                error_codes::INSUFFICIENT_FUNDS,
                err.to_string(),
            )),
        ),
        TransferError::Store(_) if err.is_retryable() => {
            tracing::warn!("Transfer hit transient store conflict: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<()>::error(
                    error_codes::SERVICE_UNAVAILABLE,
                    "Temporary store conflict, retry the request",
                )),
            )
        }
        TransferError::Store(_) => {
            tracing::error!("Transfer failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    error_codes::INTERNAL_ERROR,
                    "Transfer failed",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_request_parses_camel_case() {
        let req: TransferRequest = serde_json::from_str(
            r#"{"fromId":"11111111-1111-1111-1111-111111111111",
                "toId":"22222222-2222-2222-2222-222222222222",
                "amount":"30.00"}"#,
        )
        .unwrap();
        assert_eq!(req.amount.inner(), Decimal::from_str("30.00").unwrap());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_malformed_uuid() {
        let result: Result<TransferRequest, _> = serde_json::from_str(
            r#"{"fromId":"not-a-uuid","toId":"22222222-2222-2222-2222-222222222222","amount":"30.00"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_request_rejects_zero_amount() {
        let req: TransferRequest = serde_json::from_str(
            r#"{"fromId":"11111111-1111-1111-1111-111111111111",
                "toId":"22222222-2222-2222-2222-222222222222",
                "amount":"0"}"#,
        )
        .unwrap();
        let violations = req.validate().unwrap_err();
        assert!(violation_summary(&violations).contains("greater than zero"));
    }

    #[test]
    fn test_error_mapping_is_stable() {
        let (status, body) = map_transfer_error(TransferError::InsufficientFunds);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.code, error_codes::INSUFFICIENT_FUNDS);

        let (status, body) = map_transfer_error(TransferError::AccountNotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.code, error_codes::ACCOUNT_NOT_FOUND);

        let (status, _) = map_transfer_error(TransferError::SameAccount);
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = map_transfer_error(TransferError::Store(sqlx::Error::PoolTimedOut));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
