//! Signup, signin and account listing handlers

use axum::{Extension, Json, extract::State, http::StatusCode};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{ApiResponse, error_codes};
use super::violation_summary;
use crate::account::AccountSummary;
use crate::auth::{AuthResponse, Claims, SigninRequest, SignupRequest};

/// Signup response data
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct SignupResponse {
    pub id: Uuid,
}

/// Register a new account
///
/// POST /api/v1/users/signup
#[utoipa::path(
    post,
    path = "/api/v1/users/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<SignupResponse>),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SignupResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    if let Err(violations) = req.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                error_codes::INVALID_PARAMETER,
                violation_summary(&violations),
            )),
        ));
    }

    match state.auth.signup(req).await {
        Ok(account_id) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(SignupResponse { id: account_id })),
        )),
        Err(e) => {
            let err_msg = e.to_string();
            // Explicit pre-check, with the unique constraint as backstop
            // against a concurrent signup of the same name.
            if err_msg.contains("already in use") || err_msg.contains("duplicate key") {
                tracing::warn!("Signup attempt for existing username: {}", err_msg);
                Err((
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<()>::error(
                        error_codes::USERNAME_TAKEN,
                        "Username already in use. Please choose another.",
                    )),
                ))
            } else {
                tracing::error!("Signup failed: {:?}", e);
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error(
                        error_codes::INTERNAL_ERROR,
                        "Signup failed",
                    )),
                ))
            }
        }
    }
}

/// Signin with username and password
///
/// POST /api/v1/users/signin
#[utoipa::path(
    post,
    path = "/api/v1/users/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signin successful", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Users"
)]
pub async fn signin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SigninRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    match state.auth.signin(req).await {
        Ok(resp) => Ok((StatusCode::OK, Json(ApiResponse::success(resp)))),
        Err(e) => {
            tracing::warn!("Signin failed: {:?}", e);
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::error(
                    error_codes::AUTH_FAILED,
                    "Invalid username or password",
                )),
            ))
        }
    }
}

/// List all accounts (without credentials)
///
/// GET /api/v1/users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Account list", body = ApiResponse<Vec<AccountSummary>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt_auth" = [])),
    tag = "Users"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
) -> Result<Json<ApiResponse<Vec<AccountSummary>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.store.list().await {
        Ok(accounts) => Ok(Json(ApiResponse::success(accounts))),
        Err(e) => {
            tracing::error!("Failed to list accounts: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(
                    error_codes::INTERNAL_ERROR,
                    "Failed to list accounts",
                )),
            ))
        }
    }
}
