//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::account::AccountSummary;
use crate::auth::{AuthResponse, SigninRequest, SignupRequest};
use crate::gateway::handlers::{HealthResponse, SignupResponse, TransferRequest};

/// Bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledger Gate API",
        version = "1.0.0",
        description = "Minimal account ledger: signup, signin, and atomic funds transfers.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::signup,
        crate::gateway::handlers::signin,
        crate::gateway::handlers::list_accounts,
        crate::gateway::handlers::create_transfer,
    ),
    components(
        schemas(
            HealthResponse,
            SignupRequest,
            SignupResponse,
            SigninRequest,
            AuthResponse,
            AccountSummary,
            TransferRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration, signin and account queries"),
        (name = "Transfer", description = "Atomic funds transfers (auth required)"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
