//! User authentication: signup, signin, JWT verification

pub mod middleware;
pub mod service;

pub use service::{AuthResponse, AuthService, Claims, SigninRequest, SignupRequest};
