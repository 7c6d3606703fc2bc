//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the browser client (`name`, `phone`, `token`, `user`).

use serde::{Deserialize, Serialize};

use crate::application::{AuthenticateInput, RegisterInput, SessionOutput};
use crate::domain::entity::account::Account;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request. Fields are optional so that missing ones surface as
/// "Missing details" rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl From<SignUpRequest> for RegisterInput {
    fn from(req: SignUpRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            password: req.password,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for AuthenticateInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub name: String,
}

impl From<&Account> for UserResponse {
    fn from(account: &Account) -> Self {
        Self {
            email: account.email.as_str().to_string(),
            name: account.name.as_str().to_string(),
        }
    }
}

/// Signup and login success body
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub message: String,
    pub token: String,
    /// Token expiry, milliseconds since the epoch
    pub expires_at_ms: i64,
    pub user: UserResponse,
}

impl SessionResponse {
    pub fn new(message: &str, output: SessionOutput) -> Self {
        Self {
            message: message.to_string(),
            token: output.token,
            expires_at_ms: output.expires_at.timestamp_millis(),
            user: UserResponse {
                email: output.email,
                name: output.name,
            },
        }
    }
}

/// GET /me body
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
}
