//! Application Layer
//!
//! Use cases and application services.

use chrono::{DateTime, Utc};

pub mod authenticate;
pub mod config;
pub mod current_account;
pub mod register;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use config::AccountConfig;
pub use current_account::CurrentAccountUseCase;
pub use register::{RegisterInput, RegisterUseCase};

/// Result of a successful register or authenticate
#[derive(Debug, Clone)]
pub struct SessionOutput {
    /// Signed access token
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub email: String,
    pub name: String,
}

/// Absent, empty and whitespace-only fields all count as missing.
pub(crate) fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}
