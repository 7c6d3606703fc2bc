//! Email Value Object
//!
//! The account identity. Matching is exact: surrounding whitespace is
//! trimmed, case is preserved, and `A@x.com` and `a@x.com` are two
//! different identities.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// Maximum email length (per RFC 5321). Longer addresses are refused at
/// signup and can never be found at login.
pub const EMAIL_MAX_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
