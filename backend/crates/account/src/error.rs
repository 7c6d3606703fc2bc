//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Missing or unusable request field
    #[error("{0}")]
    InvalidInput(String),

    /// Email already registered
    #[error("Account already registered")]
    DuplicateIdentity,

    /// No account with that email
    #[error("Account not found")]
    AccountNotFound,

    /// Password does not match the stored hash
    #[error("Invalid password")]
    InvalidCredential,

    /// Bearer token missing, malformed, forged or expired
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidInput(_) => ErrorKind::BadRequest,
            AccountError::DuplicateIdentity => ErrorKind::Conflict,
            AccountError::AccountNotFound => ErrorKind::NotFound,
            AccountError::InvalidCredential | AccountError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            AccountError::Database(e) => db_error_kind(e),
            AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Store and internal faults keep their details
    /// out of the message.
    pub fn into_app_error(self) -> AppError {
        match self {
            AccountError::Database(e) => AppError::from(e),
            AccountError::Internal(msg) => {
                AppError::internal("Internal server error").with_source(InternalFault(msg))
            }
            AccountError::InvalidToken => {
                AppError::unauthorized(AccountError::InvalidToken.to_string())
                    .with_action("Please log in again")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

fn db_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        _ => ErrorKind::InternalServerError,
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct InternalFault(String);

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AccountError::InvalidInput(err.message().to_string()),
            _ => AccountError::Internal(err.to_string()),
        }
    }
}

impl From<TokenError> for AccountError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid(_) => AccountError::InvalidToken,
            TokenError::WeakSecret(_) | TokenError::InvalidTtl(_) | TokenError::Signing(_) => {
                AccountError::Internal(err.to_string())
            }
        }
    }
}
