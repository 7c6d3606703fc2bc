//! Error conversions - From implementations for common error types
//!
//! Conversion from `sqlx` errors to [`AppError`] and the axum response
//! encoding. Both are feature-gated.

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                AppError::new(ErrorKind::NotFound, "Record not found").with_source(err)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::new(ErrorKind::ServiceUnavailable, "Database connection pool exhausted")
                    .with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 23 — Integrity Constraint Violation
                    Some("23505") => AppError::new(ErrorKind::Conflict, "Duplicate key value"),
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23514") => AppError::bad_request("Check constraint violation"),
                    // Class 42 — Syntax Error or Access Rule Violation
                    Some("42501") => AppError::new(ErrorKind::Forbidden, "Insufficient privilege"),
                    // Class 53 — Insufficient Resources, Class 57 — Operator Intervention
                    Some(code) if code.starts_with("53") || code.starts_with("57") => {
                        AppError::new(ErrorKind::ServiceUnavailable, "Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::new(ErrorKind::ServiceUnavailable, "Database connection error")
                    .with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details, plus `message` which browser clients read
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "message": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
