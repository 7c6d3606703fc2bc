//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - The transport-level error type [`error::app_error::AppError`]
//! - The status classification [`error::kind::ErrorKind`]
//! - Conversions from library errors (`sqlx`) and into axum responses
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
