//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, value objects, store trait
//! - `application/` - Register / authenticate use cases and configuration
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Customer signup with name, email, phone and password
//! - Login with email + password
//! - Stateless HS256 access tokens (1 hour by default)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, fresh salt per hash, optional pepper
//! - Email uniqueness enforced by the store, not by a prior lookup
//! - Tokens cannot be revoked; they simply expire

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::{InMemoryAccountRepository, PgAccountRepository};
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
