//! Platform Crate - Technical Infrastructure
//!
//! Security primitives shared by the domain crates:
//! - Random bytes and base64 helpers for secrets
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (HS256 JWT)

pub mod crypto;
pub mod password;
pub mod token;
