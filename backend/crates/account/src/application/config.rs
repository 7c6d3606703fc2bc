//! Application Configuration
//!
//! Configuration for the Account application layer. Built once at startup
//! and handed to the router; nothing here is read from globals.

use std::fmt;
use std::time::Duration;

use platform::token::TokenIssuer;

use crate::error::AccountResult;

/// Default token validity window
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Account application configuration
#[derive(Clone)]
pub struct AccountConfig {
    /// HS256 signing secret for access tokens (at least 32 bytes)
    pub token_secret: Vec<u8>,
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }
}

impl AccountConfig {
    pub fn new(token_secret: Vec<u8>) -> Self {
        Self {
            token_secret,
            ..Default::default()
        }
    }

    /// Config with a random per-process token secret. Tokens do not survive
    /// a restart.
    pub fn with_random_secret() -> Self {
        Self::new(platform::crypto::random_bytes(platform::token::MIN_SECRET_LENGTH))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Build the token issuer. Fails on a secret shorter than 32 bytes or a
    /// TTL too large to date a token with.
    pub fn token_issuer(&self) -> AccountResult<TokenIssuer> {
        Ok(TokenIssuer::new(&self.token_secret, self.token_ttl)?)
    }
}

impl fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
