//! Server Configuration
//!
//! Everything the process needs is read once from the environment (after
//! `.env` is loaded) into [`ServerConfig`] and passed down explicitly.

use std::net::SocketAddr;
use std::time::Duration;

use account::AccountConfig;
use anyhow::{Context, bail};
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Origins allowed by CORS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// `*` or a comma separated list. Unparseable entries are dropped.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "*" {
            return AllowedOrigins::Any;
        }

        AllowedOrigins::List(
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .filter_map(|origin| origin.parse().ok())
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres URL. `None` means the in-memory store (debug builds only).
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub allowed_origins: AllowedOrigins,
    pub account: AccountConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = get("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be host:port")?;

        let allowed_origins =
            AllowedOrigins::parse(&get("FRONTEND_ORIGINS").unwrap_or_else(|| "*".to_string()));

        let token_secret = match get("TOKEN_SECRET") {
            Some(encoded) => platform::crypto::from_base64(&encoded)
                .context("TOKEN_SECRET must be base64")?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret for this process");
                platform::crypto::random_bytes(platform::token::MIN_SECRET_LENGTH)
            }
            None => bail!("TOKEN_SECRET must be set in production"),
        };

        let token_ttl = match get("TOKEN_TTL_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .context("TOKEN_TTL_SECS must be a number of seconds")?,
            ),
            None => account::application::config::DEFAULT_TOKEN_TTL,
        };

        let password_pepper = get("PASSWORD_PEPPER")
            .filter(|pepper| !pepper.is_empty())
            .map(String::into_bytes);

        let account = AccountConfig {
            token_secret,
            token_ttl,
            password_pepper,
        };
        account
            .token_issuer()
            .context("TOKEN_SECRET or TOKEN_TTL_SECS cannot sign tokens")?;

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            allowed_origins,
            account,
        })
    }
}
