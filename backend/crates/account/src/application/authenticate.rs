//! Authenticate Use Case
//!
//! Checks an email/password pair and issues an access token.

use std::sync::Arc;

use chrono::Utc;
use platform::token::TokenIssuer;

use crate::application::config::AccountConfig;
use crate::application::{SessionOutput, present};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_password::RawPassword, email::Email};
use crate::error::{AccountError, AccountResult};

pub const MISSING_LOGIN_CREDENTIALS: &str = "Missing login credentials";

/// Login candidate
#[derive(Debug, Default)]
pub struct AuthenticateInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenIssuer>,
    config: Arc<AccountConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenIssuer>, config: Arc<AccountConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> AccountResult<SessionOutput> {
        let (Some(email), Some(password)) = (present(input.email), present(input.password))
        else {
            return Err(AccountError::InvalidInput(
                MISSING_LOGIN_CREDENTIALS.to_string(),
            ));
        };

        // An address too long to have been registered has no account
        let email = Email::new(email).map_err(|_| AccountError::AccountNotFound)?;

        let account = self
            .repo
            .find(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        // A password we refuse to hash can never match a stored hash
        let raw_password =
            RawPassword::new(password).map_err(|_| AccountError::InvalidCredential)?;

        if !account
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            tracing::warn!(email = %account.email, "Invalid password attempt");
            return Err(AccountError::InvalidCredential);
        }

        let issued = self.tokens.issue(account.email.as_str(), Utc::now())?;

        tracing::info!(email = %account.email, "Account signed in");

        Ok(SessionOutput {
            token: issued.token,
            expires_at: issued.expires_at,
            email: account.email.as_str().to_string(),
            name: account.name.as_str().to_string(),
        })
    }
}
