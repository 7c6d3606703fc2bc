//! Register Use Case
//!
//! Creates a new account and signs the caller in.

use std::sync::Arc;

use chrono::Utc;
use platform::token::TokenIssuer;

use crate::application::config::AccountConfig;
use crate::application::{SessionOutput, present};
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    contact_number::ContactNumber,
    display_name::DisplayName,
    email::Email,
};
use crate::error::{AccountError, AccountResult};

pub const MISSING_DETAILS: &str = "Missing details";

/// Registration candidate. Every field is required.
#[derive(Debug, Default)]
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenIssuer>,
    config: Arc<AccountConfig>,
}

impl<R> RegisterUseCase<R>
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

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<SessionOutput> {
        let (Some(name), Some(email), Some(phone), Some(password)) = (
            present(input.name),
            present(input.email),
            present(input.phone),
            present(input.password),
        ) else {
            return Err(AccountError::InvalidInput(MISSING_DETAILS.to_string()));
        };

        let email = Email::new(email)?;
        let name = DisplayName::new(name)?;
        let contact = ContactNumber::new(phone)?;
        let raw_password = RawPassword::new(password)?;

        // Skips hashing for the common duplicate case; `insert` is still authoritative
        if self.repo.exists(&email).await? {
            return Err(AccountError::DuplicateIdentity);
        }

        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())?;
        let account = self
            .repo
            .insert(Account::new(email, name, contact, password_hash))
            .await?;

        let issued = self.tokens.issue(account.email.as_str(), Utc::now())?;

        tracing::info!(email = %account.email, "Account registered");

        Ok(SessionOutput {
            token: issued.token,
            expires_at: issued.expires_at,
            email: account.email.as_str().to_string(),
            name: account.name.as_str().to_string(),
        })
    }
}
