//! Current Account Use Case
//!
//! Resolves the identity carried by a verified access token back to its
//! account record.

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

pub struct CurrentAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `identity` is the token subject, already signature- and expiry-checked
    pub async fn execute(&self, identity: &str) -> AccountResult<Account> {
        let email = Email::new(identity).map_err(|_| AccountError::InvalidToken)?;

        self.repo
            .find(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }
}
