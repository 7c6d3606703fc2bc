//! In-Memory Repository Implementation
//!
//! Process-local account store. Used by tests and by development servers
//! started without a database.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn exists(&self, email: &Email) -> AccountResult<bool> {
        Ok(self.accounts.read().await.contains_key(email.as_str()))
    }

    async fn insert(&self, account: Account) -> AccountResult<Account> {
        // check and insert under one write lock
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.email.as_str().to_string()) {
            Entry::Occupied(_) => Err(AccountError::DuplicateIdentity),
            Entry::Vacant(slot) => Ok(slot.insert(account).clone()),
        }
    }

    async fn find(&self, email: &Email) -> AccountResult<Option<Account>> {
        Ok(self.accounts.read().await.get(email.as_str()).cloned())
    }
}
