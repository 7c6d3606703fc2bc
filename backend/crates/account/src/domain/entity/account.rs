//! Account Entity
//!
//! One persisted customer record. Created once at registration and never
//! modified afterwards.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_password::AccountPassword, contact_number::ContactNumber, display_name::DisplayName,
    email::Email,
};

#[derive(Debug, Clone)]
pub struct Account {
    /// Unique identity, exact match
    pub email: Email,
    pub name: DisplayName,
    pub contact: ContactNumber,
    pub password_hash: AccountPassword,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        email: Email,
        name: DisplayName,
        contact: ContactNumber,
        password_hash: AccountPassword,
    ) -> Self {
        Self {
            email,
            name,
            contact,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
