//! Contact Number Value Object
//!
//! Stored as given. No phone number format or length is enforced.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn new(contact: impl Into<String>) -> AppResult<Self> {
        let contact = contact.into().trim().to_string();

        if contact.is_empty() {
            return Err(AppError::bad_request("Phone cannot be empty"));
        }

        Ok(Self(contact))
    }

    pub fn from_db(contact: impl Into<String>) -> Self {
        Self(contact.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
