//! Repository Traits
//!
//! Interface for account persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// Account store
///
/// Email uniqueness is enforced by the store itself: `insert` must fail
/// with `AccountError::DuplicateIdentity` when the email is taken, even if
/// an earlier `exists` call returned `false`.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// True iff an account with exactly this email exists
    async fn exists(&self, email: &Email) -> AccountResult<bool>;

    /// Atomically insert a new account
    async fn insert(&self, account: Account) -> AccountResult<Account>;

    /// Exact-match lookup
    async fn find(&self, email: &Email) -> AccountResult<Option<Account>>;
}
