//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::AccountPassword, contact_number::ContactNumber, display_name::DisplayName,
    email::Email,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account store over the `customer` table
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn exists(&self, email: &Email) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customer WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, account: Account) -> AccountResult<Account> {
        // The UNIQUE constraint on `email` decides races between concurrent signups.
        let result = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customer (
                full_name,
                email,
                mobile_no,
                password,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING full_name, email, mobile_no, password, created_at
            "#,
        )
        .bind(account.name.as_str())
        .bind(account.email.as_str())
        .bind(account.contact.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await;

        result.map_err(insert_error)?.into_account()
    }

    async fn find(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT full_name, email, mobile_no, password, created_at
            FROM customer
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }
}

/// A unique violation on `customer_email_key` means the email is taken
fn insert_error(err: sqlx::Error) -> AccountError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AccountError::DuplicateIdentity
        }
        other => other.into(),
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CustomerRow {
    full_name: String,
    email: String,
    mobile_no: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl CustomerRow {
    fn into_account(self) -> AccountResult<Account> {
        Ok(Account {
            email: Email::from_db(self.email),
            name: DisplayName::from_db(self.full_name),
            contact: ContactNumber::from_db(self.mobile_no),
            password_hash: AccountPassword::from_phc_string(self.password)?,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    #[derive(Debug)]
    struct FakeDbError {
        code: &'static str,
        unique: bool,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "database error {}", self.code)
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    fn db_error(code: &'static str, unique: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code, unique }))
    }

    #[test]
    fn test_unique_violation_is_duplicate_identity() {
        let err = insert_error(db_error("23505", true));
        assert!(matches!(err, AccountError::DuplicateIdentity));
    }

    #[test]
    fn test_other_insert_errors_stay_database_errors() {
        let err = insert_error(db_error("23502", false));
        assert!(matches!(err, AccountError::Database(_)));

        let err = insert_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AccountError::Database(_)));
    }

    fn account(email: &str) -> Account {
        use crate::domain::value_object::account_password::RawPassword;

        let raw = RawPassword::new("pw1".to_string()).unwrap();
        Account::new(
            Email::new(email).unwrap(),
            DisplayName::new("Ann").unwrap(),
            ContactNumber::new("555").unwrap(),
            AccountPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_pg_insert_rejects_taken_email(pool: PgPool) {
        let repo = PgAccountRepository::new(pool);

        repo.insert(account("a@x.com")).await.unwrap();
        assert!(repo.exists(&Email::new("a@x.com").unwrap()).await.unwrap());

        assert!(matches!(
            repo.insert(account("a@x.com")).await,
            Err(AccountError::DuplicateIdentity)
        ));

        let found = repo.find(&Email::new("a@x.com").unwrap()).await.unwrap();
        assert_eq!(found.map(|a| a.name.as_str().to_string()).as_deref(), Some("Ann"));
        assert!(repo.find(&Email::new("A@x.com").unwrap()).await.unwrap().is_none());
    }
}
