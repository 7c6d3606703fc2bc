//! Signed Bearer Tokens
//!
//! Stateless access tokens as HS256 JWTs. Validity is carried entirely by
//! the signed `exp` claim; nothing is stored server side, so a token cannot
//! be revoked before it expires.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Minimum accepted signing secret length in bytes (HS256 key size)
pub const MIN_SECRET_LENGTH: usize = 32;

const ACCESS_TOKEN_TYPE: &str = "access";

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Signing secret must be at least {MIN_SECRET_LENGTH} bytes (got {0})")]
    WeakSecret(usize),

    #[error("Token lifetime out of range: {0:?}")]
    InvalidTtl(Duration),

    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// JWT claim set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the bearer authenticated as
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    /// Unique token id
    pub jti: String,
    #[serde(rename = "type")]
    pub token_type: String,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies access tokens with one shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl TokenIssuer {
    /// Fails on a short secret, or a TTL that would push `exp` past the
    /// representable date range.
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(TokenError::WeakSecret(secret.len()));
        }

        let ttl_delta = TimeDelta::from_std(ttl).map_err(|_| TokenError::InvalidTtl(ttl))?;
        if Utc::now().checked_add_signed(ttl_delta).is_none() {
            return Err(TokenError::InvalidTtl(ttl));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp", "nbf", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: ttl_delta,
        })
    }

    /// Sign a token for `subject`, valid from `issued_at` for the configured TTL.
    pub fn issue(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::Signing("expiry out of range".to_string()))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Check signature and validity window, then return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        if data.claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(TokenError::Invalid("not an access token".to_string()));
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::from_secs(3600)).unwrap()
    }

    #[test]
    fn test_weak_secret_rejected() {
        let result = TokenIssuer::new(b"short", Duration::from_secs(3600));
        assert!(matches!(result, Err(TokenError::WeakSecret(5))));
    }

    #[test]
    fn test_issue_and_verify() {
        let now = Utc::now();
        let issued = issuer().issue("a@x.com", now).unwrap();

        let claims = issuer().verify(&issued.token).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_out_of_range_ttl_rejected() {
        let result = TokenIssuer::new(SECRET, Duration::from_secs(100_000_000_000_000));
        assert!(matches!(result, Err(TokenError::InvalidTtl(_))));

        let result = TokenIssuer::new(SECRET, Duration::from_secs(u64::MAX));
        assert!(matches!(result, Err(TokenError::InvalidTtl(_))));
    }

    #[test]
    fn test_issue_past_date_range_fails() {
        // fine from today, overflows from the far end of the calendar
        let issuer = TokenIssuer::new(SECRET, Duration::from_secs(365 * 24 * 3600)).unwrap();
        let result = issuer.issue("a@x.com", DateTime::<Utc>::MAX_UTC);
        assert!(matches!(result, Err(TokenError::Signing(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let two_hours_ago = Utc::now() - chrono::Duration::hours(2);
        let issued = issuer().issue("a@x.com", two_hours_ago).unwrap();

        assert!(matches!(issuer().verify(&issued.token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issued = issuer().issue("a@x.com", Utc::now()).unwrap();
        let other = TokenIssuer::new(b"fedcba9876543210fedcba9876543210", Duration::from_secs(3600))
            .unwrap();

        assert!(matches!(other.verify(&issued.token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issued = issuer().issue("a@x.com", Utc::now()).unwrap();
        let mut tampered = issued.token.clone();
        tampered.push('x');

        assert!(issuer().verify(&tampered).is_err());
        assert!(issuer().verify("not.a.jwt").is_err());
    }

    #[test]
    fn test_unique_token_ids() {
        let now = Utc::now();
        let a = issuer().verify(&issuer().issue("a@x.com", now).unwrap().token).unwrap();
        let b = issuer().verify(&issuer().issue("a@x.com", now).unwrap().token).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", issuer());
        assert!(debug.contains("REDACTED"));
    }
}
