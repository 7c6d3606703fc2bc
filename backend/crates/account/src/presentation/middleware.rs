//! Bearer Token Middleware
//!
//! Guards routes that need an authenticated caller.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::repository::AccountRepository;
use crate::error::AccountError;
use crate::presentation::handlers::AccountAppState;

/// Verified token subject, stored in request extensions
#[derive(Debug, Clone)]
pub struct BearerIdentity {
    pub email: String,
}

/// Rejects the request with 401 unless it carries a valid, unexpired
/// `Authorization: Bearer <token>` header.
pub async fn require_bearer<R>(
    State(state): State<AccountAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AccountError>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers()).ok_or(AccountError::InvalidToken)?;
    let claims = state.tokens.verify(token)?;

    req.extensions_mut().insert(BearerIdentity { email: claims.sub });

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
