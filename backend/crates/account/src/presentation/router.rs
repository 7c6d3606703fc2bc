//! Account Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::AccountConfig;
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::require_bearer;

/// Create the Account router for any store implementation
///
/// Fails if the configured token secret is unusable.
pub fn account_router<R>(repo: R, config: AccountConfig) -> AccountResult<Router>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState::new(repo, config)?;

    let protected = Router::new()
        .route("/me", get(handlers::me::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer::<R>,
        ));

    Ok(Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state))
}
