//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use std::sync::Arc;

use platform::token::TokenIssuer;

use crate::application::config::AccountConfig;
use crate::application::{AuthenticateUseCase, CurrentAccountUseCase, RegisterUseCase};
use crate::domain::repository::AccountRepository;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    CurrentUserResponse, LoginRequest, SessionResponse, SignUpRequest, UserResponse,
};
use crate::presentation::middleware::BearerIdentity;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenIssuer>,
    pub config: Arc<AccountConfig>,
}

impl<R> AccountAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AccountConfig) -> AccountResult<Self> {
        let tokens = config.token_issuer()?;
        Ok(Self {
            repo: Arc::new(repo),
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        })
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AccountAppState<R>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AccountResult<(StatusCode, Json<SessionResponse>)>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(invalid_body)?;

    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let output = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new("Account registered successfully", output)),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AccountResult<Json<SessionResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(invalid_body)?;

    let use_case =
        AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let output = use_case.execute(req.into()).await?;

    Ok(Json(SessionResponse::new("Login successful", output)))
}

// ============================================================================
// Current User (requires bearer token)
// ============================================================================

/// GET /me
pub async fn me<R>(
    State(state): State<AccountAppState<R>>,
    Extension(identity): Extension<BearerIdentity>,
) -> AccountResult<Json<CurrentUserResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentAccountUseCase::new(state.repo.clone());
    let account = use_case.execute(&identity.email).await?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(&account),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn invalid_body(rejection: JsonRejection) -> AccountError {
    AccountError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
}
