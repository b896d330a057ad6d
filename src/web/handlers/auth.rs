//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::info;

use super::AppState;
use crate::web::dto::{
    LoginRequest, MeResponse, RegisterRequest, TokenResponse, UserResponse, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentUser;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /auth/register - Create an account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .users
        .create(&req.email, &req.password, req.name.trim())
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /auth/login - Exchange credentials for an access token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .users
        .authenticate(&req.email, &req.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    let access_token = state.auth.issue_token(&user)?;
    info!(user_id = user.id, "User logged in");

    Ok(Json(TokenResponse::bearer(
        access_token,
        state.auth.token_expiry_secs(),
    )))
}

/// GET /auth/me - Identity behind the bearer token.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    Json(user.into())
}
