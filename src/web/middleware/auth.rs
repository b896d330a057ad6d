//! Bearer-token guard for protected routes.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{extract_bearer, AuthRejection, AuthenticatedUser};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Middleware that turns away requests without a valid bearer token.
///
/// On success the resolved [`AuthenticatedUser`] is stored in the request
/// extensions for [`CurrentUser`] to pick up.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer)
        .ok_or_else(|| ApiError::unauthorized(AuthRejection::Missing.to_string()))?;

    let user = state.auth.authorize(token).await?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Extractor for the user resolved by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::unauthorized(AuthRejection::Missing.to_string()))
    }
}
