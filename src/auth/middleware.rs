// Authentication middleware for protected routes

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::auth::{error::AuthError, token::TokenVerifier};

const BEARER_SCHEME: &str = "Bearer";

/// Identity attached to a request by [`require_auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Validate the `Authorization` header of a request.
///
/// Checks run in order and stop at the first failure: header present,
/// exactly `Bearer <token>`, token signature and expiry.
pub fn authenticate(
    headers: &HeaderMap,
    verifier: &dyn TokenVerifier,
) -> Result<AuthenticatedUser, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingToken),
    };

    let token = value
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or(AuthError::InvalidAuthHeader)?;

    let claims = verifier.verify(token).map_err(|e| {
        debug!("Token verification failed: {}", e);
        AuthError::Unauthorized
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.user_id,
    })
}

fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Some(token),
        _ => None,
    }
}

/// Middleware admitting only requests that carry a valid bearer token
pub async fn require_auth(
    State(verifier): State<Arc<dyn TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = authenticate(request.headers(), verifier.as_ref()).map_err(|e| {
        warn!("Authentication failed for {}: {}", request.uri().path(), e);
        e
    })?;

    debug!(
        "Authenticated user_id={} for {}",
        user.user_id,
        request.uri().path()
    );
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::Unauthorized)
    }
}
