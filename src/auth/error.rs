// Authentication error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

use crate::auth::{password::PasswordError, repository::StoreError, token::TokenError};

/// Authentication error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    // Auth gate rejections
    #[error("missing authorization token")]
    MissingToken,
    #[error("invalid authorization header")]
    InvalidAuthHeader,
    #[error("unauthorized")]
    Unauthorized,

    // Orchestrator outcomes
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user already exists")]
    UserExists,
    #[error("user not found")]
    UserNotFound,
    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    // Internal failures
    #[error("password error: {0}")]
    Password(#[from] PasswordError),
    #[error("token error: {0}")]
    Token(#[from] TokenError),
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AuthError::UserExists,
            StoreError::Database(e) => AuthError::Database(e),
        }
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidAuthHeader
            | AuthError::Unauthorized
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserExists => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Password(_)
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to send to clients
    pub fn error_message(&self) -> String {
        match self {
            AuthError::Password(_)
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            AuthError::Validation(errors) => {
                debug!("Auth request validation failed: {:?}", errors);
                json!({
                    "error": self.error_message(),
                    "details": serde_json::to_value(errors).unwrap_or_else(|_| json!({})),
                })
            }
            _ if status.is_server_error() => {
                error!("Auth internal error: {}", self);
                json!({ "error": self.error_message() })
            }
            _ => {
                debug!("Auth request failed: {}", self);
                json!({ "error": self.error_message() })
            }
        };

        (status, Json(body)).into_response()
    }
}
