// Authentication service - business logic layer

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::auth::{
    error::AuthError,
    models::User,
    password::PasswordHasher,
    repository::UserStore,
    token::TokenIssuer,
};

/// Authentication service coordinating the credential store, password
/// hasher and token issuer
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new user
    ///
    /// The existence check is a fast path only. Uniqueness is decided by the
    /// store's `create`, so concurrent registrations of one email still
    /// produce a single account.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if self.users.find_by_email(email).await?.is_some() {
            debug!("Registration rejected: email already registered");
            return Err(AuthError::UserExists);
        }

        let digest = self.hash_password(password).await?;

        // StoreError::DuplicateEmail converts to AuthError::UserExists
        let user = self.users.create(email, &digest, Utc::now()).await?;

        info!("Registered user with id: {}", user.id);
        Ok(user)
    }

    /// Login a user, returning a bearer token and the account
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            // Burn a hash so unknown accounts cost about as much as a verify
            let _ = self.hash_password(password).await;
            debug!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.verify_password(&user.password_hash, password).await? {
            debug!("Login rejected for user_id={}: password mismatch", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id)?;

        info!("User {} logged in", user.id);
        Ok((token, user))
    }

    /// Get a user by id
    pub async fn get_user(&self, id: i64) -> Result<User, AuthError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("password hashing task failed: {}", e)))??;

        Ok(digest)
    }

    async fn verify_password(&self, digest: &str, password: &str) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        let digest = digest.to_owned();
        let password = password.to_owned();

        let matches = tokio::task::spawn_blocking(move || hasher.verify(&digest, &password))
            .await
            .map_err(|e| AuthError::Internal(format!("password verification task failed: {}", e)))??;

        Ok(matches)
    }
}
