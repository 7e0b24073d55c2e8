// Authentication module
// Provides registration, login and JWT bearer-token protection of routes

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, me_handler, register_handler};
pub use middleware::{authenticate, require_auth, AuthenticatedUser};
pub use models::{LoginRequest, LoginResponse, RegisterRequest, User, UserResponse};
pub use password::{Argon2Hasher, PasswordError, PasswordHasher};
pub use repository::{PgUserStore, StoreError, UserStore};
pub use service::AuthService;
pub use token::{Claims, JwtService, TokenError, TokenIssuer, TokenVerifier, TOKEN_TTL_HOURS};
