// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{LoginRequest, LoginResponse, RegisterRequest, UserResponse},
};
use crate::extract::JsonBody;
use crate::AppState;

/// Register a new user
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid email or password", body = String, example = json!({"error": "validation failed"})),
        (status = 409, description = "Email already registered", body = String, example = json!({"error": "user already exists"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "internal server error"}))
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AuthError> {
    request.validate()?;

    let user = state.auth.register(&request.email, &request.password).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Login a user
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated, bearer token issued", body = LoginResponse),
        (status = 400, description = "Malformed credentials", body = String, example = json!({"error": "validation failed"})),
        (status = 401, description = "Invalid credentials", body = String, example = json!({"error": "invalid credentials"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "internal server error"}))
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    request.validate()?;

    let (token, user) = state.auth.login(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// Get the authenticated user's profile
/// GET /api/v1/users/me
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = String, example = json!({"error": "missing authorization token"})),
        (status = 404, description = "Account no longer exists", body = String, example = json!({"error": "user not found"}))
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn me_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, AuthError> {
    let user = state.auth.get_user(user.user_id).await?;

    Ok(Json(user.into()))
}
