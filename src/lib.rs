pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod movies;
pub mod validation;

use std::{sync::Arc, time::Duration};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use auth::{
    handlers::{login_handler, me_handler, register_handler},
    middleware::require_auth,
    models::{LoginRequest, LoginResponse, RegisterRequest, UserResponse},
    password::PasswordHasher,
    repository::UserStore,
    service::AuthService,
    token::{JwtService, TokenVerifier},
};
use movies::{
    handlers::{create_movie, delete_movie, get_movie, list_movies, update_movie},
    models::{CreateMovie, Movie, UpdateMovie},
    repository::MovieStore,
    service::MovieService,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        auth::handlers::me_handler,
        movies::handlers::create_movie,
        movies::handlers::list_movies,
        movies::handlers::get_movie,
        movies::handlers::update_movie,
        movies::handlers::delete_movie,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UserResponse,
            Movie,
            CreateMovie,
            UpdateMovie
        )
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Authenticated user profile"),
        (name = "movies", description = "Movie catalogue management")
    ),
    info(
        title = "Movie API",
        version = "1.0.0",
        description = "RESTful API for managing movies with JWT authentication"
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub movies: Arc<MovieService>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Wire services from their collaborators. `jwt` both issues and verifies tokens.
    pub fn new(
        users: Arc<dyn UserStore>,
        movies: Arc<dyn MovieStore>,
        hasher: Arc<dyn PasswordHasher>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(users, hasher, jwt.clone())),
            movies: Arc::new(MovieService::new(movies)),
            verifier: jwt,
        }
    }
}

/// Creates and configures the application router
///
/// Registration and login are public. Every other `/api/v1` route sits
/// behind the bearer-token gate.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler));

    let protected = Router::new()
        .route("/users/me", get(me_handler))
        .route("/movies", post(create_movie).get(list_movies))
        .route(
            "/movies/:id",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route_layer(middleware::from_fn_with_state(
            state.verifier.clone(),
            require_auth,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", public.merge(protected))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(cors),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing;
