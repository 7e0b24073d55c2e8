// HTTP handlers for movie endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::movies::models::{CreateMovie, Movie, UpdateMovie};
use crate::AppState;

/// Handler for POST /api/v1/movies
#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created successfully", body = Movie),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "validation failed"})),
        (status = 401, description = "Missing or invalid token", body = String, example = json!({"error": "unauthorized"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "internal server error"}))
    ),
    security(("bearer_auth" = [])),
    tag = "movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateMovie>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    tracing::debug!("Creating new movie: {}", payload.title);

    let movie = state.movies.create(payload).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Handler for GET /api/v1/movies
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    responses(
        (status = 200, description = "List of all movies", body = Vec<Movie>),
        (status = 401, description = "Missing or invalid token", body = String, example = json!({"error": "unauthorized"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "internal server error"}))
    ),
    security(("bearer_auth" = [])),
    tag = "movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(state.movies.list().await?))
}

/// Handler for GET /api/v1/movies/:id
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 401, description = "Missing or invalid token", body = String, example = json!({"error": "unauthorized"})),
        (status = 404, description = "Movie not found", body = String, example = json!({"error": "Movie with id 1 not found"}))
    ),
    security(("bearer_auth" = [])),
    tag = "movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiError> {
    tracing::debug!("Fetching movie with id: {}", id);

    Ok(Json(state.movies.get(id).await?))
}

/// Handler for PUT /api/v1/movies/:id
/// Omitted fields keep their current value
#[utoipa::path(
    put,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = UpdateMovie,
    responses(
        (status = 200, description = "Movie updated successfully", body = Movie),
        (status = 400, description = "Invalid input data", body = String, example = json!({"error": "validation failed"})),
        (status = 401, description = "Missing or invalid token", body = String, example = json!({"error": "unauthorized"})),
        (status = 404, description = "Movie not found", body = String, example = json!({"error": "Movie with id 1 not found"}))
    ),
    security(("bearer_auth" = [])),
    tag = "movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateMovie>,
) -> Result<Json<Movie>, ApiError> {
    tracing::debug!("Updating movie with id: {}", id);

    Ok(Json(state.movies.update(id, payload).await?))
}

/// Handler for DELETE /api/v1/movies/:id
#[utoipa::path(
    delete,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted successfully"),
        (status = 401, description = "Missing or invalid token", body = String, example = json!({"error": "unauthorized"})),
        (status = 404, description = "Movie not found", body = String, example = json!({"error": "Movie with id 1 not found"}))
    ),
    security(("bearer_auth" = [])),
    tag = "movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!("Deleting movie with id: {}", id);

    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
