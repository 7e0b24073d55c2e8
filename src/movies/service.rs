use std::sync::Arc;

use validator::Validate;

use crate::error::ApiError;
use crate::movies::{
    models::{CreateMovie, Movie, UpdateMovie},
    repository::MovieStore,
};

/// Service layer for movie business logic
#[derive(Clone)]
pub struct MovieService {
    store: Arc<dyn MovieStore>,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateMovie) -> Result<Movie, ApiError> {
        request.validate()?;

        let movie = self.store.create(&request).await?;
        tracing::info!("Created movie with id: {}", movie.id);
        Ok(movie)
    }

    pub async fn get(&self, id: i64) -> Result<Movie, ApiError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Movie", id))
    }

    pub async fn list(&self) -> Result<Vec<Movie>, ApiError> {
        let movies = self.store.list().await?;
        tracing::debug!("Retrieved {} movies", movies.len());
        Ok(movies)
    }

    /// Update a movie
    ///
    /// 1. Validates the fields that are present
    /// 2. Fetches the existing movie
    /// 3. Overlays the provided fields and writes the result
    pub async fn update(&self, id: i64, request: UpdateMovie) -> Result<Movie, ApiError> {
        request.validate()?;

        let existing = self.get(id).await?;
        let merged = request.apply_to(existing);

        // The row may have been deleted since the read
        let movie = self
            .store
            .update(id, &merged)
            .await?
            .ok_or_else(|| ApiError::not_found("Movie", id))?;

        tracing::info!("Updated movie with id: {}", id);
        Ok(movie)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if !self.store.delete(id).await? {
            return Err(ApiError::not_found("Movie", id));
        }

        tracing::info!("Deleted movie with id: {}", id);
        Ok(())
    }
}
