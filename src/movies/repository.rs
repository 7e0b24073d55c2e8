use async_trait::async_trait;
use sqlx::PgPool;

use crate::movies::models::{CreateMovie, Movie};

/// Persistence capability for movies
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn create(&self, movie: &CreateMovie) -> Result<Movie, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, sqlx::Error>;

    /// All movies ordered by id
    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error>;

    /// Overwrite every field of movie `id`; `None` when it does not exist
    async fn update(&self, id: i64, movie: &CreateMovie) -> Result<Option<Movie>, sqlx::Error>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}

/// Repository for database operations on movies
#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn create(&self, movie: &CreateMovie) -> Result<Movie, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, director, year, plot, genre, rating, duration)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, director, year, plot, genre, rating, duration, created_at, updated_at
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.year)
        .bind(&movie.plot)
        .bind(&movie.genre)
        .bind(movie.rating)
        .bind(movie.duration)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, director, year, plot, genre, rating, duration, created_at, updated_at
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, director, year, plot, genre, rating, duration, created_at, updated_at
            FROM movies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn update(&self, id: i64, movie: &CreateMovie) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET title = $1,
                director = $2,
                year = $3,
                plot = $4,
                genre = $5,
                rating = $6,
                duration = $7,
                updated_at = NOW()
            WHERE id = $8
            RETURNING id, title, director, year, plot, genre, rating, duration, created_at, updated_at
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.year)
        .bind(&movie.plot)
        .bind(&movie.genre)
        .bind(movie.rating)
        .bind(movie.duration)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
