use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_rating;

/// Represents a movie in the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Blade Runner")]
    pub title: String,
    #[schema(example = "Ridley Scott")]
    pub director: String,
    #[schema(example = 1982)]
    pub year: i32,
    #[schema(example = "A blade runner must pursue and terminate four replicants.")]
    pub plot: String,
    #[schema(example = "Science Fiction")]
    pub genre: String,
    #[schema(example = 8.1, exclusive_minimum = 0.0, maximum = 10.0)]
    pub rating: f64,
    /// Duration in minutes
    #[schema(example = 117)]
    pub duration: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a movie. Also the full field set written on update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[schema(example = "Blade Runner")]
    pub title: String,
    #[validate(length(min = 1, message = "Director must not be empty"))]
    #[schema(example = "Ridley Scott")]
    pub director: String,
    #[validate(range(min = 1, message = "Year must be a positive number"))]
    #[schema(example = 1982)]
    pub year: i32,
    #[serde(default)]
    #[schema(example = "A blade runner must pursue and terminate four replicants.")]
    pub plot: String,
    #[validate(length(min = 1, message = "Genre must not be empty"))]
    #[schema(example = "Science Fiction")]
    pub genre: String,
    #[validate(custom = "validate_rating")]
    #[schema(example = 8.1, exclusive_minimum = 0.0, maximum = 10.0)]
    pub rating: f64,
    /// Duration in minutes
    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    #[schema(example = 117)]
    pub duration: i32,
}

/// Partial update of a movie; omitted fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMovie {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Director must not be empty"))]
    pub director: Option<String>,
    #[validate(range(min = 1, message = "Year must be a positive number"))]
    pub year: Option<i32>,
    pub plot: Option<String>,
    #[validate(length(min = 1, message = "Genre must not be empty"))]
    pub genre: Option<String>,
    #[validate(custom = "validate_rating")]
    pub rating: Option<f64>,
    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    pub duration: Option<i32>,
}

impl UpdateMovie {
    /// Overlay the provided fields on `existing`
    pub fn apply_to(self, existing: Movie) -> CreateMovie {
        CreateMovie {
            title: self.title.unwrap_or(existing.title),
            director: self.director.unwrap_or(existing.director),
            year: self.year.unwrap_or(existing.year),
            plot: self.plot.unwrap_or(existing.plot),
            genre: self.genre.unwrap_or(existing.genre),
            rating: self.rating.unwrap_or(existing.rating),
            duration: self.duration.unwrap_or(existing.duration),
        }
    }
}
