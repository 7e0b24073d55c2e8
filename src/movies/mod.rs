// Movie catalogue: models, persistence, business rules and HTTP handlers

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{CreateMovie, Movie, UpdateMovie};
pub use repository::{MovieStore, PgMovieStore};
pub use service::MovieService;
