// In-memory collaborators shared by unit and router tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use argon2::Params;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer};

use crate::auth::models::User;
use crate::auth::password::Argon2Hasher;
use crate::auth::repository::{StoreError, UserStore};
use crate::auth::token::JwtService;
use crate::movies::models::{CreateMovie, Movie};
use crate::movies::repository::MovieStore;
use crate::AppState;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

/// Argon2id with the cheapest parameters the library accepts
pub fn test_hasher() -> Argon2Hasher {
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
    Argon2Hasher::with_params(params)
}

pub fn test_jwt_service() -> JwtService {
    JwtService::new(TEST_SECRET).unwrap()
}

/// Application state backed entirely by in-memory stores
pub fn test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryUserStore::default()),
        Arc::new(InMemoryMovieStore::default()),
        Arc::new(test_hasher()),
        Arc::new(test_jwt_service()),
    )
}

/// Counts WARN and ERROR events emitted on the current thread
#[derive(Clone, Default)]
pub struct WarningCounter(Arc<AtomicUsize>);

impl WarningCounter {
    /// Install a counting subscriber until the returned guard is dropped
    pub fn install() -> (Self, DefaultGuard) {
        let counter = Self::default();
        let guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(counter.clone()),
        );
        (counter, guard)
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<User, StoreError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: users.len() as i64 + 1,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
struct MovieTable {
    next_id: i64,
    rows: BTreeMap<i64, Movie>,
}

#[derive(Default)]
pub struct InMemoryMovieStore {
    table: Mutex<MovieTable>,
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn create(&self, movie: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let now = Utc::now();
        let movie = Movie {
            id: table.next_id,
            title: movie.title.clone(),
            director: movie.director.clone(),
            year: movie.year,
            plot: movie.plot.clone(),
            genre: movie.genre.clone(),
            rating: movie.rating,
            duration: movie.duration,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, movie: &CreateMovie) -> Result<Option<Movie>, sqlx::Error> {
        let mut table = self.table.lock().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        row.title = movie.title.clone();
        row.director = movie.director.clone();
        row.year = movie.year;
        row.plot = movie.plot.clone();
        row.genre = movie.genre.clone();
        row.rating = movie.rating;
        row.duration = movie.duration;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        Ok(self.table.lock().await.rows.remove(&id).is_some())
    }
}
