//! Repository Module
//!
//! Storage access behind capability traits so the persistence backend stays
//! swappable and mockable. The concrete implementations run against the
//! embedded SurrealDB instance.

pub mod order;
pub mod user;

// Re-exports
pub use order::SurrealOrderRepository;
pub use user::SurrealUserRepository;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::{Order, OrderCreate, User, UserId};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // SurrealDB 2.x reports unique-index violations as
        // "Database index `...` already contains ..., with record `...`".
        // Classifying them here lets callers treat a lost create race as a
        // detectable conflict instead of a generic failure.
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence operations for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user; `Duplicate` when the login is already taken
    async fn create(&self, login: &str, password_hash: &str) -> RepoResult<User>;

    /// Look up a user by login
    async fn find_by_login(&self, login: &str) -> RepoResult<Option<User>>;
}

/// Persistence operations for order records
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a new order; `Duplicate` when the numeral id already exists
    async fn create(&self, data: OrderCreate) -> RepoResult<Order>;

    /// Look up an order by its numeral id
    async fn find_by_numeral_id(&self, numeral_id: &str) -> RepoResult<Option<Order>>;

    /// All orders of one owner, newest first
    async fn find_by_owner(&self, owner: &UserId) -> RepoResult<Vec<Order>>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
