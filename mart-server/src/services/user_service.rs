//! User service
//!
//! Registration and credential verification over a swappable [`UserStore`].

use std::sync::Arc;
use thiserror::Error;

use crate::auth::password;
use crate::db::models::User;
use crate::db::repository::{RepoError, UserStore};

/// User service errors
#[derive(Debug, Error)]
pub enum UserError {
    #[error("login is not available")]
    AlreadyExists,

    #[error("invalid login or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserStore>) -> Self {
        Self { repo }
    }

    /// Register a new user
    ///
    /// The existence check is advisory; the unique index on `login` is the
    /// authoritative guard, and a lost create race reports the same
    /// [`UserError::AlreadyExists`].
    pub async fn register(&self, login: &str, password: &str) -> Result<User, UserError> {
        if self.repo.find_by_login(login).await?.is_some() {
            return Err(UserError::AlreadyExists);
        }

        let password_hash =
            password::hash_password(password).map_err(|e| UserError::Hash(e.to_string()))?;

        match self.repo.create(login, &password_hash).await {
            Ok(user) => {
                tracing::info!(login, "user registered");
                Ok(user)
            }
            Err(RepoError::Duplicate(_)) => Err(UserError::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials and return the matching user
    ///
    /// Unknown login and wrong password produce the same error so callers
    /// cannot enumerate registered logins.
    pub async fn login(&self, login: &str, password: &str) -> Result<User, UserError> {
        let Some(user) = self.repo.find_by_login(login).await? else {
            tracing::debug!(login, "login failed - user not found");
            return Err(UserError::InvalidCredentials);
        };

        if !password::verify_password(password, &user.password_hash) {
            tracing::debug!(login, "login failed - password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Look up a user by login
    pub async fn get_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        self.repo.find_by_login(login).await
    }
}
