//! User Repository

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, UserStore};
use crate::db::models::User;

#[derive(Clone)]
pub struct SurrealUserRepository {
    base: BaseRepository,
}

impl SurrealUserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserStore for SurrealUserRepository {
    async fn create(&self, login: &str, password_hash: &str) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    login = $login,
                    password_hash = $password_hash,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("login", login.to_string()))
            .bind(("password_hash", password_hash.to_string()))
            .bind(("created_at", chrono::Utc::now().timestamp_millis()))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    async fn find_by_login(&self, login: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE login = $login LIMIT 1")
            .bind(("login", login.to_string()))
            .await?;

        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }
}
