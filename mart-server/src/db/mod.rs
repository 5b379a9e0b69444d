//! Database Module
//!
//! Embedded SurrealDB storage: connection bootstrap, schema definition,
//! models and repositories.

pub mod models;
pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

const NAMESPACE: &str = "mart";
const DATABASE: &str = "mart";

impl DbService {
    /// Open (or create) the on-disk database at the given path
    pub async fn open(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        let service = Self { db };
        service.prepare().await?;

        tracing::info!(path = %db_path, "Database connection established");
        Ok(service)
    }

    /// Open a throwaway in-memory database (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        let service = Self { db };
        service.prepare().await?;
        Ok(service)
    }

    async fn prepare(&self) -> Result<(), AppError> {
        self.db
            .use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {}", e)))?;

        self.define_schema().await
    }

    /// Apply the schema idempotently.
    ///
    /// The UNIQUE indexes are the authoritative guard for the `user.login`
    /// and `order.numeral_id` invariants; concurrent writers racing past the
    /// service-layer existence check are rejected here.
    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query(
                r#"
                DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS user_login_unique
                    ON TABLE user FIELDS login UNIQUE;
                DEFINE TABLE IF NOT EXISTS order SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS order_numeral_unique
                    ON TABLE order FIELDS numeral_id UNIQUE;
                "#,
            )
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {}", e)))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to define schema: {}", e)))?;

        tracing::info!("Database schema applied");
        Ok(())
    }
}
