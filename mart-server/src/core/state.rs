//! Server state
//!
//! Holds shared references to every service a request handler can reach.
//! Cloning is shallow; everything inside is reference-counted or a database
//! handle that is safe for concurrent use.

use std::sync::Arc;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{SurrealOrderRepository, SurrealUserRepository};
use crate::services::{OrderService, UserService};

#[derive(Clone)]
pub struct ServerState {
    config: Config,
    db: Surreal<Db>,
    jwt_service: Arc<JwtService>,
    users: UserService,
    orders: OrderService,
}

impl ServerState {
    /// Assemble the state from an already opened database
    ///
    /// The JWT secret travels inside `config`; nothing here reads globals.
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let users = UserService::new(Arc::new(SurrealUserRepository::new(db.clone())));
        let orders = OrderService::new(Arc::new(SurrealOrderRepository::new(db.clone())));

        Self {
            config,
            db,
            jwt_service,
            users,
            orders,
        }
    }

    /// Initialize the full server state
    ///
    /// Ensures the working directory structure, opens the embedded database
    /// and wires the services.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config.ensure_work_dir_structure().map_err(|e| {
            AppError::internal(format!("Failed to create work directory structure: {}", e))
        })?;

        let db_path = config.database_dir().join("mart.db");
        let db_service = DbService::open(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn users(&self) -> &UserService {
        &self.users
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }
}
