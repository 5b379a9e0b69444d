//! Order Repository

use async_trait::async_trait;
use shared::order::OrderStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, OrderStore, RepoError, RepoResult};
use crate::db::models::{Order, OrderCreate, UserId};

#[derive(Clone)]
pub struct SurrealOrderRepository {
    base: BaseRepository,
}

impl SurrealOrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl OrderStore for SurrealOrderRepository {
    async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let now = chrono::Utc::now().timestamp_millis();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE order SET
                    numeral_id = $numeral_id,
                    user = $user,
                    status = $status,
                    accrual = 0,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("numeral_id", data.numeral_id))
            .bind(("user", data.user))
            .bind(("status", OrderStatus::New))
            .bind(("now", now))
            .await?;

        let created: Option<Order> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    async fn find_by_numeral_id(&self, numeral_id: &str) -> RepoResult<Option<Order>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE numeral_id = $numeral_id LIMIT 1")
            .bind(("numeral_id", numeral_id.to_string()))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    async fn find_by_owner(&self, owner: &UserId) -> RepoResult<Vec<Order>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE user = $user ORDER BY created_at DESC")
            .bind(("user", owner.clone()))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        Ok(orders)
    }
}
