//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::client::OrderSummary;
use shared::order::OrderStatus;
use surrealdb::RecordId;

use super::UserId;

/// Order ID type
pub type OrderId = RecordId;

/// Order record as stored in SurrealDB
///
/// `numeral_id` is unique across the whole table regardless of owner.
/// `status` and `accrual` are mutated out-of-band by the accrual system;
/// this backend only creates rows in [`OrderStatus::New`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<OrderId>,
    pub numeral_id: String,
    /// Owning user, immutable after creation
    pub user: UserId,
    pub status: OrderStatus,
    #[serde(default)]
    pub accrual: i64,
    /// Unix timestamp (milliseconds)
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create order payload
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub numeral_id: String,
    pub user: UserId,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        Self {
            number: order.numeral_id,
            status: order.status,
            accrual: order.accrual,
            uploaded_at: DateTime::<Utc>::from_timestamp_millis(order.created_at)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_conversion() {
        let order = Order {
            id: None,
            numeral_id: "12345678903".to_string(),
            user: RecordId::from_table_key("user", "abc"),
            status: OrderStatus::New,
            accrual: 0,
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        };

        let summary = OrderSummary::from(order);
        assert_eq!(summary.number, "12345678903");
        assert_eq!(summary.status, OrderStatus::New);
        assert_eq!(summary.uploaded_at.timestamp_millis(), 1_700_000_000_000);
    }
}
