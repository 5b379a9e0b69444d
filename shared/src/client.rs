//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

// =============================================================================
// User API DTOs
// =============================================================================

/// Registration and login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCredentials {
    pub login: String,
    pub password: String,
}

/// Issued session token
///
/// Returned by both `/api/user/register` and `/api/user/login`. The same
/// token is also mirrored into the `Authorization` response header so that
/// thin clients can replay it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Single order entry as listed by `GET /api/user/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    /// The receipt identifier the order was uploaded under
    pub number: String,
    pub status: OrderStatus,
    /// Points granted by the accrual system; omitted until non-zero
    #[serde(default, skip_serializing_if = "accrual_is_zero")]
    pub accrual: i64,
    pub uploaded_at: DateTime<Utc>,
}

fn accrual_is_zero(accrual: &i64) -> bool {
    *accrual == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_summary_omits_zero_accrual() {
        let summary = OrderSummary {
            number: "12345678903".to_string(),
            status: OrderStatus::New,
            accrual: 0,
            uploaded_at: Utc::now(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("accrual").is_none());
        assert_eq!(json["status"], "NEW");
        assert_eq!(json["number"], "12345678903");
    }

    #[test]
    fn test_order_summary_keeps_nonzero_accrual() {
        let summary = OrderSummary {
            number: "12345678903".to_string(),
            status: OrderStatus::Processed,
            accrual: 500,
            uploaded_at: Utc::now(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["accrual"], 500);
        assert_eq!(json["status"], "PROCESSED");
    }
}
