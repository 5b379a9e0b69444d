//! Order status vocabulary
//!
//! Shared between the storage model and the client-facing DTOs. Transitions
//! past `New` are owned by the external accrual system; this backend only
//! ever creates orders in the `New` state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing state of an uploaded order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Uploaded, not yet picked up by the accrual system
    New,
    /// Accrual computation in flight
    Processing,
    /// Rejected by the accrual system, no points will be granted
    Invalid,
    /// Accrual computed and recorded
    Processed,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::New
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::New => "NEW",
            Self::Processing => "PROCESSING",
            Self::Invalid => "INVALID",
            Self::Processed => "PROCESSED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::New).unwrap(),
            "\"NEW\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"PROCESSING\""
        );
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            OrderStatus::New,
            OrderStatus::Processing,
            OrderStatus::Invalid,
            OrderStatus::Processed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
