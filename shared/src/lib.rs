//! Shared types for the Bonus Mart backend
//!
//! Common types used by the server and its clients: request/response DTOs,
//! the order status vocabulary, and the unified error system.

pub mod client;
pub mod error;
pub mod order;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use client::{OrderSummary, TokenGrant, UserCredentials};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use order::OrderStatus;
