//! Business services
//!
//! Orchestration between the HTTP layer and the repositories: credential
//! handling, order ingestion, and the checksum validation they rely on.

pub mod luhn;
pub mod order_service;
pub mod user_service;

// Re-exports
pub use order_service::{OrderError, OrderService, OrderSubmission};
pub use user_service::{UserError, UserService};
