//! Common infrastructure
//!
//! Logging setup and conversions from internal error types into the
//! transport-level [`shared::AppError`].

pub mod error;
pub mod logger;
