//! Balance Routes
//!
//! The points ledger is computed by the external accrual system; these
//! routes are wired for API compatibility and answer empty until the ledger
//! lands.

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub mod handler;

/// Build balance router - all routes require authentication
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/user/balance", get(handler::balance))
        .route("/api/user/balance/withdraw", post(handler::withdraw))
        .route("/api/user/withdrawals", get(handler::withdrawals))
}
