//! Order Routes

use axum::{Router, routing::post};

use crate::core::ServerState;

pub mod handler;

/// Build order router - all routes require authentication
pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/user/orders",
        post(handler::upload).get(handler::list),
    )
}
