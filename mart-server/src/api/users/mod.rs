//! User Routes

use axum::{Router, routing::post};

use crate::core::ServerState;

pub mod handler;

/// Build user router
/// - /api/user/register, /api/user/login: public (no auth required)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/user/register", post(handler::register))
        .route("/api/user/login", post(handler::login))
}
