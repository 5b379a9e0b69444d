//! HTTP API
//!
//! Route registration and middleware assembly.

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth;
use crate::core::ServerState;

pub mod balance;
pub mod health;
pub mod orders;
pub mod users;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // User API - register/login are public
        .merge(users::router())
        // Order API - authentication required
        .merge(orders::router())
        // Balance API - authentication required, ledger itself is external
        .merge(balance::router())
        // Health API - public route
        .merge(health::router())
}

/// Build the fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // ========== Application Middleware ==========
        // Authentication gate - runs right before the handlers, injects AuthUser
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ))
        // ========== Tower HTTP Middleware ==========
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        // Request ID - generate unique ID and propagate it to the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // CORS - outermost, handles cross-origin requests
        .layer(CorsLayer::permissive())
        .with_state(state)
}
