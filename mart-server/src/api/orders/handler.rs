//! Order Handlers

use axum::{Json, extract::State, http::StatusCode};
use http::HeaderMap;
use shared::AppError;
use shared::client::OrderSummary;

use crate::auth::AuthUser;
use crate::core::ServerState;
use crate::services::OrderSubmission;

/// Upload an order number
///
/// Expects the raw digit string as a `text/plain` body. Responds 202 for a
/// freshly registered number and 200 when the caller already uploaded it.
pub async fn upload(
    State(state): State<ServerState>,
    user: AuthUser,
    headers: HeaderMap,
    body: String,
) -> Result<StatusCode, AppError> {
    let content_type = headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("text/plain") {
        return Err(AppError::validation("Content-Type must be text/plain"));
    }

    match state.orders().submit(&body, &user.id).await? {
        OrderSubmission::Accepted(_) => Ok(StatusCode::ACCEPTED),
        OrderSubmission::AlreadyLoaded => Ok(StatusCode::OK),
    }
}

/// List the caller's orders, newest upload first
pub async fn list(
    State(state): State<ServerState>,
    user: AuthUser,
) -> Result<Json<Vec<OrderSummary>>, AppError> {
    let orders = state.orders().list(&user.id).await?;
    let summaries: Vec<OrderSummary> = orders.into_iter().map(OrderSummary::from).collect();
    Ok(Json(summaries))
}
