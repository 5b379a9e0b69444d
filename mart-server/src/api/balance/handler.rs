//! Balance Handlers (stubs)

use axum::http::StatusCode;

use crate::auth::AuthUser;

/// Current balance - stub
pub async fn balance(_user: AuthUser) -> StatusCode {
    StatusCode::OK
}

/// Withdraw points against an order - stub
pub async fn withdraw(_user: AuthUser) -> StatusCode {
    StatusCode::OK
}

/// Withdrawal history - stub
pub async fn withdrawals(_user: AuthUser) -> StatusCode {
    StatusCode::OK
}
