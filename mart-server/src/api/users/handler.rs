//! User Handlers
//!
//! Registration and login. Both return a fresh token grant in the body and
//! mirror it into the `Authorization` response header.

use axum::{Json, extract::State};
use http::HeaderMap;
use shared::AppError;
use shared::client::{TokenGrant, UserCredentials};

use crate::auth::credentials;
use crate::core::ServerState;

/// Register handler
///
/// Validates credential formats, creates the user, and logs them in.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<UserCredentials>,
) -> Result<(HeaderMap, Json<TokenGrant>), AppError> {
    if !credentials::is_login_valid(&req.login) {
        tracing::debug!(login = %req.login, "registration rejected - invalid login");
        return Err(AppError::validation(
            "login must be 3-20 characters: alphanumeric, with '_' or '-' inside",
        ));
    }
    if !credentials::is_password_valid(&req.password) {
        tracing::debug!(login = %req.login, "registration rejected - weak password");
        return Err(AppError::validation("password must be at least 8 characters"));
    }

    let user = state.users().register(&req.login, &req.password).await?;
    let grant = state.jwt_service().issue(&user.login)?;

    tracing::info!(login = %user.login, "user registered and logged in");
    Ok((bearer_header(&grant)?, Json(grant)))
}

/// Login handler
///
/// Verifies credentials and returns a fresh token grant. Unknown login and
/// wrong password answer identically.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<UserCredentials>,
) -> Result<(HeaderMap, Json<TokenGrant>), AppError> {
    let user = state.users().login(&req.login, &req.password).await?;
    let grant = state.jwt_service().issue(&user.login)?;

    tracing::info!(login = %user.login, "user logged in");
    Ok((bearer_header(&grant)?, Json(grant)))
}

fn bearer_header(grant: &TokenGrant) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    let value = format!("{} {}", grant.token_type, grant.token)
        .parse()
        .map_err(|_| AppError::internal("Issued token is not a valid header value"))?;
    headers.insert(http::header::AUTHORIZATION, value);
    Ok(headers)
}
