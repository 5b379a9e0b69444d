//! Authentication middleware
//!
//! The per-request gate in front of every protected handler. All failure
//! modes (missing header, malformed/expired/forged token, unknown subject)
//! collapse into the same 401 so callers cannot probe which one they hit;
//! the actual cause is only logged server-side.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::AppError;

use crate::auth::JwtService;
use crate::core::ServerState;
use crate::db::models::UserId;
use crate::security_log;

/// Identity of the authenticated caller
///
/// Created by [`require_auth`] and injected into request extensions. This is
/// the only channel through which handlers learn who is calling.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: UserId,
    pub login: String,
}

/// Authentication middleware — requires a valid bearer token
///
/// Reads `Authorization: Bearer <token>`, verifies the token, and resolves
/// the subject to a stored user. On success the resolved [`AuthUser`] is
/// inserted into request extensions for downstream handlers.
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/` (health endpoint, unknown routes)
/// - `/api/user/register`, `/api/user/login`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let is_public_api_route = path == "/api/user/register" || path == "/api/user/login";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(JwtService::extract_from_header) {
        Some(token) => token,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let subject = match state.jwt_service().verify(token) {
        Ok(subject) => subject,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );
            return Err(AppError::unauthorized());
        }
    };

    let user = match state.users().get_by_login(&subject).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            security_log!("WARN", "auth_unknown_subject", subject = subject.clone());
            return Err(AppError::unauthorized());
        }
        Err(e) => {
            return Err(AppError::database(format!(
                "Failed to resolve authenticated user: {}",
                e
            )));
        }
    };

    let id = user
        .id
        .ok_or_else(|| AppError::internal("Stored user is missing its record id"))?;

    tracing::debug!(login = %user.login, "user authenticated");
    req.extensions_mut().insert(AuthUser {
        id,
        login: user.login,
    });

    Ok(next.run(req).await)
}
