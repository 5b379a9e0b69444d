//! Authenticated-user extractor
//!
//! Lets protected handlers take [`AuthUser`] as a parameter. The extractor
//! only reads what [`require_auth`] attached — it never verifies tokens
//! itself, so the middleware stays the single identity channel.
//!
//! [`require_auth`]: crate::auth::middleware::require_auth

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::AppError;

use crate::auth::AuthUser;

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}
