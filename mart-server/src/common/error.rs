//! Error conversions
//!
//! The authentication gate and the HTTP handlers are the only layers that
//! translate internal outcomes into transport responses; these conversions
//! centralize that translation.

use shared::{AppError, ErrorCode};

use crate::auth::JwtError;
use crate::db::repository::RepoError;
use crate::services::{OrderError, UserError};

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::already_exists(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::AlreadyExists => AppError::already_exists("login is not available"),
            UserError::InvalidCredentials => AppError::invalid_credentials(),
            UserError::Hash(msg) => AppError::internal(format!("Password hashing failed: {}", msg)),
            UserError::Repo(repo) => repo.into(),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Malformed => AppError::with_message(
                ErrorCode::OrderNumberInvalid,
                "order number is malformed",
            ),
            OrderError::ChecksumFailed => AppError::with_message(
                ErrorCode::OrderNumberInvalid,
                "order number failed checksum validation",
            ),
            OrderError::OwnedByAnother => AppError::new(ErrorCode::OrderOwnedByAnother),
            OrderError::Repo(repo) => repo.into(),
        }
    }
}

impl From<JwtError> for AppError {
    fn from(e: JwtError) -> Self {
        // Only token issuance errors travel this path; verification failures
        // are collapsed into a uniform 401 by the authentication gate.
        AppError::internal(format!("Token issuance failed: {}", e))
    }
}
