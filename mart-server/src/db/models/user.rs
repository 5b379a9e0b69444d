//! User Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User record as stored in SurrealDB
///
/// The password hash never leaves the storage layer in serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<UserId>,
    pub login: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Unix timestamp (milliseconds), set once at registration
    pub created_at: i64,
}
