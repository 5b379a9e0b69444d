//! Order ingestion service
//!
//! Applies the create-or-reject-or-noop semantics for uploaded receipt
//! numbers: syntax gate, checksum gate, then uniqueness resolution against
//! the order store.

use std::sync::Arc;
use thiserror::Error;

use super::luhn;
use crate::db::models::{Order, OrderCreate, UserId};
use crate::db::repository::{OrderStore, RepoError};

/// Outcome of a successful submission attempt
#[derive(Debug)]
pub enum OrderSubmission {
    /// A new order row was created
    Accepted(Order),
    /// The same owner uploaded this number before; nothing was written
    AlreadyLoaded,
}

/// Order ingestion errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order number is malformed")]
    Malformed,

    #[error("order number failed checksum validation")]
    ChecksumFailed,

    #[error("order number was uploaded by another user")]
    OwnedByAnother,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderStore>) -> Self {
        Self { repo }
    }

    /// Register an order number for the calling user if it is not known yet
    ///
    /// The read-then-create sequence is not atomic. The unique index on
    /// `numeral_id` is the authoritative guard: a write-time duplicate means
    /// another submission won the race, and the winning row decides between
    /// [`OrderSubmission::AlreadyLoaded`] and [`OrderError::OwnedByAnother`].
    pub async fn submit(
        &self,
        numeral_id: &str,
        owner: &UserId,
    ) -> Result<OrderSubmission, OrderError> {
        if numeral_id.is_empty() || !numeral_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OrderError::Malformed);
        }

        if !luhn::is_valid_checksum(numeral_id) {
            return Err(OrderError::ChecksumFailed);
        }

        if let Some(existing) = self.repo.find_by_numeral_id(numeral_id).await? {
            tracing::debug!(numeral_id, "order already loaded");
            return Self::resolve_ownership(&existing, owner);
        }

        let create = OrderCreate {
            numeral_id: numeral_id.to_string(),
            user: owner.clone(),
        };

        match self.repo.create(create).await {
            Ok(order) => {
                tracing::info!(numeral_id, "order accepted");
                Ok(OrderSubmission::Accepted(order))
            }
            Err(RepoError::Duplicate(_)) => {
                let winner = self
                    .repo
                    .find_by_numeral_id(numeral_id)
                    .await?
                    .ok_or_else(|| {
                        RepoError::Database(format!(
                            "Order {} vanished after duplicate rejection",
                            numeral_id
                        ))
                    })?;
                Self::resolve_ownership(&winner, owner)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All orders of the given user, newest upload first
    pub async fn list(&self, owner: &UserId) -> Result<Vec<Order>, OrderError> {
        Ok(self.repo.find_by_owner(owner).await?)
    }

    fn resolve_ownership(
        existing: &Order,
        caller: &UserId,
    ) -> Result<OrderSubmission, OrderError> {
        if existing.user == *caller {
            Ok(OrderSubmission::AlreadyLoaded)
        } else {
            Err(OrderError::OwnedByAnother)
        }
    }
}
