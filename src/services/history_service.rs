//! Domain service for the search history log.

use crate::models::{NewSearchHistory, SearchHistoryEntry};
use thiserror::Error;

/// Errors specific to search history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Invalid user id: {0}")]
    InvalidUser(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for HistoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for HistoryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Append-only search log, keyed by user.
#[async_trait::async_trait]
pub trait SearchHistoryService: Send + Sync {
    /// Appends one row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Database`] if the insert fails.
    async fn record(&self, entry: NewSearchHistory) -> Result<i64, HistoryError>;

    /// Most recent rows for a user, newest first, capped at the history limit.
    /// A user with no rows gets an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidUser`] for non-positive ids and
    /// [`HistoryError::Database`] on query failures.
    async fn recent(&self, user_id: i32) -> Result<Vec<SearchHistoryEntry>, HistoryError>;
}
