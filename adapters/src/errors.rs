//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while talking to the trivia store,
//! whether that is acquiring a pooled connection, running a query or violating
//! one of the store's own constraints.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("question {0} does not exist")]
    QuestionNotFound(i64),

    #[error("category {0} does not exist")]
    UnknownCategory(i64),
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
