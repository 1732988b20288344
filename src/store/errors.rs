//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the store layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// A UNIQUE column rejected the write (duplicate email)
    #[error("{0}")]
    UniqueViolation(String),

    /// A foreign key did not resolve to an existing row
    #[error("{0}")]
    ForeignKeyViolation(String),

    /// Any other failure from the storage engine
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify a sqlx error, attaching a caller-supplied message for
    /// the two integrity cases. Everything else passes through.
    pub(super) fn classify(err: sqlx::Error, unique_msg: &str, fk_msg: &str) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return StoreError::UniqueViolation(unique_msg.to_string());
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return StoreError::ForeignKeyViolation(fk_msg.to_string());
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}
