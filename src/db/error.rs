use thiserror::Error;

/// Errors produced by the post store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No post exists with the requested id.
    #[error("post {0} not found")]
    NotFound(i64),
    /// A required field was empty after trimming.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The underlying database failed.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
