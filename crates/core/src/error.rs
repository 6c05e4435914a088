// Error types for event stores

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while persisting or reading events
#[derive(Debug, Error)]
pub enum StoreError {
    /// Statement execution failed (connectivity, constraint violation, permissions)
    #[error("database error: {0}")]
    Database(String),

    /// A stored row could not be decoded into an event
    #[error("decode error: {0}")]
    Decode(String),
}

impl StoreError {
    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        StoreError::Database(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        StoreError::Decode(msg.into())
    }
}
