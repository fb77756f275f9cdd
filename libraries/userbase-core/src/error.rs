//! Core error types for Userbase

use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `UserError`
pub type Result<T> = std::result::Result<T, UserError>;

/// Errors signalled by the record store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Referenced identifier is not in the collection
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Create was called without a non-empty name and email
    #[error("Missing required fields: name and email")]
    MissingFields,

    /// Payload was present but could not be used
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every identifier has been allocated
    #[error("User id space exhausted")]
    IdsExhausted,

    /// A writer panicked while holding the collection lock
    #[error("User store lock poisoned")]
    LockPoisoned,
}

impl UserError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
