//! Error types for StarMatch
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RepositoryError;
use crate::domain::value_objects::{ParseElementError, UnresolvedPlacement};

/// Result type alias for StarMatch operations
pub type StarMatchResult<T> = Result<T, StarMatchError>;

/// Main error type for StarMatch operations
#[derive(Error, Debug)]
pub enum StarMatchError {
    /// Lookup by id, email or sign name came back empty
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// Email does not match the accepted address pattern
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// Another account already uses this email
    #[error("email '{0}' is already registered")]
    EmailTaken(String),

    #[error(transparent)]
    UnknownElement(#[from] ParseElementError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Compatibility requested between users who are not mutual friends
    #[error("'{email}' is not your friend")]
    NotAFriend { email: String },

    /// Storage failure (unreadable or unwritable backing file)
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl StarMatchError {
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        StarMatchError::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

impl From<UnresolvedPlacement> for StarMatchError {
    fn from(err: UnresolvedPlacement) -> Self {
        StarMatchError::not_found("star sign", err.sign)
    }
}
