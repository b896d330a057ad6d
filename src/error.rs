//! Error types for Noticeboard.

use thiserror::Error;

use crate::auth::{AuthRejection, PasswordError};
use crate::board::Violations;

/// Common error type for Noticeboard.
#[derive(Error, Debug)]
pub enum NoticeboardError {
    /// Database error.
    ///
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Input failed one or more field constraints.
    #[error("validation error: {0}")]
    Validation(Violations),

    /// A unique key is already taken.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bearer token could not be turned into a known user.
    #[error("unauthorized: {0}")]
    Unauthorized(AuthRejection),

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Signing a token failed.
    #[error("token error: {0}")]
    Token(String),
}

impl NoticeboardError {
    /// Shorthand for a board that does not exist.
    pub fn board_not_found(id: i64) -> Self {
        NoticeboardError::NotFound(format!("board with id {id}"))
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for NoticeboardError {
    fn from(e: sqlx::Error) -> Self {
        NoticeboardError::Database(e.to_string())
    }
}

impl From<Violations> for NoticeboardError {
    fn from(v: Violations) -> Self {
        NoticeboardError::Validation(v)
    }
}

impl From<AuthRejection> for NoticeboardError {
    fn from(r: AuthRejection) -> Self {
        NoticeboardError::Unauthorized(r)
    }
}

/// Result type alias for Noticeboard operations.
pub type Result<T> = std::result::Result<T, NoticeboardError>;
