//! Error types for userboard.

use thiserror::Error;

/// Common error type for both services.
#[derive(Error, Debug)]
pub enum UserboardError {
    /// Database error.
    ///
    /// Errors from sqlx are automatically converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Outbound HTTP client setup error.
    #[error("HTTP client error: {0}")]
    Http(String),
}

impl From<sqlx::Error> for UserboardError {
    fn from(e: sqlx::Error) -> Self {
        UserboardError::Database(e.to_string())
    }
}

/// Result type alias for userboard operations.
pub type Result<T> = std::result::Result<T, UserboardError>;
