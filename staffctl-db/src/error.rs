//! Structured error type for the database layer.
//!
//! The binary crate wraps these in `anyhow` for display; library
//! consumers get composable variants.

use thiserror::Error;

/// Result type alias for database layer operations
pub type DbResult<T> = std::result::Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    /// Query or connection failure surfaced by sqlx
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Connection settings could not be resolved from the environment
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DbError::config("invalid DB_PORT 'abc'");
        assert_eq!(err.to_string(), "configuration error: invalid DB_PORT 'abc'");
    }
}
