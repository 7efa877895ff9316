use thiserror::Error;

/// Application-wide error types for the comment service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid configuration.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}
