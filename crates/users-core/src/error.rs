use thiserror::Error;

/// Application-wide error types for the users service.
#[derive(Error, Debug)]
pub enum AppError {
    /// No stored user carries the requested id.
    #[error("User not found: {id}")]
    NotFound { id: i64 },

    /// The backing store could not complete the operation.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error means the target record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}
