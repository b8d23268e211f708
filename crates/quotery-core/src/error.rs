use thiserror::Error;

/// Application-wide error types for quotery.
#[derive(Error, Debug)]
pub enum AppError {
    /// A create/update payload failed required-field checks.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The headless browser session failed (launch, navigation, DOM access).
    #[error("Browser error: {0}")]
    BrowserError(String),

    /// Page load or navigation timed out.
    #[error("Timed out after {0} seconds")]
    Timeout(u64),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Configuration is missing or invalid.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if this error is caused by a bad caller payload rather
    /// than a fault in the system itself.
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            AppError::ValidationError(_) | AppError::SerializationError(_)
        )
    }
}
