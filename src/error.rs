use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybookError {
    ConfigurationError(String),
    ValidationError(String),
    StorageError(String),
    EngineError(String),
}

impl fmt::Display for PlaybookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybookError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            PlaybookError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            PlaybookError::StorageError(msg) => write!(f, "Storage error: {msg}"),
            PlaybookError::EngineError(msg) => write!(f, "Engine error: {msg}"),
        }
    }
}

impl std::error::Error for PlaybookError {}

pub type Result<T> = std::result::Result<T, PlaybookError>;
