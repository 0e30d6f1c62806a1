// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed operator input
    BadArgs(String),
    /// File not found or not a regular file
    FileNotFound(String),
    /// Extension outside the recognized video set
    UnsupportedFormat(String),
    /// Validation failed
    ValidationFailed(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "{}", msg),
            DomainError::FileNotFound(msg) => write!(f, "File not found: {}", msg),
            DomainError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            DomainError::ValidationFailed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
