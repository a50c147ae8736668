//! Error types for Auctra
//!
//! This module defines the error types used throughout the Auctra system.
//! All errors are designed to be user-friendly and provide clear context
//! about what went wrong and how to fix it.

use std::io;
use thiserror::Error;

/// Auctra error types
#[derive(Debug, Error)]
pub enum AuctraError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request error
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

/// Result type for Auctra operations
pub type Result<T> = std::result::Result<T, AuctraError>;

impl From<serde_json::Error> for AuctraError {
    fn from(err: serde_json::Error) -> Self {
        AuctraError::Serialization(err.to_string())
    }
}

impl From<String> for AuctraError {
    fn from(err: String) -> Self {
        AuctraError::Other(err)
    }
}
