//! # Error Types
//!
//! This module defines error types used throughout the ruler library.

use thiserror::Error;

/// Main error type for ruler operations
#[derive(Debug, Error)]
pub enum RulerError {
    /// Height, thickness or scale outside the drawable range
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Empty pattern or a pattern cell other than 0/1
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// DEFLATE/zlib backend failure
    #[error("Compression error: {0}")]
    Compression(String),

    /// Bad configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON config parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RulerError>;
