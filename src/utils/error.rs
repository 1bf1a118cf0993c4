//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur during sample aggregation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors that can occur while loading sample tables
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read sample table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
