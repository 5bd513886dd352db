//! Error types for Markbook
//!
//! Provides a unified error type for all operations. Every kind is
//! recoverable: the presentation layer translates these into user-facing
//! messages and lets the user retry.

use thiserror::Error;

use crate::record::MarkField;

/// Result type alias using MarkbookError
pub type Result<T> = std::result::Result<T, MarkbookError>;

/// Unified error type for Markbook operations
#[derive(Debug, Error)]
pub enum MarkbookError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("student ID '{0}' already exists")]
    DuplicateId(String),

    #[error("{field} mark {value} is out of range ({min}-{max})")]
    OutOfRange {
        field: MarkField,
        min: u32,
        max: u32,
        value: u32,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("no student with ID '{0}'")]
    NotFound(String),

    #[error("no student records available")]
    EmptyRoster,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
