//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while reading question fixtures
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file was not valid question JSON
    ///
    /// `line` and `column` come straight from serde_json so the message
    /// points at the offending spot in the fixture.
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two questions in the same category share an id
    #[error("Duplicate question id {id} in category {category}")]
    DuplicateId { id: String, category: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
