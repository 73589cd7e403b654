//! Error types for the catalog crate.
//!
//! Loading a fixture file can fail on I/O, on malformed JSON, or on a
//! snapshot that breaks id uniqueness. Parsing a role from user input
//! can fail on an unknown name, which callers treat as fatal.

use thiserror::Error;

/// Errors that can occur while building or querying the item catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Role string did not name one of the two known roles
    #[error("Unknown role: {0} (expected 'jobSeeker' or 'recruiter')")]
    UnknownRole(String),

    /// I/O error occurred while reading a fixture file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Fixture file was not valid catalog JSON
    #[error("Failed to parse catalog file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two items of the same role share an id
    #[error("Duplicate {role} id: {id}")]
    DuplicateId { role: String, id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
