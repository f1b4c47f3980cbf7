//! Error types for os-release operations

use thiserror::Error;

/// os-release errors
///
/// A missing file, a malformed line, or a read failure after the file was
/// located are not errors for callers of the query surface; those degrade
/// to absent attributes. What is left here are contract violations and the
/// lower-level failures that internal stages recover from.
#[derive(Error, Debug)]
pub enum OsReleaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Malformed line {line}: {text}")]
    MalformedLine { line: usize, text: String },
}

/// Result type alias for os-release operations
pub type Result<T> = std::result::Result<T, OsReleaseError>;
