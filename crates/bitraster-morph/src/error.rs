//! Error types for bitraster-morph

use thiserror::Error;

/// Errors that can occur during hit-miss transforms
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bitraster_core::Error),

    /// Name not present in the compiled structuring element catalogue
    #[error("unknown structuring element name: {0}")]
    UnknownSel(String),
}

/// Result type for hit-miss operations
pub type MorphResult<T> = Result<T, MorphError>;
