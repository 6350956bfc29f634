//! Error types for bitraster-scale

use thiserror::Error;

/// Errors that can occur during reduction and expansion
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bitraster_core::Error),

    /// Image too short to halve vertically
    #[error("image height {0} too small to halve")]
    HeightTooSmall(u32),

    /// Rank level outside {1, 2, 3, 4}
    #[error("rank level {0} out of range 1..=4")]
    InvalidRankLevel(i32),

    /// Caller-supplied rank table built for a different level
    #[error("rank table built for level {table} cannot be used at level {requested}")]
    RankTableMismatch { table: u32, requested: u32 },

    /// Expansion factor outside {2, 4, 8, 16}
    #[error("unsupported expansion factor: {0}")]
    UnsupportedFactor(u32),
}

/// Result type for reduction and expansion operations
pub type ScaleResult<T> = Result<T, ScaleError>;
