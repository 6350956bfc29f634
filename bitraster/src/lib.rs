//! Bitraster - word-aligned transforms for packed binary rasters
//!
//! A bit-exact engine for 1-bit-per-pixel images stored as rows of
//! 32-bit words:
//!
//! - Rank-thresholded and subsampled 2x reduction, cascadable to
//!   4x/8x/16x pyramids
//! - Table-driven power-of-2 expansion (the exact inverse)
//! - A compiled hit-miss transform catalogue applied with word-level
//!   loops
//! - The generic LIFO stack consumed by flood-fill style algorithms
//!
//! # Example
//!
//! ```
//! use bitraster::BitImage;
//! use bitraster::scale::{RankLevel, expand_binary_power2, reduce_rank_binary_2};
//!
//! let img = BitImage::new(64, 64).unwrap();
//! let expanded = expand_binary_power2(&img, 2).unwrap();
//! let restored = reduce_rank_binary_2(&expanded, RankLevel::Two, None).unwrap();
//! assert!(restored.equals(&img));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bitraster_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bitraster_morph as morph;
pub use bitraster_scale as scale;
