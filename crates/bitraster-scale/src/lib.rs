//! bitraster-scale - Table-driven binary reduction and expansion
//!
//! This crate provides the multi-resolution size-change operations for
//! packed binary images:
//!
//! - Plain 2x subsampled reduction
//! - Rank-thresholded 2x reduction ("at least `level` of the 2x2 block")
//! - Cascaded rank reduction for 4x, 8x and 16x pyramids
//! - Power-of-2 expansion (2x, 4x, 8x, 16x) and arbitrary replication
//! - The lookup-table generators all of the above are driven by
//!
//! Reduction and expansion are exact inverses for uniform blocks: an
//! image expanded by `k` and rank-reduced by `k` comes back bit for bit.

mod error;
pub mod expand;
pub mod reduce;
pub mod tables;

pub use error::{ScaleError, ScaleResult};
pub use expand::{expand_binary_power2, expand_binary_replicate};
pub use reduce::{reduce_binary_2, reduce_rank_binary_2, reduce_rank_binary_cascade};
pub use tables::{
    RankLevel, RankTable, make_expand_table_2x, make_expand_table_4x, make_expand_table_8x,
    make_expand_table_16x, make_subsample_table,
};
