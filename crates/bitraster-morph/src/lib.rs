//! bitraster-morph - Compiled hit-miss transforms
//!
//! This crate applies a small, closed catalogue of precompiled 3x3
//! structuring elements to packed binary images:
//!
//! - [`HmtSel`] - the catalogue (name-addressable, offsets published)
//! - [`hmt_dwa`] - bordered public entry point, selected by name
//! - [`fhmt_gen`] - raw word-level dispatcher over a bordered image
//!
//! General structuring-element construction is out of scope here; only
//! the catalogue entries have generated word-level code.

mod error;

pub mod dwa;
pub mod hmt_sels;

pub use dwa::{BORDER, fhmt_gen, hmt_dwa, hmt_dwa_inplace, hmt_dwa_sel};
pub use error::{MorphError, MorphResult};
pub use hmt_sels::HmtSel;
