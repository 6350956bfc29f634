//! bitraster-test - Regression test helpers
//!
//! A small in-memory regression framework: each `*_reg.rs` test creates a
//! [`RegParams`], runs a sequence of indexed comparisons, and asserts on
//! [`RegParams::cleanup`]. Failures are printed as they happen and
//! collected so a single run reports every mismatch.
//!
//! # Usage
//!
//! ```
//! use bitraster_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;
