//! Prelude module for the calendrics crate.
//!
//! Re-exports the derive macros used by the date types.

#[allow(unused_imports)]
pub use derive_more::{Display, Into};
