//! Change navigation for bendiff.
//!
//! # Key Types
//!
//! - [`ChangeLocation`] -- One hunk, addressable by index
//!
//! The cursor functions are pure: they take the current position and return
//! the new one, leaving any state to the caller.

pub mod navigation;

pub use navigation::{enumerate_change_hunks, next_change_index, prev_change_index, ChangeLocation};
