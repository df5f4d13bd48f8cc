//! Render documents for bendiff.
//!
//! Turns two loaded sides plus their [`LineDiff`](bendiff_diff::LineDiff)
//! into a [`RenderDocument`]: an ordered list of blocks, each showing the
//! left side, the right side, or both. A presentation layer maps blocks and
//! lines to visual rows; this crate only supplies operation tags, 1-based
//! line numbers and text.
//!
//! # Key Types
//!
//! - [`RenderDocument`] / [`RenderBlock`] / [`RenderLine`] -- The document model
//! - [`RenderBlockSide`] -- Which column(s) a block occupies
//! - [`ViewMode`] -- Inline or side-by-side

pub mod document;

pub use document::{
    build_inline_render, build_render, build_side_by_side_render, RenderBlock, RenderBlockSide,
    RenderDocument, RenderLine, ViewMode,
};
