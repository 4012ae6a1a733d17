//! Document model for the redline comparison engine.
//!
//! This crate provides the generic rich-text document tree consumed by the
//! diff engine, the [`DocSource`] seam that lets any editor or stored snapshot
//! supply a tree without depending on a specific editor library, and the line
//! extraction pass that flattens a tree into the plain-text lines the diff
//! operates on.
//!
//! # Key Types
//!
//! - [`DocumentNode`] — Owned, serde-compatible document tree node
//! - [`DocSource`] — Trait seam over any recursive `{kind?, text?, content?}` shape
//! - [`extract_lines`] — Flattens a tree into paragraph/heading lines
//! - [`DocError`] — Host-boundary parse errors

pub mod error;
pub mod extract;
pub mod node;

pub use error::DocError;
pub use extract::extract_lines;
pub use node::{DocSource, DocumentNode};
