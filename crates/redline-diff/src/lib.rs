//! Diff engine for redline documents.
//!
//! Given two versions of a rich-text document tree, produces a line-level
//! comparison that classifies each line as unchanged, added, removed, or
//! modified, with independent 1-based line numbers per side and aggregate
//! counts. The pipeline is a pure function of its inputs: extract lines,
//! compute one longest common subsequence, reconcile both sides against it,
//! tally stats.
//!
//! # Key Types
//!
//! - [`DocumentDiff`] / [`DiffEntry`] / [`Stats`] — The comparison result
//! - [`diff_documents`] — Diff two document trees
//! - [`diff_lines`] — Diff two already-extracted line sequences
//! - [`longest_common_subsequence`] — The underlying LCS computation

pub mod document_diff;
pub mod entry;
pub mod lcs;
pub mod line_diff;

pub use document_diff::diff_documents;
pub use entry::{aggregate, DiffEntry, Stats};
pub use lcs::longest_common_subsequence;
pub use line_diff::{diff_lines, reconcile, DocumentDiff};
