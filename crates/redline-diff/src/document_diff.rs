//! Document-level diff: extract lines from two document trees and compare.

use redline_doc::{extract_lines, DocSource};
use tracing::debug;

use crate::line_diff::{diff_lines, DocumentDiff};

/// Diff two document trees.
///
/// Both trees are flattened into their paragraph/heading lines, then the
/// line sequences are compared. Works over any [`DocSource`], so an owned
/// [`redline_doc::DocumentNode`] and a raw `serde_json::Value` from an editor
/// diff identically.
///
/// The whole pipeline is synchronous and side-effect-free; for fixed inputs
/// the result is byte-for-byte reproducible across calls and processes.
pub fn diff_documents<N: DocSource>(original: &N, modified: &N) -> DocumentDiff {
    let original_lines = extract_lines(original);
    let modified_lines = extract_lines(modified);
    let diff = diff_lines(&original_lines, &modified_lines);
    debug!(
        original_lines = original_lines.len(),
        modified_lines = modified_lines.len(),
        entries = diff.len(),
        "diffed documents"
    );
    diff
}
