//! Line-level diff: reconcile two line sequences against their LCS.
//!
//! The reconciliation is a three-pointer walk over the original lines, the
//! modified lines, and the LCS. Lines matching the current LCS anchor on both
//! sides are unchanged; a side that has not yet reached the anchor drains as
//! added or removed; and when neither side sits on an anchor the two current
//! lines are paired as a single modification. That last rule is a heuristic:
//! it can pair two unrelated lines as one edit where a Myers-style diff would
//! emit an independent removal and addition. The pairing is part of the
//! engine's contract.

use serde::{Deserialize, Serialize};

use crate::entry::{aggregate, DiffEntry, Stats};
use crate::lcs::longest_common_subsequence;

/// The result of diffing two documents: classified entries plus summary
/// counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiff {
    /// The ordered diff rows.
    pub entries: Vec<DiffEntry>,
    /// Per-kind counts over `entries`.
    pub stats: Stats,
}

impl DocumentDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if any entry is not `Unchanged`.
    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(DiffEntry::is_change)
    }
}

/// Diff two line sequences.
///
/// Computes one LCS of the two sides, reconciles both sequences against it,
/// and tallies the stats. Pure and deterministic: identical inputs always
/// produce an identical [`DocumentDiff`], including LCS tie-break outcomes.
pub fn diff_lines(original: &[String], modified: &[String]) -> DocumentDiff {
    let lcs = longest_common_subsequence(original, modified);
    let entries = reconcile(original, modified, &lcs);
    let stats = aggregate(&entries);
    DocumentDiff { entries, stats }
}

/// Walk `original` and `modified` in lock-step with `lcs`, emitting one
/// classified entry per consumed line.
///
/// `lcs` must be a common subsequence of both sides, as produced by
/// [`longest_common_subsequence`]. Line counters are 1-based and independent
/// per side. Every branch advances at least one of the two sequence indices,
/// so the walk always terminates.
pub fn reconcile(original: &[String], modified: &[String], lcs: &[String]) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    let mut orig_idx = 0;
    let mut mod_idx = 0;
    let mut lcs_idx = 0;
    let mut orig_line = 1;
    let mut mod_line = 1;

    while orig_idx < original.len() || mod_idx < modified.len() {
        let orig_at_anchor = lcs_idx < lcs.len()
            && orig_idx < original.len()
            && original[orig_idx] == lcs[lcs_idx];
        let mod_at_anchor = lcs_idx < lcs.len()
            && mod_idx < modified.len()
            && modified[mod_idx] == lcs[lcs_idx];

        if orig_at_anchor {
            if mod_at_anchor {
                entries.push(DiffEntry::Unchanged {
                    original_text: original[orig_idx].clone(),
                    modified_text: modified[mod_idx].clone(),
                    original_line_number: orig_line,
                    modified_line_number: mod_line,
                });
                orig_idx += 1;
                mod_idx += 1;
                lcs_idx += 1;
                orig_line += 1;
                mod_line += 1;
            } else {
                // The modified side has lines before this anchor: insertions.
                entries.push(DiffEntry::Added {
                    modified_text: modified[mod_idx].clone(),
                    modified_line_number: mod_line,
                });
                mod_idx += 1;
                mod_line += 1;
            }
        } else if mod_at_anchor {
            // The original side has lines before this anchor: removals.
            entries.push(DiffEntry::Removed {
                original_text: original[orig_idx].clone(),
                original_line_number: orig_line,
            });
            orig_idx += 1;
            orig_line += 1;
        } else if orig_idx < original.len() && mod_idx < modified.len() {
            // Neither side sits on an anchor: pair the two current lines as
            // one in-place edit, even if they share no resemblance.
            entries.push(DiffEntry::Modified {
                original_text: original[orig_idx].clone(),
                modified_text: modified[mod_idx].clone(),
                original_line_number: orig_line,
                modified_line_number: mod_line,
            });
            orig_idx += 1;
            mod_idx += 1;
            orig_line += 1;
            mod_line += 1;
        } else if orig_idx < original.len() {
            // Tail drain: only original lines remain.
            entries.push(DiffEntry::Removed {
                original_text: original[orig_idx].clone(),
                original_line_number: orig_line,
            });
            orig_idx += 1;
            orig_line += 1;
        } else {
            // Tail drain: only modified lines remain.
            entries.push(DiffEntry::Added {
                modified_text: modified[mod_idx].clone(),
                modified_line_number: mod_line,
            });
            mod_idx += 1;
            mod_line += 1;
        }
    }

    entries
}
