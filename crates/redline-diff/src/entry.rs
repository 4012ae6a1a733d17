//! Diff entry and statistics types.
//!
//! A [`DiffEntry`] is one classified row of the comparison output. The
//! variant carries exactly the fields that exist for its kind, so the JSON
//! wire shape has absent fields genuinely absent rather than null. Line
//! numbers are 1-based and independent per side.

use serde::{Deserialize, Serialize};

/// One classified row of a document diff.
///
/// Serializes as an internally tagged object, e.g.
/// `{"kind": "Added", "modifiedText": "...", "modifiedLineNumber": 3}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DiffEntry {
    /// The line is present on both sides, unmodified.
    #[serde(rename_all = "camelCase")]
    Unchanged {
        original_text: String,
        modified_text: String,
        original_line_number: usize,
        modified_line_number: usize,
    },
    /// The line exists only on the modified side.
    #[serde(rename_all = "camelCase")]
    Added {
        modified_text: String,
        modified_line_number: usize,
    },
    /// The line exists only on the original side.
    #[serde(rename_all = "camelCase")]
    Removed {
        original_text: String,
        original_line_number: usize,
    },
    /// A line on each side, paired as one in-place edit.
    #[serde(rename_all = "camelCase")]
    Modified {
        original_text: String,
        modified_text: String,
        original_line_number: usize,
        modified_line_number: usize,
    },
}

impl DiffEntry {
    /// The original-side text, present for all kinds except `Added`.
    pub fn original_text(&self) -> Option<&str> {
        match self {
            DiffEntry::Unchanged { original_text, .. }
            | DiffEntry::Removed { original_text, .. }
            | DiffEntry::Modified { original_text, .. } => Some(original_text),
            DiffEntry::Added { .. } => None,
        }
    }

    /// The modified-side text, present for all kinds except `Removed`.
    pub fn modified_text(&self) -> Option<&str> {
        match self {
            DiffEntry::Unchanged { modified_text, .. }
            | DiffEntry::Added { modified_text, .. }
            | DiffEntry::Modified { modified_text, .. } => Some(modified_text),
            DiffEntry::Removed { .. } => None,
        }
    }

    /// The 1-based original-side line number, present iff the original text is.
    pub fn original_line_number(&self) -> Option<usize> {
        match self {
            DiffEntry::Unchanged {
                original_line_number,
                ..
            }
            | DiffEntry::Removed {
                original_line_number,
                ..
            }
            | DiffEntry::Modified {
                original_line_number,
                ..
            } => Some(*original_line_number),
            DiffEntry::Added { .. } => None,
        }
    }

    /// The 1-based modified-side line number, present iff the modified text is.
    pub fn modified_line_number(&self) -> Option<usize> {
        match self {
            DiffEntry::Unchanged {
                modified_line_number,
                ..
            }
            | DiffEntry::Added {
                modified_line_number,
                ..
            }
            | DiffEntry::Modified {
                modified_line_number,
                ..
            } => Some(*modified_line_number),
            DiffEntry::Removed { .. } => None,
        }
    }

    /// Returns `true` for any entry other than `Unchanged`.
    pub fn is_change(&self) -> bool {
        !matches!(self, DiffEntry::Unchanged { .. })
    }
}

/// Summary counts over a diff's entries.
///
/// `Modified` entries count toward `total` only; they land in none of the
/// three kind buckets, so `added + removed + unchanged <= total`, with
/// equality exactly when no entry is `Modified`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of `Added` entries.
    pub added: usize,
    /// Number of `Removed` entries.
    pub removed: usize,
    /// Number of `Unchanged` entries.
    pub unchanged: usize,
    /// Total number of entries of any kind.
    pub total: usize,
}

/// Tally entry counts in a single pass.
pub fn aggregate(entries: &[DiffEntry]) -> Stats {
    let mut stats = Stats {
        total: entries.len(),
        ..Stats::default()
    };
    for entry in entries {
        match entry {
            DiffEntry::Added { .. } => stats.added += 1,
            DiffEntry::Removed { .. } => stats.removed += 1,
            DiffEntry::Unchanged { .. } => stats.unchanged += 1,
            // Modified rows are counted in `total` only.
            DiffEntry::Modified { .. } => {}
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn added(text: &str, line: usize) -> DiffEntry {
        DiffEntry::Added {
            modified_text: text.to_string(),
            modified_line_number: line,
        }
    }

    fn removed(text: &str, line: usize) -> DiffEntry {
        DiffEntry::Removed {
            original_text: text.to_string(),
            original_line_number: line,
        }
    }

    fn unchanged(text: &str, orig: usize, modified: usize) -> DiffEntry {
        DiffEntry::Unchanged {
            original_text: text.to_string(),
            modified_text: text.to_string(),
            original_line_number: orig,
            modified_line_number: modified,
        }
    }

    fn modified(old: &str, new: &str, orig: usize, mod_line: usize) -> DiffEntry {
        DiffEntry::Modified {
            original_text: old.to_string(),
            modified_text: new.to_string(),
            original_line_number: orig,
            modified_line_number: mod_line,
        }
    }

    #[test]
    fn field_presence_follows_kind() {
        let entry = added("new line", 3);
        assert_eq!(entry.original_text(), None);
        assert_eq!(entry.original_line_number(), None);
        assert_eq!(entry.modified_text(), Some("new line"));
        assert_eq!(entry.modified_line_number(), Some(3));

        let entry = removed("old line", 2);
        assert_eq!(entry.original_text(), Some("old line"));
        assert_eq!(entry.original_line_number(), Some(2));
        assert_eq!(entry.modified_text(), None);
        assert_eq!(entry.modified_line_number(), None);
    }

    #[test]
    fn only_unchanged_is_not_a_change() {
        assert!(!unchanged("same", 1, 1).is_change());
        assert!(added("a", 1).is_change());
        assert!(removed("r", 1).is_change());
        assert!(modified("x", "y", 1, 1).is_change());
    }

    #[test]
    fn wire_shape_is_tagged_camel_case() {
        let value = serde_json::to_value(added("new", 3)).unwrap();
        assert_eq!(
            value,
            json!({"kind": "Added", "modifiedText": "new", "modifiedLineNumber": 3})
        );

        let value = serde_json::to_value(unchanged("same", 1, 2)).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "Unchanged",
                "originalText": "same",
                "modifiedText": "same",
                "originalLineNumber": 1,
                "modifiedLineNumber": 2,
            })
        );
    }

    #[test]
    fn absent_fields_are_absent_not_null() {
        let value = serde_json::to_value(removed("gone", 4)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("modifiedText"));
        assert!(!object.contains_key("modifiedLineNumber"));
    }

    #[test]
    fn serde_roundtrip() {
        let entries = vec![
            unchanged("same", 1, 1),
            added("a", 2),
            removed("r", 2),
            modified("x", "y", 3, 3),
        ];
        let json = serde_json::to_string(&entries).unwrap();
        let parsed: Vec<DiffEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries, parsed);
    }

    #[test]
    fn aggregate_counts_per_kind() {
        let entries = vec![
            unchanged("a", 1, 1),
            added("b", 2),
            removed("c", 2),
            unchanged("d", 3, 3),
        ];
        let stats = aggregate(&entries);
        assert_eq!(
            stats,
            Stats {
                added: 1,
                removed: 1,
                unchanged: 2,
                total: 4,
            }
        );
    }

    #[test]
    fn modified_counts_toward_total_only() {
        let entries = vec![modified("x", "y", 1, 1), unchanged("z", 2, 2)];
        let stats = aggregate(&entries);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.added + stats.removed + stats.unchanged, 1);
    }

    #[test]
    fn empty_entries_all_zero() {
        assert_eq!(aggregate(&[]), Stats::default());
    }
}
