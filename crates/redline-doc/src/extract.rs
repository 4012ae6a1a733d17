//! Line extraction: flatten a document tree into ordered plain-text lines.
//!
//! A paragraph or heading node becomes exactly one line, the in-order
//! concatenation of every text fragment underneath it. Other kinds are not
//! lines themselves but are still descended into, so a paragraph nested in a
//! blockquote or list item is extracted all the same. Paragraphs whose
//! concatenated text is empty vanish: the diff operates on semantically
//! present text only.

use crate::node::DocSource;

/// Node kinds that produce a line of their own.
fn is_line_kind(kind: Option<&str>) -> bool {
    matches!(kind, Some("paragraph") | Some("heading"))
}

/// Flatten `root` into the ordered sequence of its non-empty paragraph and
/// heading lines (depth-first, pre-order).
///
/// Malformed nodes degrade gracefully: a node with no children is a leaf, a
/// node with no text contributes nothing. Never fails for finite trees.
pub fn extract_lines<N: DocSource>(root: &N) -> Vec<String> {
    let mut lines = Vec::new();
    collect_lines(root, &mut lines);
    lines
}

fn collect_lines<N: DocSource>(node: &N, lines: &mut Vec<String>) {
    if is_line_kind(node.kind()) {
        let mut text = String::new();
        gather_text(node, &mut text);
        if !text.is_empty() {
            lines.push(text);
        }
    } else {
        for child in node.children() {
            collect_lines(child, lines);
        }
    }
}

/// Concatenate the text of `node` and its descendants into `out`, in document
/// order, with no separators. A node carrying inline text contributes that
/// text and is not descended into further.
fn gather_text<N: DocSource>(node: &N, out: &mut String) {
    if let Some(text) = node.text() {
        out.push_str(text);
        return;
    }
    for child in node.children() {
        gather_text(child, out);
    }
}
