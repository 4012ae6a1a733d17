//! Document tree node types and the document source seam.
//!
//! A [`DocumentNode`] is the owned, serde-compatible form of a rich-text
//! document: an optional node kind, optional inline text, and ordered
//! children. Hosts that already hold their document in another shape (for
//! example a raw `serde_json::Value` straight from an editor) can skip the
//! conversion entirely by implementing [`DocSource`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DocError;

/// Read-only view over a recursive `{kind?, text?, content?}` document shape.
///
/// The extraction and diff passes are generic over this trait, so any
/// document source can feed them: the owned [`DocumentNode`] tree, a raw
/// [`serde_json::Value`] from an editor, or a host-defined snapshot type.
///
/// Trees are expected to be acyclic. A cyclic structure violates the caller
/// contract and will not terminate; no runtime cycle detection is performed.
pub trait DocSource {
    /// The node kind tag (`"paragraph"`, `"heading"`, `"doc"`, ...), if any.
    fn kind(&self) -> Option<&str>;

    /// Inline text carried by this node, if any.
    fn text(&self) -> Option<&str>;

    /// Ordered child nodes. Leaves return an empty slice.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// A node in a rich-text document tree.
///
/// All fields are optional in the host JSON: a node missing `content` is a
/// leaf, a node missing `text` contributes no text of its own, and a node
/// missing `kind` is a plain container. Unknown fields (editor attributes,
/// formatting marks) are ignored on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// The node kind tag, e.g. `"doc"`, `"paragraph"`, `"heading"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Inline text content for text leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ordered child nodes. Insertion order is significant and preserved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<DocumentNode>,
}

impl DocumentNode {
    /// A top-level document container.
    pub fn document(content: Vec<DocumentNode>) -> Self {
        Self::container("doc", content)
    }

    /// A paragraph node.
    pub fn paragraph(content: Vec<DocumentNode>) -> Self {
        Self::container("paragraph", content)
    }

    /// A heading node.
    pub fn heading(content: Vec<DocumentNode>) -> Self {
        Self::container("heading", content)
    }

    /// A container node of an arbitrary kind.
    pub fn container(kind: impl Into<String>, content: Vec<DocumentNode>) -> Self {
        Self {
            kind: Some(kind.into()),
            text: None,
            content,
        }
    }

    /// A text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: Some("text".to_string()),
            text: Some(text.into()),
            content: Vec::new(),
        }
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.content.is_empty()
    }

    /// Parse a document tree from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DocError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert a JSON value into an owned document tree.
    pub fn from_json_value(value: Value) -> Result<Self, DocError> {
        Ok(serde_json::from_value(value)?)
    }
}

impl DocSource for DocumentNode {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn children(&self) -> &[Self] {
        &self.content
    }
}

/// Raw JSON documents can be diffed without converting to [`DocumentNode`]
/// first. Non-object values and missing keys degrade to "no kind", "no text",
/// "no children" rather than erroring.
impl DocSource for Value {
    fn kind(&self) -> Option<&str> {
        self.get("kind").and_then(Value::as_str)
    }

    fn text(&self) -> Option<&str> {
        self.get("text").and_then(Value::as_str)
    }

    fn children(&self) -> &[Self] {
        self.get("content")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_leaf() {
        let node = DocumentNode::from_json_str("{}").unwrap();
        assert_eq!(node.kind, None);
        assert_eq!(node.text, None);
        assert!(node.is_leaf());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let node = DocumentNode::from_json_str(
            r#"{"kind": "paragraph", "attrs": {"level": 2}, "content": [{"text": "hi"}]}"#,
        )
        .unwrap();
        assert_eq!(node.kind.as_deref(), Some("paragraph"));
        assert_eq!(node.content.len(), 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = DocumentNode::from_json_str("not json").unwrap_err();
        assert!(matches!(err, DocError::Json(_)));
    }

    #[test]
    fn from_json_value_roundtrip() {
        let node = DocumentNode::document(vec![DocumentNode::paragraph(vec![
            DocumentNode::text("hello"),
        ])]);
        let value = serde_json::to_value(&node).unwrap();
        let parsed = DocumentNode::from_json_value(value).unwrap();
        assert_eq!(node, parsed);
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let node = DocumentNode::paragraph(Vec::new());
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({"kind": "paragraph"}));
    }

    #[test]
    fn json_value_source_reads_document_keys() {
        let value = json!({
            "kind": "paragraph",
            "content": [{"kind": "text", "text": "hello"}],
        });
        assert_eq!(DocSource::kind(&value), Some("paragraph"));
        assert_eq!(value.children().len(), 1);
        assert_eq!(value.children()[0].text(), Some("hello"));
    }

    #[test]
    fn json_value_source_degrades_on_non_objects() {
        let value = json!([1, 2, 3]);
        assert_eq!(DocSource::kind(&value), None);
        assert_eq!(DocSource::text(&value), None);
        assert!(value.children().is_empty());
    }
}
