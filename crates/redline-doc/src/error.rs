//! Error types for the document model.

use thiserror::Error;

/// Errors produced at the host boundary when parsing document trees.
///
/// The extraction and diff passes themselves are total and never fail;
/// parsing foreign JSON into a [`crate::DocumentNode`] is the only fallible
/// surface.
#[derive(Debug, Error)]
pub enum DocError {
    /// The input was not valid JSON for a document tree.
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
