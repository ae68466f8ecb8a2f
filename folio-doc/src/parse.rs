//! Structural parsing and serialization of stored documents.
//!
//! Parsing only checks the tree shape. Node and mark type names are not validated against
//! any schema, so documents written by a newer editor (or awaiting migration) can still be
//! inspected and migrated; unknown types only fail at render time.

use crate::error::DocError;
use crate::model::Node;

/// Parses a serialized document into a node tree.
pub fn parse(raw: &str) -> Result<Node, DocError> {
    serde_json::from_str(raw).map_err(|e| DocError::malformed(e.to_string()))
}

/// Serializes a node tree in the compact stored form.
///
/// Keys are written as `type, attrs, content, marks, text`, empty fields are omitted and
/// attribute keys are sorted.
pub fn to_json(node: &Node) -> Result<String, DocError> {
    serde_json::to_string(node).map_err(|e| DocError::serialization(e.to_string()))
}
