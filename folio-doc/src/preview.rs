//! Article previews.

use crate::model::Node;
use crate::tree::{find_nodes, plain_text};

const PARAGRAPH: &str = "paragraph";

/// Whether a document shows nothing.
///
/// The editor always keeps one paragraph, so a document holding a single paragraph without
/// text counts as empty too.
pub fn is_empty_document(doc: &Node) -> bool {
    match doc.content.as_slice() {
        [] => true,
        [only] => only.is_type(PARAGRAPH) && plain_text(doc).is_empty(),
        _ => false,
    }
}

/// The part of a document shown as its preview.
///
/// Returns `None` for an empty document. With `first_paragraph_only`, the preview is the
/// first paragraph in document order (falling back to the whole document when there is
/// none); otherwise it is the whole document. The returned tree can be rendered with any
/// schema that covers its node types.
pub fn preview(doc: &Node, first_paragraph_only: bool) -> Option<Node> {
    if is_empty_document(doc) {
        return None;
    }

    if first_paragraph_only {
        if let Some(paragraph) = find_nodes(doc, &[PARAGRAPH], Some(1)).into_iter().next() {
            return Some(paragraph);
        }
    }

    Some(doc.clone())
}
