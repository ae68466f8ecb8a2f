//! Uploaded files referenced by a document.
//!
//! Images, file downloads and embedded PDFs point at stored attachments through one
//! attribute each. These helpers find those references, tell whether a stored attachment is
//! still in use, and rewrite the references when a document is bundled for export.

use crate::model::{HasAttrs, Node};
use crate::tree::{find_nodes, transform_nodes};
use std::collections::HashMap;

/// Node types that hold an attachment reference, with the attribute holding it.
pub const ATTACHMENT_NODES: &[(&str, &str)] = &[("image", "src"), ("file", "file"), ("pdf", "src")];

/// A file reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    /// Type of the node holding the reference
    pub node_type: String,
    /// The stored path or URL, as written in the document
    pub location: String,
}

impl AttachmentRef {
    /// Last path segment of the location.
    pub fn file_name(&self) -> &str {
        self.location
            .rsplit('/')
            .next()
            .unwrap_or(&self.location)
    }
}

fn reference_attr(node: &Node) -> Option<&'static str> {
    ATTACHMENT_NODES
        .iter()
        .find(|(node_type, _)| node.is_type(node_type))
        .map(|(_, attr)| *attr)
}

/// Every non-empty attachment reference in document order.
pub fn attachment_refs(doc: &Node) -> Vec<AttachmentRef> {
    let types: Vec<&str> = ATTACHMENT_NODES.iter().map(|(node_type, _)| *node_type).collect();

    find_nodes(doc, &types, None)
        .into_iter()
        .filter_map(|node| {
            let attr = reference_attr(&node)?;
            let location = node.str_attr(attr);

            (!location.is_empty()).then(|| AttachmentRef {
                node_type: node.node_type.clone(),
                location: location.to_string(),
            })
        })
        .collect()
}

/// Whether any attachment reference contains `unique_name`.
///
/// Stored attachments are identified by a unique file name; documents reference them through
/// a path or URL that embeds it.
pub fn references_attachment(doc: &Node, unique_name: &str) -> bool {
    !unique_name.is_empty()
        && attachment_refs(doc)
            .iter()
            .any(|reference| reference.location.contains(unique_name))
}

/// Rewrites attachment references through `mapping`, keyed by file name.
///
/// References whose file name has no entry are left as they are. Returns the number of
/// rewritten references.
pub fn rewrite_attachments(doc: &mut Node, mapping: &HashMap<String, String>) -> usize {
    let mut rewritten = 0;

    for (node_type, attr) in ATTACHMENT_NODES {
        transform_nodes(doc, node_type, |node| {
            let location = node.str_attr(attr);
            let file_name = location.rsplit('/').next().unwrap_or(location);

            if let Some(target) = mapping.get(file_name) {
                node.set_attr(*attr, target.as_str());
                rewritten += 1;
            }
        });
    }

    rewritten
}
