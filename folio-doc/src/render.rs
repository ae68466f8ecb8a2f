//! Recursive evaluation of a document against a schema.

use crate::error::DocError;
use crate::model::{Mark, Node};
use crate::schema::Schema;
use crate::tree::escape_text;

/// Renders `doc` with the render functions of `schema`.
///
/// All leaf text is HTML-escaped first, which mutates the tree: a document must be rendered
/// at most once. Children render before their parent, and a node's marks wrap its output
/// from the last mark to the first, so the first mark in the list is the outermost wrapper.
///
/// Fails on the first node or mark type the schema does not know; no partial output is
/// returned.
pub fn render(schema: &Schema, doc: &mut Node) -> Result<String, DocError> {
    escape_text(doc);
    render_node(schema, doc)
}

fn render_node(schema: &Schema, node: &Node) -> Result<String, DocError> {
    let mut content = String::new();

    for child in &node.content {
        content.push_str(&render_node(schema, child)?);
    }

    let render = schema
        .node(&node.node_type)
        .ok_or_else(|| DocError::UnknownNodeType(node.node_type.clone()))?;
    let mut out = render(node, &content);

    for mark in node.marks.iter().rev() {
        out = render_mark(schema, mark, &out)?;
    }

    Ok(out)
}

fn render_mark(schema: &Schema, mark: &Mark, content: &str) -> Result<String, DocError> {
    let render = schema
        .mark(&mark.mark_type)
        .ok_or_else(|| DocError::UnknownMarkType(mark.mark_type.clone()))?;

    Ok(render(mark, content))
}
