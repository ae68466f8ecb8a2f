//! Schema-agnostic traversals over a document tree.
//!
//! All traversals are pre-order, depth-first and left-to-right, testing a node before its
//! children. Type names are compared case-insensitively.

use crate::model::Node;

/// Returns clones of up to `limit` nodes whose type is one of `type_names`.
///
/// `None` collects every match. Traversal stops as soon as the limit is reached.
pub fn find_nodes(doc: &Node, type_names: &[&str], limit: Option<usize>) -> Vec<Node> {
    let mut results = Vec::new();

    if limit != Some(0) {
        collect(doc, type_names, limit, &mut results);
    }

    results
}

/// Returns `true` when the limit has been reached and traversal must stop.
fn collect(node: &Node, type_names: &[&str], limit: Option<usize>, results: &mut Vec<Node>) -> bool {
    if type_names.iter().any(|name| node.is_type(name)) {
        results.push(node.clone());

        if limit.is_some_and(|max| results.len() >= max) {
            return true;
        }
    }

    node.content
        .iter()
        .any(|child| collect(child, type_names, limit, results))
}

/// Calls `transform` on every node of the given type, in place.
///
/// Every node is visited regardless of whether an ancestor matched. The closure may edit the
/// node's attributes, marks and content; children are visited after the closure returns, so
/// content it appends is traversed too.
pub fn transform_nodes<F>(doc: &mut Node, type_name: &str, mut transform: F)
where
    F: FnMut(&mut Node),
{
    transform_by_type(doc, type_name, &mut transform);
}

fn transform_by_type<F>(node: &mut Node, type_name: &str, transform: &mut F)
where
    F: FnMut(&mut Node),
{
    if node.is_type(type_name) {
        transform(node);
    }

    for child in &mut node.content {
        transform_by_type(child, type_name, transform);
    }
}

/// HTML-escapes the text of every node in the tree.
///
/// Rendering calls this exactly once before generating markup. Calling it twice escapes
/// twice.
pub fn escape_text(doc: &mut Node) {
    for child in &mut doc.content {
        escape_text(child);
    }

    if needs_escaping(&doc.text) {
        doc.text = escape_html(&doc.text);
    }
}

fn needs_escaping(s: &str) -> bool {
    s.contains(['&', '<', '>', '"', '\''])
}

/// Escapes `& < > " '` the way author text is neutralized before it is embedded in markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);

    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

/// Concatenated text of every leaf below `node`, in document order.
pub fn plain_text(node: &Node) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Node, out: &mut String) {
    out.push_str(&node.text);

    for child in &node.content {
        push_text(child, out);
    }
}
