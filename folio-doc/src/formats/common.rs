//! Helpers shared by the HTML and Markdown formats.

use crate::mention::{ReferenceKind, MENTION_ID_ATTR, MENTION_KIND_ATTR, MENTION_TITLE_ATTR};
use crate::model::{HasAttrs, Node};

/// URL-safe slug of a title, suffixed with the object's identifier.
///
/// The identifier keeps links stable when the title changes; the slug is cosmetic.
pub fn slug_with_id(title: &str, id: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        id.to_string()
    } else {
        format!("{slug}-{id}")
    }
}

/// Site-relative path of the object a mention points to.
///
/// Unknown reference kinds have no page and yield an empty path.
pub fn mention_path(node: &Node) -> String {
    let id = node.str_attr(MENTION_ID_ATTR);
    let title = node.str_attr(MENTION_TITLE_ATTR);

    match ReferenceKind::from_name(node.str_attr(MENTION_KIND_ATTR)) {
        Some(ReferenceKind::Article) => format!("/read/{}", slug_with_id(title, id)),
        Some(ReferenceKind::List) => format!("/list/{}", slug_with_id(title, id)),
        Some(ReferenceKind::Group) => format!("/group/{}", slug_with_id(title, id)),
        Some(ReferenceKind::User) => format!("/member/{id}"),
        Some(ReferenceKind::Tag) => format!("/tag/{id}"),
        None => String::new(),
    }
}

/// Whether an image node's caption paragraph carries no text.
pub fn caption_is_empty(image: &Node) -> bool {
    match image.content.as_slice() {
        [] => true,
        [caption] => match caption.content.as_slice() {
            [] => true,
            [only] => only.text.is_empty(),
            _ => false,
        },
        _ => false,
    }
}

/// Explicit column width of a table cell, in pixels.
pub fn cell_width(cell: &Node) -> Option<i64> {
    cell.attr("colwidth")
        .and_then(|value| value.as_array())
        .and_then(|widths| widths.first())
        .and_then(|width| width.as_i64())
}

/// Background color of a table cell; `"none"` means no color.
pub fn cell_background(cell: &Node) -> Option<&str> {
    match cell.str_attr("background") {
        "" | "none" => None,
        color => Some(color),
    }
}

/// Span of a table cell, at least 1.
pub fn cell_span(cell: &Node, key: &str) -> i64 {
    cell.int_attr(key).unwrap_or(1).max(1)
}
