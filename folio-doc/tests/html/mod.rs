//! HTML format tests
//!
//! Per-type output of the HTML schema, rendered from stored JSON.

mod blocks;
mod table;

use folio_doc::formats::html::html_schema;

pub(crate) fn render_html(raw: &str) -> String {
    let schema = html_schema().expect("html schema");
    folio_doc::render_str(&schema, raw).expect("Failed to render html")
}
