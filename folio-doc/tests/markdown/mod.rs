//! Markdown format tests
//!
//! Per-type output of the Markdown schema for the `acme` tenant.

mod table;

use folio_doc::formats::markdown::markdown_schema;
use folio_doc::Tenant;

pub(crate) fn tenant() -> Tenant {
    Tenant::from_template("acme", "https://{name}.folio.example").expect("tenant url")
}

pub(crate) fn render_markdown(raw: &str) -> String {
    let schema = markdown_schema(&tenant()).expect("markdown schema");
    folio_doc::render_str(&schema, raw).expect("Failed to render markdown")
}
