//! Versioned rich-text documents for the folio wiki
//!
//!     Article content is stored as a ProseMirror-style JSON tree: typed nodes with an open
//!     attribute bag, ordered children, inline marks and leaf text. This crate parses that
//!     tree, renders it to HTML or Markdown, upgrades stored documents across schema versions
//!     and rewrites cross-references ("mentions") for the caller who is going to read them.
//!
//!     This is a pure lib: no I/O, no persistence, no global state. Deciding when to migrate,
//!     storing the result and serializing concurrent writers are the caller's business; the
//!     folio-cli crate is one such caller.
//!
//! Flow
//!
//!     raw JSON --parse--> Node --MentionResolver::resolve--> Node --render(schema)--> String
//!
//!     StoredContent --Migrator::migrate--> StoredContent (parse, edit, serialize per step)
//!
//!     Mention resolution is optional and must happen before rendering. Rendering escapes all
//!     leaf text first, so a tree is rendered at most once.
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # DocError
//!     ├── model.rs            # Node, Mark, AttrValue and defensive attribute accessors
//!     ├── parse.rs            # JSON <-> Node
//!     ├── tree.rs             # find / transform / escape traversals
//!     ├── schema.rs           # Schema, SchemaBuilder, OutputFormat, NodeKind, MarkKind
//!     ├── render.rs           # the recursive renderer
//!     ├── registry.rs         # SchemaCatalogue for selecting a schema by name
//!     ├── formats
//!     │   ├── common.rs       # helpers shared by both formats
//!     │   ├── html            # HTML fragments
//!     │   └── markdown        # Markdown, tenant-absolute links
//!     ├── tenant.rs           # tenant host for absolute links
//!     ├── migrate.rs          # forward-only schema migration
//!     ├── mention.rs          # mention resolution and notifications
//!     ├── attachments.rs      # uploaded files referenced by a document
//!     └── preview.rs          # empty detection and previews
//!
//! Schemas
//!
//!     A Schema is a name-keyed table of render functions, immutable once built and safe to
//!     share between threads. The built-in formats know their node and mark set at compile
//!     time and implement OutputFormat with an exhaustive match over NodeKind / MarkKind;
//!     Schema::from_format turns that into the table. Ad-hoc schemas use SchemaBuilder.
//!     Documents are not validated against a schema when parsed: a node type the schema does
//!     not know fails the render, not the parse, so documents waiting for a migration can still
//!     be inspected.
//!
//!     Marks wrap a node's output from the last mark to the first, so the first mark is the
//!     outermost wrapper. This matches what stored documents have always been rendered with and
//!     is kept as is, although it has never been checked against the order the editor emits.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── html          # per-type HTML output
//!     ├── markdown      # per-type Markdown output
//!     └── common        # cross-format properties and end-to-end scenarios
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.

pub mod attachments;
pub mod error;
pub mod formats;
pub mod mention;
pub mod migrate;
pub mod model;
pub mod parse;
pub mod preview;
pub mod registry;
pub mod render;
pub mod schema;
pub mod tenant;
pub mod tree;

pub use error::DocError;
pub use mention::{
    BuiltinPlaceholders, Caller, Localization, Lookup, MentionResolver, Placeholders,
    ReferenceKind, Resolution, Scope, StaticLookup,
};
pub use migrate::{MigrationOutcome, Migrator, StoredContent, LATEST_SCHEMA_VERSION};
pub use model::{AttrValue, Attrs, HasAttrs, Mark, Node};
pub use parse::{parse, to_json};
pub use registry::SchemaCatalogue;
pub use render::render;
pub use schema::{MarkKind, NodeKind, OutputFormat, Schema, SchemaBuilder};
pub use tenant::Tenant;

/// Parses `raw` and renders it with `schema`.
pub fn render_str(schema: &Schema, raw: &str) -> Result<String, DocError> {
    let mut doc = parse(raw)?;
    render(schema, &mut doc)
}
