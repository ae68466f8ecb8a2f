//! Schema catalogue for output format selection
//!
//! Schemas are built once at startup and looked up by format name for every render call.
//! The catalogue owns them; callers borrow.

use crate::error::DocError;
use crate::formats::html::html_schema;
use crate::formats::markdown::markdown_schema;
use crate::schema::Schema;
use crate::tenant::Tenant;
use std::collections::HashMap;

/// Named, immutable schemas.
///
/// # Examples
///
/// ```ignore
/// let catalogue = SchemaCatalogue::with_defaults(&tenant)?;
/// let html = render(catalogue.get("html")?, &mut doc)?;
/// ```
#[derive(Debug, Default)]
pub struct SchemaCatalogue {
    schemas: HashMap<String, Schema>,
}

impl SchemaCatalogue {
    /// Create an empty catalogue
    pub fn new() -> Self {
        SchemaCatalogue {
            schemas: HashMap::new(),
        }
    }

    /// Register a schema under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) {
        self.schemas.insert(name.into(), schema);
    }

    pub fn get(&self, name: &str) -> Result<&Schema, DocError> {
        self.schemas.get(name).ok_or_else(|| DocError::UnknownFormat {
            name: name.to_string(),
            available: self.list_formats().join(", "),
        })
    }

    pub fn has(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.schemas.keys().cloned().collect();
        names.sort();
        names
    }

    /// Catalogue with the built-in `html` and `markdown` schemas.
    ///
    /// Markdown links are made absolute against `tenant`.
    pub fn with_defaults(tenant: &Tenant) -> Result<Self, DocError> {
        let mut catalogue = Self::new();

        catalogue.register("html", html_schema()?);
        catalogue.register("markdown", markdown_schema(tenant)?);

        Ok(catalogue)
    }
}
