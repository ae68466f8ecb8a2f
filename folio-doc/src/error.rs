//! Error types for document operations

use thiserror::Error;

/// Errors that can occur while parsing, rendering or migrating documents
#[derive(Debug, Error)]
pub enum DocError {
    /// The serialized document is not a structurally valid node tree
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The document tree could not be written back to its serialized form
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A node type used by the document has no entry in the schema
    #[error("unknown node type '{0}'")]
    UnknownNodeType(String),

    /// A mark type used by the document has no entry in the schema
    #[error("unknown mark type '{0}'")]
    UnknownMarkType(String),

    /// A schema was built without an entry for the root node type
    #[error("schema has no render function for root node type '{0}'")]
    MissingRootNode(String),

    /// No schema is registered under the requested output format name
    #[error("unknown output format '{name}' (available: {available})")]
    UnknownFormat { name: String, available: String },

    /// A tenant base URL template does not produce a valid URL
    #[error("invalid tenant base URL '{url}': {reason}")]
    InvalidTenantUrl { url: String, reason: String },

    /// A migration step failed; the pipeline stopped at this step
    #[error("migration step {step} failed: {source}")]
    MigrationStepFailed {
        step: u32,
        #[source]
        source: Box<DocError>,
    },
}

impl DocError {
    /// Creates a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
