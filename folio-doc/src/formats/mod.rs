//! Built-in output formats
//!
//! Each format implements [`OutputFormat`](crate::schema::OutputFormat) and is turned into a
//! [`Schema`](crate::schema::Schema) once at startup.

pub mod common;
pub mod html;
pub mod markdown;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
