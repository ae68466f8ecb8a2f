//! Reference files for offline mention resolution.
//!
//! Without the wiki's database the CLI resolves mentions against a JSON file listing the
//! objects a caller may see:
//!
//! ```json
//! [
//!   {"kind": "article", "id": "k3Jd", "title": "Onboarding Guide"},
//!   {"kind": "article", "id": "x9", "title": "Payroll", "access": false}
//! ]
//! ```
//!
//! `access` defaults to `true`. Objects missing from the file resolve as not found.

use folio_doc::{ReferenceKind, Resolution, Scope, StaticLookup};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Error reading references file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid references file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown reference kind '{0}' (expected article, list, tag, user or group)")]
    UnknownKind(String),

    #[error("Unknown client scope '{0}' (expected articles, lists or tags)")]
    UnknownScope(String),
}

#[derive(Debug, Deserialize)]
struct ReferenceEntry {
    kind: String,
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default = "granted")]
    access: bool,
}

fn granted() -> bool {
    true
}

/// Builds a lookup from the JSON text of a references file.
pub fn parse_references(path: &str, raw: &str) -> Result<StaticLookup, ReferenceError> {
    let entries: Vec<ReferenceEntry> =
        serde_json::from_str(raw).map_err(|source| ReferenceError::Parse {
            path: path.to_string(),
            source,
        })?;

    let mut lookup = StaticLookup::new();
    for entry in entries {
        let kind = ReferenceKind::from_name(&entry.kind)
            .ok_or_else(|| ReferenceError::UnknownKind(entry.kind.clone()))?;
        lookup.insert(kind, entry.id, Resolution::found(entry.title, entry.access));
    }

    Ok(lookup)
}

pub fn load_references(path: &str) -> Result<StaticLookup, ReferenceError> {
    let raw = fs::read_to_string(path).map_err(|source| ReferenceError::Read {
        path: path.to_string(),
        source,
    })?;

    parse_references(path, &raw)
}

/// Parses a comma separated scope list such as `articles,tags`.
pub fn parse_scopes(list: &str) -> Result<BTreeSet<Scope>, ReferenceError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| match name {
            "articles" => Ok(Scope::ArticlesRead),
            "lists" => Ok(Scope::ListsRead),
            "tags" => Ok(Scope::TagsRead),
            other => Err(ReferenceError::UnknownScope(other.to_string())),
        })
        .collect()
}
