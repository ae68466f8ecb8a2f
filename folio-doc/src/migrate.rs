//! Forward-only schema migration of stored documents
//!
//! A stored document carries the schema version it was written with. [`Migrator`] holds the
//! ordered list of upgrade steps; step `n` upgrades a document from version `n` to `n + 1`,
//! so the latest version is the number of steps. Steps may be replayed against arbitrarily
//! old data: the list is append-only and existing steps are never reordered or removed.
//!
//! Migration works on a copy of the stored text and commits text and version together only
//! after every pending step succeeded. A failed migration leaves the record at its previous,
//! still renderable version. Persisting the migrated record is up to the caller.

use crate::error::DocError;
use crate::model::Node;
use crate::parse::{parse, to_json};
use crate::tree::transform_nodes;
use std::fmt;
use tracing::{debug, error, warn};

/// Schema version documents are migrated to.
pub const LATEST_SCHEMA_VERSION: u32 = 2;

/// The persisted fields of a content record that migration rewrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredContent {
    /// Serialized document
    pub content: String,
    pub schema_version: u32,
}

impl StoredContent {
    pub fn new(content: impl Into<String>, schema_version: u32) -> Self {
        StoredContent {
            content: content.into(),
            schema_version,
        }
    }
}

/// What a call to [`Migrator::migrate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The record has no content; nothing was touched.
    Empty,
    /// The record is already at (or past) the latest version.
    UpToDate,
    /// Steps `from..to` ran and the record now carries version `to`.
    Migrated { from: u32, to: u32 },
}

impl MigrationOutcome {
    pub fn changed(self) -> bool {
        matches!(self, MigrationOutcome::Migrated { .. })
    }
}

/// Upgrades serialized document text by one schema version.
pub type StepFn = fn(&str) -> Result<String, DocError>;

/// A single named migration step.
#[derive(Clone, Copy)]
pub struct MigrationStep {
    name: &'static str,
    run: StepFn,
}

impl MigrationStep {
    pub const fn new(name: &'static str, run: StepFn) -> Self {
        MigrationStep { name, run }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, content: &str) -> Result<String, DocError> {
        (self.run)(content)
    }
}

impl fmt::Debug for MigrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationStep").field("name", &self.name).finish()
    }
}

/// Built-in steps, indexed by the version they upgrade from.
const STEPS: &[MigrationStep] = &[
    // Version 0 documents were never written; the step only keeps indices aligned.
    MigrationStep::new("initial", noop),
    MigrationStep::new("add_image_captions", add_image_captions),
];

/// Runs pending migration steps over stored content.
#[derive(Debug, Clone)]
pub struct Migrator {
    steps: Vec<MigrationStep>,
}

impl Migrator {
    /// Creates a migrator with a custom step list.
    pub fn with_steps(steps: Vec<MigrationStep>) -> Self {
        Migrator { steps }
    }

    /// Version a record has after a successful migration.
    pub fn latest_version(&self) -> u32 {
        u32::try_from(self.steps.len()).unwrap_or(u32::MAX)
    }

    pub fn steps(&self) -> &[MigrationStep] {
        &self.steps
    }

    /// Whether `record` has pending steps.
    pub fn needs_migration(&self, record: &StoredContent) -> bool {
        !record.content.is_empty() && record.schema_version < self.latest_version()
    }

    /// Brings `record` to the latest schema version.
    pub fn migrate(&self, record: &mut StoredContent) -> Result<MigrationOutcome, DocError> {
        let latest = self.latest_version();

        if record.content.is_empty() {
            return Ok(MigrationOutcome::Empty);
        }

        if record.schema_version >= latest {
            if record.schema_version > latest {
                warn!(
                    schema_version = record.schema_version,
                    latest_schema_version = latest,
                    "Stored content is newer than the latest known schema version"
                );
            }
            return Ok(MigrationOutcome::UpToDate);
        }

        let from = record.schema_version;
        let mut working = record.content.clone();

        for (step, migration) in (from..latest).zip(&self.steps[from as usize..]) {
            debug!(step, name = migration.name(), "Running migration step");

            working = migration.apply(&working).map_err(|e| {
                error!(
                    error = %e,
                    step,
                    schema_version = from,
                    latest_schema_version = latest,
                    "Error migrating content to new schema version"
                );
                DocError::MigrationStepFailed {
                    step,
                    source: Box::new(e),
                }
            })?;
        }

        record.content = working;
        record.schema_version = latest;
        debug!(from, to = latest, "Migrated content");

        Ok(MigrationOutcome::Migrated { from, to: latest })
    }
}

impl Default for Migrator {
    fn default() -> Self {
        Self::with_steps(STEPS.to_vec())
    }
}

/// Migrates `record` with the built-in steps.
pub fn migrate(record: &mut StoredContent) -> Result<MigrationOutcome, DocError> {
    Migrator::default().migrate(record)
}

fn noop(content: &str) -> Result<String, DocError> {
    Ok(content.to_string())
}

/// Gives every image without children an empty caption paragraph.
fn add_image_captions(content: &str) -> Result<String, DocError> {
    let mut doc = parse(content)?;

    transform_nodes(&mut doc, "image", |image| {
        if image.content.is_empty() {
            image.content.push(Node::new("paragraph"));
        }
    });

    to_json(&doc)
}
