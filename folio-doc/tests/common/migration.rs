use folio_doc::formats::html::html_schema;
use folio_doc::migrate::MigrationStep;
use folio_doc::{render_str, DocError, MigrationOutcome, Migrator, StoredContent, LATEST_SCHEMA_VERSION};

const V0: &str = r#"{"type":"doc","content":[
    {"type":"paragraph","content":[{"type":"text","text":"Intro"}]},
    {"type":"image","attrs":{"src":"/attachments/a.png"}},
    {"type":"blockquote","content":[{"type":"image","attrs":{"src":"/attachments/b.png"}}]}
]}"#;

#[test]
fn test_old_documents_migrate_and_render() {
    let mut record = StoredContent::new(V0, 0);

    Migrator::default().migrate(&mut record).unwrap();

    assert_eq!(record.schema_version, LATEST_SCHEMA_VERSION);
    assert_eq!(
        render_str(&html_schema().unwrap(), &record.content).unwrap(),
        r#"<p>Intro</p><img src="/attachments/a.png" alt="/attachments/a.png" /><blockquote><img src="/attachments/b.png" alt="/attachments/b.png" /></blockquote>"#
    );
}

#[test]
fn test_migration_is_idempotent() {
    let migrator = Migrator::default();
    let mut once = StoredContent::new(V0, 1);
    migrator.migrate(&mut once).unwrap();

    let mut twice = once.clone();
    let outcome = migrator.migrate(&mut twice).unwrap();

    assert_eq!(outcome, MigrationOutcome::UpToDate);
    assert_eq!(twice, once);
}

#[test]
fn test_appended_step_failure_keeps_previous_version() {
    fn reject(_: &str) -> Result<String, DocError> {
        Err(DocError::malformed("unsupported node"))
    }

    let mut steps = Migrator::default().steps().to_vec();
    steps.push(MigrationStep::new("reject", reject));
    let migrator = Migrator::with_steps(steps);

    let mut record = StoredContent::new(V0, 1);
    let err = migrator.migrate(&mut record).unwrap_err();

    assert_eq!(err.to_string(), "migration step 2 failed: Malformed document: unsupported node");
    assert_eq!(record, StoredContent::new(V0, 1));
    assert!(render_str(&html_schema().unwrap(), &record.content).is_ok());
}
