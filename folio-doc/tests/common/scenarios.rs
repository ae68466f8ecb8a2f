use folio_doc::formats::html::html_schema;
use folio_doc::formats::markdown::markdown_schema;
use folio_doc::tree::find_nodes;
use folio_doc::{
    parse, render, render_str, BuiltinPlaceholders, Caller, HasAttrs, MentionResolver,
    MigrationOutcome, Migrator, ReferenceKind, Resolution, StaticLookup, StoredContent, Tenant,
};

const HI: &str =
    r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Hi <b>"}]}]}"#;

fn tenant() -> Tenant {
    Tenant::from_template("acme", "https://{name}.folio.example").unwrap()
}

#[test]
fn test_html_escapes_author_text() {
    let schema = html_schema().unwrap();
    assert_eq!(render_str(&schema, HI).unwrap(), "<p>Hi &lt;b&gt;</p>");
}

#[test]
fn test_markdown_escapes_author_text() {
    let schema = markdown_schema(&tenant()).unwrap();
    assert_eq!(render_str(&schema, HI).unwrap(), "Hi &lt;b&gt;\n");
}

#[test]
fn test_find_first_text_node() {
    let doc = parse(
        r#"{"type":"doc","content":[
            {"type":"paragraph","content":[{"type":"text","text":"one"},{"type":"text","text":"two"}]},
            {"type":"paragraph","content":[{"type":"text","text":"three"}]}
        ]}"#,
    )
    .unwrap();

    let found = find_nodes(&doc, &["text"], Some(1));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "one");
}

#[test]
fn test_migrate_v1_image_gets_caption() {
    let mut record = StoredContent::new(
        r#"{"type":"doc","content":[{"type":"image","attrs":{"src":"x"}}]}"#,
        1,
    );

    let outcome = Migrator::default().migrate(&mut record).unwrap();

    assert_eq!(outcome, MigrationOutcome::Migrated { from: 1, to: 2 });
    assert_eq!(
        parse(&record.content).unwrap(),
        parse(r#"{"type":"doc","content":[{"type":"image","attrs":{"src":"x"},"content":[{"type":"paragraph"}]}]}"#)
            .unwrap()
    );
}

#[test]
fn test_migrate_empty_content_is_noop() {
    let mut record = StoredContent::new("", 1);

    let outcome = Migrator::default().migrate(&mut record).unwrap();

    assert_eq!(outcome, MigrationOutcome::Empty);
    assert_eq!(record, StoredContent::new("", 1));
}

#[test]
fn test_denied_mention_renders_placeholder() {
    let lookup = StaticLookup::new().with(
        ReferenceKind::Article,
        "a1",
        Resolution::found("Secret", false),
    );
    let resolver = MentionResolver::new(&lookup, &BuiltinPlaceholders);
    let raw = r#"{"type":"doc","content":[{"type":"paragraph","content":[
        {"type":"mention","attrs":{"type":"article","id":"a1","title":"Secret"}}
    ]}]}"#;

    for (lang, placeholder) in [("en", "[No access]"), ("de", "[Kein Zugriff]")] {
        let mut doc = parse(raw).unwrap();
        resolver.resolve(&mut doc, &Caller::user("u1"), lang);

        let mention = &find_nodes(&doc, &["mention"], Some(1))[0];
        assert_eq!(mention.str_attr("title"), placeholder);

        let html = render(&html_schema().unwrap(), &mut doc).unwrap();
        assert!(html.contains(placeholder));
        assert!(!html.contains("Secret"));
    }
}
