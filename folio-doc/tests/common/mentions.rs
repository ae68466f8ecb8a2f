use folio_doc::formats::markdown::markdown_schema;
use folio_doc::{
    parse, render, BuiltinPlaceholders, Caller, MentionResolver, ReferenceKind, Resolution, Scope,
    StaticLookup, Tenant,
};
use pretty_assertions::assert_eq;

const DOC: &str = r#"{"type":"doc","attrs":{"lang":"de"},"content":[{"type":"paragraph","content":[
    {"type":"mention","attrs":{"type":"article","id":"a1","title":"old"}},
    {"type":"text","text":" / "},
    {"type":"mention","attrs":{"type":"list","id":"l1","title":"old"}},
    {"type":"text","text":" / "},
    {"type":"mention","attrs":{"type":"user","id":"jdoe","title":"old"}},
    {"type":"text","text":" / "},
    {"type":"mention","attrs":{"type":"article","id":"gone","title":"old"}}
]}]}"#;

fn lookup() -> StaticLookup {
    StaticLookup::new()
        .with(ReferenceKind::Article, "a1", Resolution::found("Handbook", true))
        .with(ReferenceKind::List, "l1", Resolution::found("Reading list", true))
        .with(ReferenceKind::User, "jdoe", Resolution::found("Jane Doe", true))
}

fn render_for(caller: &Caller, lang: &str) -> String {
    let lookup = lookup();
    let resolver = MentionResolver::new(&lookup, &BuiltinPlaceholders);
    let tenant = Tenant::from_template("acme", "https://{name}.folio.example").unwrap();
    let schema = markdown_schema(&tenant).unwrap();

    let mut doc = parse(DOC).unwrap();
    resolver.resolve(&mut doc, caller, lang);
    render(&schema, &mut doc).unwrap()
}

#[test]
fn test_member_sees_live_titles() {
    assert_eq!(
        render_for(&Caller::user("u1"), "de"),
        "@[Handbook](https://acme.folio.example/read/handbook-a1) / \
         @[Reading list](https://acme.folio.example/list/reading-list-l1) / \
         @[Jane Doe](https://acme.folio.example/member/jdoe) / \
         @[[Nicht gefunden]](https://acme.folio.example/read/nicht-gefunden-gone)\n"
    );
}

#[test]
fn test_scoped_client_sees_only_permitted_kinds() {
    let client = Caller::client([Scope::ArticlesRead]);

    assert_eq!(
        render_for(&client, "en"),
        "@[Handbook](https://acme.folio.example/read/handbook-a1) / \
         @[[No access]](https://acme.folio.example/list/no-access-l1) / \
         @[[No access]](https://acme.folio.example/member/jdoe) / \
         @[[Not found]](https://acme.folio.example/read/not-found-gone)\n"
    );
}
