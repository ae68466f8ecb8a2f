use folio_doc::formats::html::html_schema;
use folio_doc::formats::markdown::markdown_schema;
use folio_doc::tree::escape_html;
use folio_doc::{parse, render, to_json, AttrValue, Attrs, Mark, Node, Tenant};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

fn attr_value() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        Just(AttrValue::Null),
        any::<bool>().prop_map(AttrValue::from),
        any::<i64>().prop_map(AttrValue::from),
        "[a-z <>&]{0,8}".prop_map(AttrValue::from),
        vec(any::<i32>().prop_map(AttrValue::from), 0..3).prop_map(AttrValue::from),
    ]
}

fn attrs() -> impl Strategy<Value = Attrs> {
    btree_map("[a-z_]{1,6}", attr_value(), 0..3)
}

fn mark() -> impl Strategy<Value = Mark> {
    (
        prop_oneof![Just("bold"), Just("italic"), Just("link"), Just("code")],
        attrs(),
    )
        .prop_map(|(mark_type, attrs)| Mark {
            mark_type: mark_type.to_string(),
            attrs,
        })
}

fn text_node() -> impl Strategy<Value = Node> {
    ("\\PC{1,12}", vec(mark(), 0..3)).prop_map(|(text, marks)| Node::text(text).with_marks(marks))
}

fn tree() -> impl Strategy<Value = Node> {
    text_node().prop_recursive(4, 32, 4, |inner| {
        (
            prop_oneof![Just("paragraph"), Just("blockquote"), Just("list_item"), Just("image")],
            attrs(),
            vec(inner, 0..4),
        )
            .prop_map(|(node_type, attrs, content)| Node {
                node_type: node_type.to_string(),
                attrs,
                content,
                ..Node::default()
            })
    })
}

fn doc() -> impl Strategy<Value = Node> {
    vec(tree(), 0..4).prop_map(|content| Node::doc().with_content(content))
}

fn paragraph(text: &str) -> Node {
    Node::doc().with_content(vec![Node::new("paragraph").with_content(vec![Node::text(text)])])
}

proptest! {
    #[test]
    fn parse_after_serialize_is_identity(doc in doc()) {
        let json = to_json(&doc).unwrap();
        let parsed = parse(&json).unwrap();

        prop_assert_eq!(&parsed, &doc);
        prop_assert_eq!(to_json(&parsed).unwrap(), json);
    }

    #[test]
    fn rendered_text_contains_only_entities(text in "[a-z<>&\"' ]{1,24}") {
        let html = render(&html_schema().unwrap(), &mut paragraph(&text)).unwrap();
        let tenant = Tenant::from_template("acme", "https://{name}.folio.example").unwrap();
        let markdown = render(&markdown_schema(&tenant).unwrap(), &mut paragraph(&text)).unwrap();

        let escaped = escape_html(&text);
        prop_assert_eq!(&html, &format!("<p>{escaped}</p>"));
        prop_assert_eq!(&markdown, &format!("{escaped}\n"));

        let body = &html["<p>".len()..html.len() - "</p>".len()];
        for raw in ['<', '>', '"', '\''] {
            prop_assert!(!body.contains(raw));
        }
    }

    #[test]
    fn rendering_is_deterministic(doc in doc()) {
        let schema = html_schema().unwrap();

        let first = render(&schema, &mut doc.clone()).unwrap();
        let second = render(&schema, &mut doc.clone()).unwrap();

        prop_assert_eq!(first, second);
    }
}
