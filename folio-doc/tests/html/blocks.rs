use super::render_html;
use insta::assert_snapshot;

#[test]
fn test_headline_and_inline_code() {
    let html = render_html(
        r#"{"type":"doc","content":[
            {"type":"headline","attrs":{"level":2},"content":[{"type":"text","text":"Setup"}]},
            {"type":"paragraph","content":[
                {"type":"text","text":"Run "},
                {"type":"text","marks":[{"type":"code"}],"text":"folio render"},
                {"type":"text","text":" now."}
            ]}
        ]}"#,
    );

    assert_snapshot!(html, @"<h2>Setup</h2><p>Run <code>folio render</code> now.</p>");
}

#[test]
fn test_headline_level_defaults_and_clamps() {
    let html = render_html(
        r#"{"type":"doc","content":[
            {"type":"headline","content":[{"type":"text","text":"a"}]},
            {"type":"headline","attrs":{"level":9},"content":[{"type":"text","text":"b"}]}
        ]}"#,
    );

    assert_snapshot!(html, @"<h2>a</h2><h6>b</h6>");
}

#[test]
fn test_first_mark_wraps_outermost() {
    let html = render_html(
        r#"{"type":"doc","content":[{"type":"paragraph","content":[
            {"type":"text","marks":[{"type":"bold"},{"type":"italic"}],"text":"TEXT"}
        ]}]}"#,
    );

    assert_eq!(html, "<p><strong><em>TEXT</em></strong></p>");
}

#[test]
fn test_inline_marks() {
    let html = render_html(
        r#"{"type":"doc","content":[{"type":"paragraph","content":[
            {"type":"text","marks":[{"type":"underlined"}],"text":"u"},
            {"type":"text","marks":[{"type":"strikethrough"}],"text":"s"},
            {"type":"text","text":"H"},
            {"type":"text","marks":[{"type":"sub"}],"text":"2"},
            {"type":"text","text":"O x"},
            {"type":"text","marks":[{"type":"sup"}],"text":"2"}
        ]}]}"#,
    );

    assert_snapshot!(html, @"<p><u>u</u><strike>s</strike>H<sub>2</sub>O x<sup>2</sup></p>");
}

#[test]
fn test_link_mark() {
    let html = render_html(
        r#"{"type":"doc","content":[{"type":"paragraph","content":[
            {"type":"text","marks":[{"type":"link","attrs":{"href":"https://folio.example/docs"}}],"text":"docs"}
        ]}]}"#,
    );

    assert_snapshot!(html, @r#"<p><a href="https://folio.example/docs" target="_blank" rel="noreferrer">docs</a></p>"#);
}

#[test]
fn test_blockquote_and_infobox() {
    let html = render_html(
        r#"{"type":"doc","content":[
            {"type":"blockquote","content":[{"type":"paragraph","content":[{"type":"text","text":"quoted"}]}]},
            {"type":"infobox","attrs":{"color":"blue"},"content":[{"type":"paragraph","content":[{"type":"text","text":"Note"}]}]}
        ]}"#,
    );

    assert_snapshot!(html, @r#"<blockquote><p>quoted</p></blockquote><div class="infobox blue" color="blue"><p>Note</p></div>"#);
}

#[test]
fn test_code_block_escapes_content() {
    let html = render_html(
        r#"{"type":"doc","content":[
            {"type":"code_block","attrs":{"language":"rust"},"content":[{"type":"text","text":"let a = 1 < 2;"}]}
        ]}"#,
    );

    assert_snapshot!(html, @r#"<pre><code language="rust">let a = 1 &lt; 2;</code></pre>"#);
}

#[test]
fn test_empty_paragraph_hard_break_and_rule() {
    let html = render_html(
        r#"{"type":"doc","content":[
            {"type":"paragraph"},
            {"type":"paragraph","content":[{"type":"text","text":"a"},{"type":"hard_break"},{"type":"text","text":"b"}]},
            {"type":"horizontal_rule"}
        ]}"#,
    );

    assert_snapshot!(html, @"<p><br /></p><p>a<br />b</p><hr />");
}

#[test]
fn test_lists() {
    let html = render_html(
        r#"{"type":"doc","content":[
            {"type":"bullet_list","content":[
                {"type":"list_item","content":[{"type":"paragraph","content":[{"type":"text","text":"a"}]}]}
            ]},
            {"type":"ordered_list","content":[
                {"type":"list_item","content":[{"type":"paragraph","content":[{"type":"text","text":"b"}]}]}
            ]},
            {"type":"check_list","content":[
                {"type":"check_list_item","attrs":{"checked":true},"content":[{"type":"paragraph","content":[{"type":"text","text":"done"}]}]},
                {"type":"check_list_item","attrs":{"checked":false},"content":[{"type":"paragraph","content":[{"type":"text","text":"todo"}]}]}
            ]}
        ]}"#,
    );

    assert_snapshot!(html, @r#"<ul><li><p>a</p></li></ul><ol><li><p>b</p></li></ol><ul class="checklist"><li class="checked"><p>done</p></li><li class=""><p>todo</p></li></ul>"#);
}

#[test]
fn test_mention_links_to_object() {
    let html = render_html(
        r#"{"type":"doc","content":[{"type":"paragraph","content":[
            {"type":"mention","attrs":{"type":"article","id":"k3Jd","title":"Onboarding Guide","time":"2024-03-01T10:00:00Z"}},
            {"type":"mention","attrs":{"type":"user","id":"jdoe","title":"Jane"}}
        ]}]}"#,
    );

    assert_snapshot!(html, @r#"<p><a href="/read/onboarding-guide-k3Jd" class="article" mention="k3Jd" object="article" title="Onboarding Guide" time="2024-03-01T10:00:00Z">Onboarding Guide</a><a href="/member/jdoe" class="user" mention="jdoe" object="user" title="Jane" time="">Jane</a></p>"#);
}

#[test]
fn test_unknown_node_type_fails_the_render() {
    let schema = folio_doc::formats::html::html_schema().unwrap();
    let err = folio_doc::render_str(
        &schema,
        r#"{"type":"doc","content":[{"type":"paragraph"},{"type":"mermaid"}]}"#,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "unknown node type 'mermaid'");
}
