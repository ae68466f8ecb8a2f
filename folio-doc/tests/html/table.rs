use super::render_html;
use insta::assert_snapshot;

#[test]
fn test_table_cells_carry_span_width_and_background() {
    let html = render_html(
        r##"{"type":"doc","content":[{"type":"table","content":[
            {"type":"table_row","content":[
                {"type":"table_header","attrs":{"colspan":1,"rowspan":1,"colwidth":[120],"background":"none"},"content":[
                    {"type":"paragraph","content":[{"type":"text","text":"Name"}]}
                ]},
                {"type":"table_header","attrs":{"colspan":2,"rowspan":1,"colwidth":null},"content":[
                    {"type":"paragraph","content":[{"type":"text","text":"Role"}]}
                ]}
            ]},
            {"type":"table_row","content":[
                {"type":"table_cell","attrs":{"colspan":1,"rowspan":2,"background":"#ffeeee"},"content":[
                    {"type":"paragraph","content":[{"type":"text","text":"Ada"}]}
                ]},
                {"type":"table_cell","content":[
                    {"type":"paragraph","content":[{"type":"text","text":"Admin"}]}
                ]}
            ]}
        ]}]}"##,
    );

    assert_snapshot!(html, @r##"<div class="table-wrapper"><div class="table-content"><table><tbody><tr><th colspan="1" rowspan="1" style="width:120px;"><p>Name</p></th><th colspan="2" rowspan="1" style="width:auto;"><p>Role</p></th></tr><tr><td colspan="1" rowspan="2" style="width:auto;background:#ffeeee;"><p>Ada</p></td><td colspan="1" rowspan="1" style="width:auto;"><p>Admin</p></td></tr></tbody></table></div></div>"##);
}

#[test]
fn test_empty_table() {
    let html = render_html(r#"{"type":"doc","content":[{"type":"table"}]}"#);

    assert_eq!(
        html,
        r#"<div class="table-wrapper"><div class="table-content"><table><tbody></tbody></table></div></div>"#
    );
}
