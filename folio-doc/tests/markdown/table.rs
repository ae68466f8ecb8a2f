use super::render_markdown;
use pretty_assertions::assert_eq;

fn cell(kind: &str, paragraphs: &[&str]) -> String {
    let content: Vec<String> = paragraphs
        .iter()
        .map(|text| {
            format!(r#"{{"type":"paragraph","content":[{{"type":"text","text":"{text}"}}]}}"#)
        })
        .collect();

    format!(r#"{{"type":"{kind}","content":[{}]}}"#, content.join(","))
}

fn row(cells: &[String]) -> String {
    format!(r#"{{"type":"table_row","content":[{}]}}"#, cells.join(","))
}

#[test]
fn test_table_gets_separator_row() {
    let table = format!(
        r#"{{"type":"doc","content":[{{"type":"table","content":[{},{}]}}]}}"#,
        row(&[cell("table_header", &["Name"]), cell("table_header", &["Role"])]),
        row(&[cell("table_cell", &["Ada"]), cell("table_cell", &["Admin"])])
    );

    assert_eq!(
        render_markdown(&table),
        "\n| Name | Role |\n| --- | --- |\n| Ada | Admin |\n\n"
    );
}

#[test]
fn test_multi_paragraph_cells_use_line_breaks() {
    let table = format!(
        r#"{{"type":"doc","content":[{{"type":"table","content":[{}]}}]}}"#,
        row(&[cell("table_cell", &["first", "second"]), cell("table_cell", &["x"])])
    );

    assert_eq!(
        render_markdown(&table),
        "\n| first<br />second | x |\n| --- | --- |\n\n"
    );
}
