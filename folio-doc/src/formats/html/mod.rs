//! HTML output format
//!
//! Renders article documents to a plain HTML fragment (no surrounding document). Text has
//! already been escaped by the renderer; attribute values embedded in markup are escaped
//! here.
//!
//! # Element Mapping Table
//!
//! | Node              | HTML                                                          |
//! |-------------------|---------------------------------------------------------------|
//! | doc               | children only                                                 |
//! | paragraph         | `<p>` (`<br />` when empty)                                   |
//! | blockquote        | `<blockquote>`                                                |
//! | code_block        | `<pre><code language="…">`                                    |
//! | infobox           | `<div class="infobox COLOR" color="COLOR">`                   |
//! | headline          | `<h2>`–`<h4>` from the `level` attribute                      |
//! | image             | `<img>`, wrapped in `<figure>` only with a non-empty caption  |
//! | file              | download link with name and size                              |
//! | mention           | link to the referenced object, titled by the resolver         |
//! | lists             | `<ol>`, `<ul>`, `<ul class="checklist">`, `<li>`              |
//! | table             | wrapped `<table><tbody>`, cells with span, width, background  |
//! | youtube, vimeo    | video iframe embed                                            |
//! | spotify           | audio iframe embed                                            |
//! | pdf               | document iframe embed                                         |
//! | link_preview      | preview card link                                             |
//!
//! Marks map to `<strong>`, `<em>`, `<u>`, `<strike>`, `<code>`, `<a>`, `<sub>` and `<sup>`.

use crate::error::DocError;
use crate::formats::common::{
    caption_is_empty, cell_background, cell_span, cell_width, mention_path,
};
use crate::mention::{MENTION_ID_ATTR, MENTION_KIND_ATTR, MENTION_TIME_ATTR, MENTION_TITLE_ATTR};
use crate::model::{HasAttrs, Mark, Node};
use crate::schema::{MarkKind, NodeKind, OutputFormat, Schema};
use crate::tree::escape_html;

/// Format implementation for HTML fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

/// Builds the HTML schema.
pub fn html_schema() -> Result<Schema, DocError> {
    Schema::from_format(HtmlFormat)
}

impl OutputFormat for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn render_node(&self, kind: NodeKind, node: &Node, content: &str) -> String {
        match kind {
            NodeKind::Doc => content.to_string(),
            NodeKind::Text => node.text.clone(),
            NodeKind::HardBreak => "<br />".to_string(),
            NodeKind::Paragraph => {
                if content.is_empty() {
                    "<p><br /></p>".to_string()
                } else {
                    format!("<p>{content}</p>")
                }
            }
            NodeKind::Blockquote => format!("<blockquote>{content}</blockquote>"),
            NodeKind::CodeBlock => match node.attr("language").filter(|lang| !lang.is_null()) {
                Some(language) => format!(
                    r#"<pre><code language="{}">{content}</code></pre>"#,
                    attr(&language.to_string())
                ),
                None => format!("<pre><code>{content}</code></pre>"),
            },
            NodeKind::Infobox => {
                let color = attr(&node.display_attr("color"));
                format!(r#"<div class="infobox {color}" color="{color}">{content}</div>"#)
            }
            NodeKind::Headline => {
                let level = node.int_attr("level").unwrap_or(2).clamp(1, 6);
                format!("<h{level}>{content}</h{level}>")
            }
            NodeKind::HorizontalRule => "<hr />".to_string(),
            NodeKind::Image => render_image(node, content),
            NodeKind::File => render_file(node),
            NodeKind::Mention => render_mention(node),
            NodeKind::OrderedList => format!("<ol>{content}</ol>"),
            NodeKind::BulletList => format!("<ul>{content}</ul>"),
            NodeKind::ListItem => format!("<li>{content}</li>"),
            NodeKind::CheckList => format!(r#"<ul class="checklist">{content}</ul>"#),
            NodeKind::CheckListItem => {
                let class = if node.bool_attr("checked") { "checked" } else { "" };
                format!(r#"<li class="{class}">{content}</li>"#)
            }
            NodeKind::Table => format!(
                r#"<div class="table-wrapper"><div class="table-content"><table><tbody>{content}</tbody></table></div></div>"#
            ),
            NodeKind::TableRow => format!("<tr>{content}</tr>"),
            NodeKind::TableCell => render_cell("td", node, content),
            NodeKind::TableHeader => render_cell("th", node, content),
            NodeKind::Youtube => {
                let src = attr(&node.display_attr("src"));
                format!(
                    r#"<div class="embed youtube" data-src="{src}"><iframe src="{src}" frameborder="0" allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture" allowfullscreen youtube></iframe></div>"#
                )
            }
            NodeKind::Vimeo => {
                let src = attr(&node.display_attr("src"));
                format!(
                    r#"<div class="embed vimeo" data-src="{src}"><iframe title="vimeo-player" src="{src}" frameborder="0" allowfullscreen vimeo></iframe></div>"#
                )
            }
            NodeKind::Spotify => {
                let src = attr(&node.display_attr("src"));
                format!(
                    r#"<div class="embed spotify" data-src="{src}"><iframe src="{src}" frameborder="0" allowtransparency="true" allow="encrypted-media" spotify></iframe></div>"#
                )
            }
            NodeKind::Pdf => {
                let src = attr(&node.display_attr("src"));
                format!(
                    r#"<div class="embed pdf" data-src="{src}"><iframe src="{src}" frameborder="0" allowtransparency="true" allow="encrypted-media" pdf></iframe></div>"#
                )
            }
            NodeKind::LinkPreview => render_link_preview(node),
        }
    }

    fn render_mark(&self, kind: MarkKind, mark: &Mark, content: &str) -> String {
        match kind {
            MarkKind::Bold => format!("<strong>{content}</strong>"),
            MarkKind::Italic => format!("<em>{content}</em>"),
            MarkKind::Underlined => format!("<u>{content}</u>"),
            MarkKind::Strikethrough => format!("<strike>{content}</strike>"),
            MarkKind::Code => format!("<code>{content}</code>"),
            MarkKind::Link => {
                let href = attr(&mark.display_attr("href"));
                format!(r#"<a href="{href}" target="_blank" rel="noreferrer">{content}</a>"#)
            }
            MarkKind::Sub => format!("<sub>{content}</sub>"),
            MarkKind::Sup => format!("<sup>{content}</sup>"),
        }
    }
}

fn attr(value: &str) -> String {
    escape_html(value)
}

fn render_image(node: &Node, content: &str) -> String {
    let src = attr(&node.display_attr("src"));

    if caption_is_empty(node) {
        return format!(r#"<img src="{src}" alt="{src}" />"#);
    }

    format!(r#"<figure><img src="{src}" alt="{src}" /><figcaption>{content}</figcaption></figure>"#)
}

fn render_file(node: &Node) -> String {
    let file = attr(&node.display_attr("file"));
    let name = attr(&node.display_attr("name"));
    let size = attr(&node.display_attr("size"));

    format!(
        r#"<a href="{file}" class="file" file="{file}" name="{name}" size="{size}" title="{name}"><i class="icon icon-file"></i> <span class="name">{name}</span> <span class="size">({size})</span></a>"#
    )
}

// Rendered as a link so API clients can follow it; the editor itself shows a chip.
fn render_mention(node: &Node) -> String {
    let link = attr(&mention_path(node));
    let kind = attr(node.str_attr(MENTION_KIND_ATTR));
    let id = attr(node.str_attr(MENTION_ID_ATTR));
    let title = attr(node.str_attr(MENTION_TITLE_ATTR));
    let time = attr(&node.display_attr(MENTION_TIME_ATTR));

    format!(
        r#"<a href="{link}" class="{kind}" mention="{id}" object="{kind}" title="{title}" time="{time}">{title}</a>"#
    )
}

fn render_cell(tag: &str, node: &Node, content: &str) -> String {
    let colspan = cell_span(node, "colspan");
    let rowspan = cell_span(node, "rowspan");
    let width = cell_width(node)
        .map(|px| format!("{px}px"))
        .unwrap_or_else(|| "auto".to_string());
    let background = cell_background(node)
        .map(|color| format!("background:{};", attr(color)))
        .unwrap_or_default();

    format!(
        r#"<{tag} colspan="{colspan}" rowspan="{rowspan}" style="width:{width};{background}">{content}</{tag}>"#
    )
}

fn render_link_preview(node: &Node) -> String {
    let href = attr(&node.display_attr("href"));
    let title = attr(&node.display_attr("title"));
    let description = attr(&node.display_attr("description"));
    let image = attr(node.str_attr("image"));
    let info = format!(
        r#"<div class="info"><div class="title">{title}</div><div class="description">{description}</div><div class="url">{href}</div></div>"#
    );

    if image.is_empty() {
        return format!(
            r#"<a href="{href}" target="_blank" class="embed link" data-href="{href}" data-title="{title}" data-description="{description}" data-image="">{info}</a>"#
        );
    }

    format!(
        r#"<a href="{href}" target="_blank" class="embed link" data-href="{href}" data-title="{title}" data-description="{description}" data-image="{image}"><div class="image"><img src="{image}" alt="" /></div>{info}</a>"#
    )
}
