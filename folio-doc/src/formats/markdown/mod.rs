//! Markdown output format
//!
//! Renders article documents to Markdown text for exports and API clients. The format is
//! bound to a [`Tenant`] because mention links leave the wiki and must be absolute.
//!
//! Block nodes end their output with a newline; container nodes post-process the lines of
//! their children:
//! - list items indent continuation lines by two spaces,
//! - ordered lists renumber the `- ` items of their children sequentially,
//! - tables insert a `| --- |` separator after the first row, sized from its column count,
//! - blockquotes and infoboxes prefix every line with `> `.
//!
//! Sub- and superscript have no Markdown syntax and are emitted as inline HTML.

use crate::error::DocError;
use crate::formats::common::{caption_is_empty, mention_path};
use crate::mention::MENTION_TITLE_ATTR;
use crate::model::{HasAttrs, Mark, Node};
use crate::schema::{MarkKind, NodeKind, OutputFormat, Schema};
use crate::tenant::Tenant;

/// Format implementation for Markdown
#[derive(Debug, Clone)]
pub struct MarkdownFormat {
    tenant: Tenant,
}

impl MarkdownFormat {
    pub fn new(tenant: Tenant) -> Self {
        MarkdownFormat { tenant }
    }

    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }
}

/// Builds the Markdown schema for a tenant.
pub fn markdown_schema(tenant: &Tenant) -> Result<Schema, DocError> {
    Schema::from_format(MarkdownFormat::new(tenant.clone()))
}

impl OutputFormat for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn render_node(&self, kind: NodeKind, node: &Node, content: &str) -> String {
        match kind {
            NodeKind::Doc => content.to_string(),
            NodeKind::Text => node.text.clone(),
            NodeKind::HardBreak => "\n".to_string(),
            NodeKind::Paragraph => format!("{content}\n"),
            NodeKind::Blockquote | NodeKind::Infobox => quote(content),
            NodeKind::CodeBlock => match node.attr("language").filter(|lang| !lang.is_null()) {
                Some(language) => format!("```{language}\n{content}\n```\n"),
                None => format!("```\n{content}\n```\n"),
            },
            NodeKind::Headline => match node.int_attr("level") {
                Some(2) => format!("\n## {content}\n\n"),
                Some(3) => format!("\n### {content}\n\n"),
                Some(4) => format!("\n#### {content}\n\n"),
                _ => format!("{content}\n\n"),
            },
            NodeKind::HorizontalRule => "\n---\n\n".to_string(),
            NodeKind::Image => {
                let src = node.display_attr("src");
                let caption = content.strip_suffix('\n').unwrap_or(content);

                if caption_is_empty(node) || caption.is_empty() {
                    format!("![{src}]({src})\n")
                } else {
                    format!("![{src}]({src}) ({caption})\n")
                }
            }
            NodeKind::File => format!(
                "[{}]({}) ({})",
                node.display_attr("name"),
                node.display_attr("file"),
                node.display_attr("size")
            ),
            NodeKind::Mention => format!(
                "@[{}]({})",
                node.str_attr(MENTION_TITLE_ATTR),
                self.tenant.url(&mention_path(node))
            ),
            NodeKind::OrderedList => renumber(content),
            NodeKind::BulletList | NodeKind::CheckList => content.to_string(),
            NodeKind::ListItem => format!("- {}", indent_continuation(content)),
            NodeKind::CheckListItem => {
                let checkbox = if node.bool_attr("checked") { "[x]" } else { "[ ]" };
                format!("- {checkbox} {}", indent_continuation(content))
            }
            NodeKind::Table => table(content),
            NodeKind::TableRow => format!("{content}|\n"),
            NodeKind::TableCell | NodeKind::TableHeader => {
                let cell = content.strip_suffix('\n').unwrap_or(content);
                format!("| {} ", cell.replace('\n', "<br />"))
            }
            NodeKind::Youtube | NodeKind::Vimeo | NodeKind::Spotify | NodeKind::Pdf => {
                let src = node.display_attr("src");
                format!("[{src}]({src})\n")
            }
            NodeKind::LinkPreview => format!(
                "[{}]({})\n",
                node.display_attr("title"),
                node.display_attr("href")
            ),
        }
    }

    fn render_mark(&self, kind: MarkKind, mark: &Mark, content: &str) -> String {
        match kind {
            MarkKind::Bold => format!("**{content}**"),
            MarkKind::Italic => format!("*{content}*"),
            MarkKind::Underlined => format!("_{content}_"),
            MarkKind::Strikethrough => format!("~~{content}~~"),
            MarkKind::Code => format!("`{content}`"),
            MarkKind::Link => format!("[{content}]({})", mark.display_attr("href")),
            MarkKind::Sub => format!("<sub>{content}</sub>"),
            MarkKind::Sup => format!("<sup>{content}</sup>"),
        }
    }
}

/// Lines of rendered block content without the empty remainder after the final newline.
fn lines(content: &str) -> impl Iterator<Item = &str> {
    content.strip_suffix('\n').unwrap_or(content).split('\n')
}

fn quote(content: &str) -> String {
    let mut out = String::from("\n");

    if !content.is_empty() {
        for line in lines(content) {
            out.push_str("> ");
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push('\n');
    out
}

fn indent_continuation(content: &str) -> String {
    let mut out = String::new();

    if content.is_empty() {
        return out;
    }

    for (i, line) in lines(content).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

// Items arrive as `- ` lines from list_item; everything else is a continuation line and gains
// one space so it stays aligned under the `1. ` marker.
fn renumber(content: &str) -> String {
    let mut out = String::new();
    let mut index = 1;

    if content.is_empty() {
        return out;
    }

    for line in lines(content) {
        match line.strip_prefix("- ") {
            Some(item) => {
                out.push_str(&format!("{index}. {item}\n"));
                index += 1;
            }
            None => {
                out.push(' ');
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    out
}

fn table(content: &str) -> String {
    let mut out = String::from("\n");

    if content.is_empty() {
        return out;
    }

    for (i, line) in lines(content).enumerate() {
        out.push_str(line);
        out.push('\n');

        if i == 0 {
            let columns = line.matches('|').count().saturating_sub(1);
            out.push_str(&"| --- ".repeat(columns));
            out.push_str("|\n");
        }
    }

    out.push('\n');
    out
}
