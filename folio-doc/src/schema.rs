//! Schema definition: the render functions trusted for one output format.
//!
//! A [`Schema`] maps node and mark type names to render functions. It is built once,
//! is immutable afterwards and can be shared across threads. Schemas for the built-in
//! output formats are derived from an [`OutputFormat`] implementation, which handles the
//! closed set of [`NodeKind`]s and [`MarkKind`]s with an exhaustive `match`; ad-hoc schemas
//! can register arbitrary names through [`SchemaBuilder`].

use crate::error::DocError;
use crate::model::{Mark, Node, ROOT_NODE_TYPE};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Renders a node given its already rendered children.
pub type NodeRenderFn = Arc<dyn Fn(&Node, &str) -> String + Send + Sync>;

/// Wraps already rendered content in a mark.
pub type MarkRenderFn = Arc<dyn Fn(&Mark, &str) -> String + Send + Sync>;

/// Node and mark render tables for one output format.
#[derive(Clone)]
pub struct Schema {
    nodes: HashMap<String, NodeRenderFn>,
    marks: HashMap<String, MarkRenderFn>,
}

impl Schema {
    /// Creates a schema from render tables.
    ///
    /// Fails if no render function is registered for the root node type.
    pub fn new(
        nodes: HashMap<String, NodeRenderFn>,
        marks: HashMap<String, MarkRenderFn>,
    ) -> Result<Self, DocError> {
        if !nodes.contains_key(ROOT_NODE_TYPE) {
            return Err(DocError::MissingRootNode(ROOT_NODE_TYPE.to_string()));
        }

        Ok(Schema { nodes, marks })
    }

    /// Start a builder for an ad-hoc schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Builds a schema covering every [`NodeKind`] and [`MarkKind`] of `format`.
    pub fn from_format<F: OutputFormat + 'static>(format: F) -> Result<Self, DocError> {
        let format = Arc::new(format);
        let mut builder = SchemaBuilder::default();

        for kind in NodeKind::ALL {
            let format = Arc::clone(&format);
            builder = builder.node(kind.name(), move |node, content| {
                format.render_node(*kind, node, content)
            });
        }

        for kind in MarkKind::ALL {
            let format = Arc::clone(&format);
            builder = builder.mark(kind.name(), move |mark, content| {
                format.render_mark(*kind, mark, content)
            });
        }

        builder.build()
    }

    pub fn node(&self, name: &str) -> Option<&NodeRenderFn> {
        self.nodes.get(name)
    }

    pub fn mark(&self, name: &str) -> Option<&MarkRenderFn> {
        self.marks.get(name)
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    /// Node type names covered by this schema (sorted)
    pub fn node_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Mark type names covered by this schema (sorted)
    pub fn mark_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.marks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("nodes", &self.node_names())
            .field("marks", &self.mark_names())
            .finish()
    }
}

/// Incremental construction of a [`Schema`].
///
/// Registering a name twice replaces the earlier function.
#[derive(Default)]
pub struct SchemaBuilder {
    nodes: HashMap<String, NodeRenderFn>,
    marks: HashMap<String, MarkRenderFn>,
}

impl SchemaBuilder {
    pub fn node<F>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Node, &str) -> String + Send + Sync + 'static,
    {
        self.nodes.insert(name.into(), Arc::new(render));
        self
    }

    pub fn mark<F>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Mark, &str) -> String + Send + Sync + 'static,
    {
        self.marks.insert(name.into(), Arc::new(render));
        self
    }

    pub fn build(self) -> Result<Schema, DocError> {
        Schema::new(self.nodes, self.marks)
    }
}

/// Trait for output formats with a fixed node and mark set
///
/// Implementors render each known kind; [`Schema::from_format`] turns them into a name-keyed
/// schema.
pub trait OutputFormat: Send + Sync {
    /// The name of this format (e.g., "html", "markdown")
    fn name(&self) -> &str;

    /// Render one node given the concatenated output of its children.
    fn render_node(&self, kind: NodeKind, node: &Node, content: &str) -> String;

    /// Wrap `content` in one mark.
    fn render_mark(&self, kind: MarkKind, mark: &Mark, content: &str) -> String;
}

/// Node types emitted by the article editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Doc,
    Text,
    HardBreak,
    Paragraph,
    Blockquote,
    CodeBlock,
    Infobox,
    Headline,
    HorizontalRule,
    Image,
    File,
    Mention,
    OrderedList,
    BulletList,
    ListItem,
    CheckList,
    CheckListItem,
    Table,
    TableRow,
    TableCell,
    TableHeader,
    Youtube,
    Vimeo,
    Spotify,
    Pdf,
    LinkPreview,
}

impl NodeKind {
    pub const ALL: &'static [NodeKind] = &[
        NodeKind::Doc,
        NodeKind::Text,
        NodeKind::HardBreak,
        NodeKind::Paragraph,
        NodeKind::Blockquote,
        NodeKind::CodeBlock,
        NodeKind::Infobox,
        NodeKind::Headline,
        NodeKind::HorizontalRule,
        NodeKind::Image,
        NodeKind::File,
        NodeKind::Mention,
        NodeKind::OrderedList,
        NodeKind::BulletList,
        NodeKind::ListItem,
        NodeKind::CheckList,
        NodeKind::CheckListItem,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableCell,
        NodeKind::TableHeader,
        NodeKind::Youtube,
        NodeKind::Vimeo,
        NodeKind::Spotify,
        NodeKind::Pdf,
        NodeKind::LinkPreview,
    ];

    /// Stored type name
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Doc => ROOT_NODE_TYPE,
            NodeKind::Text => "text",
            NodeKind::HardBreak => "hard_break",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Blockquote => "blockquote",
            NodeKind::CodeBlock => "code_block",
            NodeKind::Infobox => "infobox",
            NodeKind::Headline => "headline",
            NodeKind::HorizontalRule => "horizontal_rule",
            NodeKind::Image => "image",
            NodeKind::File => "file",
            NodeKind::Mention => "mention",
            NodeKind::OrderedList => "ordered_list",
            NodeKind::BulletList => "bullet_list",
            NodeKind::ListItem => "list_item",
            NodeKind::CheckList => "check_list",
            NodeKind::CheckListItem => "check_list_item",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table_row",
            NodeKind::TableCell => "table_cell",
            NodeKind::TableHeader => "table_header",
            NodeKind::Youtube => "youtube",
            NodeKind::Vimeo => "vimeo",
            NodeKind::Spotify => "spotify",
            NodeKind::Pdf => "pdf",
            NodeKind::LinkPreview => "link_preview",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NodeKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

/// Mark types emitted by the article editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Code,
    Link,
    Sub,
    Sup,
}

impl MarkKind {
    pub const ALL: &'static [MarkKind] = &[
        MarkKind::Bold,
        MarkKind::Italic,
        MarkKind::Underlined,
        MarkKind::Strikethrough,
        MarkKind::Code,
        MarkKind::Link,
        MarkKind::Sub,
        MarkKind::Sup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MarkKind::Bold => "bold",
            MarkKind::Italic => "italic",
            MarkKind::Underlined => "underlined",
            MarkKind::Strikethrough => "strikethrough",
            MarkKind::Code => "code",
            MarkKind::Link => "link",
            MarkKind::Sub => "sub",
            MarkKind::Sup => "sup",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        MarkKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}
