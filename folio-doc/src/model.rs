//! Document model: the generic node and mark tree stored for article content.
//!
//! A document is a tree of [`Node`]s whose root has the type [`ROOT_NODE_TYPE`]. Leaf text
//! nodes carry their text and an ordered list of [`Mark`]s. Attributes are an open bag of
//! [`AttrValue`]s; the model never checks them, render functions read them through the
//! defaulting accessors on [`HasAttrs`].

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type name of the document root.
pub const ROOT_NODE_TYPE: &str = "doc";

/// Attribute bag attached to nodes and marks. Keys serialize in sorted order.
pub type Attrs = BTreeMap<String, AttrValue>;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<AttrValue>),
    Object(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Integer view of a number; fractional values are truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl fmt::Display for AttrValue {
    /// Scalars print bare; null prints nothing; composites print as JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => Ok(()),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::String(s) => f.write_str(s),
            AttrValue::Array(_) | AttrValue::Object(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        AttrValue::Number(value.into())
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(AttrValue::Number)
            .unwrap_or(AttrValue::Null)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(values: Vec<AttrValue>) -> Self {
        AttrValue::Array(values)
    }
}

/// Defaulting attribute accessors shared by nodes and marks.
///
/// None of these panic on a missing key or a value of the wrong kind; they fall back to an
/// empty string, `None` or `false`.
pub trait HasAttrs {
    fn attrs(&self) -> &Attrs;

    fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs().get(key)
    }

    /// String attribute, or `""` when absent or not a string.
    fn str_attr(&self, key: &str) -> &str {
        self.attr(key).and_then(AttrValue::as_str).unwrap_or("")
    }

    fn int_attr(&self, key: &str) -> Option<i64> {
        self.attr(key).and_then(AttrValue::as_i64)
    }

    /// Boolean attribute, `false` when absent or not a boolean.
    fn bool_attr(&self, key: &str) -> bool {
        self.attr(key).and_then(AttrValue::as_bool).unwrap_or(false)
    }

    /// Display form of any attribute value, `""` when absent.
    fn display_attr(&self, key: &str) -> String {
        self.attr(key).map(ToString::to_string).unwrap_or_default()
    }
}

/// A typed element of the document tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Node {
    pub fn new(node_type: impl Into<String>) -> Self {
        Node {
            node_type: node_type.into(),
            ..Default::default()
        }
    }

    /// Creates a leaf text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node {
            node_type: "text".to_string(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Creates an empty root node.
    pub fn doc() -> Self {
        Node::new(ROOT_NODE_TYPE)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Case-insensitive type comparison, as used by the tree utilities.
    pub fn is_type(&self, name: &str) -> bool {
        self.node_type.eq_ignore_ascii_case(name)
    }

    pub fn is_root(&self) -> bool {
        self.node_type == ROOT_NODE_TYPE
    }

    pub fn is_leaf(&self) -> bool {
        self.content.is_empty()
    }
}

impl HasAttrs for Node {
    fn attrs(&self) -> &Attrs {
        &self.attrs
    }
}

/// An inline annotation on a leaf node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
}

impl Mark {
    pub fn new(mark_type: impl Into<String>) -> Self {
        Mark {
            mark_type: mark_type.into(),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

impl HasAttrs for Mark {
    fn attrs(&self) -> &Attrs {
        &self.attrs
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
