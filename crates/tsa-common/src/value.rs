//! Dynamic parse-tree values.
//!
//! The external parser hands back an untyped tree: every node is a map from
//! property name to one of undefined, null, boolean, number, string, nested
//! node, or an ordered list. Nothing about the shape is known ahead of time;
//! the materializer in `tsa-ast` is responsible for checking it.

use indexmap::IndexMap;
use std::fmt;

/// The structural shape of a dynamic value, used in decode diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Node,
    List,
}

impl Shape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Undefined => "undefined",
            Shape::Null => "null",
            Shape::Boolean => "boolean",
            Shape::Number => "number",
            Shape::String => "string",
            Shape::Node => "node",
            Shape::List => "list",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single untyped value in the parser's output tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DynamicValue {
    /// The engine's `undefined` sentinel. Treated exactly like a missing key.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Node(DynamicNode),
    List(Vec<DynamicValue>),
}

impl DynamicValue {
    pub fn shape(&self) -> Shape {
        match self {
            DynamicValue::Undefined => Shape::Undefined,
            DynamicValue::Null => Shape::Null,
            DynamicValue::Bool(_) => Shape::Boolean,
            DynamicValue::Number(_) => Shape::Number,
            DynamicValue::String(_) => Shape::String,
            DynamicValue::Node(_) => Shape::Node,
            DynamicValue::List(_) => Shape::List,
        }
    }

    /// `undefined` or `null`: the value carries no data.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, DynamicValue::Undefined | DynamicValue::Null)
    }

    #[inline]
    pub fn as_node(&self) -> Option<&DynamicNode> {
        match self {
            DynamicValue::Node(node) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DynamicValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// An untyped node: an insertion-ordered map of property name to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynamicNode {
    entries: IndexMap<String, DynamicValue>,
}

impl DynamicNode {
    pub fn new() -> DynamicNode {
        DynamicNode {
            entries: IndexMap::new(),
        }
    }

    /// Parse a JSON object (for example a `JSON.stringify`-ed TypeScript
    /// source file) into a dynamic node.
    pub fn from_json_str(text: &str) -> Result<DynamicNode, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;
        Ok(DynamicNode::from(map))
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.entries.get(key)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<DynamicValue>,
    ) -> Option<DynamicValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DynamicValue>) -> DynamicNode {
        self.insert(key, value);
        self
    }

    /// The node's `kind` tag, if present and numeric.
    pub fn kind(&self) -> Option<f64> {
        self.get("kind").and_then(DynamicValue::as_number)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynamicValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<DynamicValue>> FromIterator<(K, V)> for DynamicNode {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        DynamicNode {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

macro_rules! impl_from_number {
    ($($source:ty),* $(,)?) => {
        $(impl From<$source> for DynamicValue {
            fn from(v: $source) -> Self { Self::Number(f64::from(v)) }
        })*
    };
}

impl_from_number!(f64, f32, u8, u16, u32, i8, i16, i32);

impl From<bool> for DynamicValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<DynamicNode> for DynamicValue {
    fn from(node: DynamicNode) -> Self {
        Self::Node(node)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(items: Vec<DynamicValue>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<DynamicNode>> for DynamicValue {
    fn from(nodes: Vec<DynamicNode>) -> Self {
        Self::List(nodes.into_iter().map(DynamicValue::Node).collect())
    }
}

impl From<serde_json::Value> for DynamicValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => DynamicValue::Null,
            Value::Bool(b) => DynamicValue::Bool(b),
            Value::Number(n) => DynamicValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => DynamicValue::String(s),
            Value::Array(items) => {
                DynamicValue::List(items.into_iter().map(DynamicValue::from).collect())
            }
            Value::Object(map) => DynamicValue::Node(DynamicNode::from(map)),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for DynamicNode {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "../tests/value_tests.rs"]
mod tests;
