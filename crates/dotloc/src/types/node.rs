use core::fmt::{Formatter, Result as FmtResult};
use std::collections::BTreeMap;

use serde::de::{Deserializer, Error, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::interpreter::LoadError;
use crate::types::KeyPath;

/// A node in a locale tree.
///
/// Locale data is a recursive structure of objects, arrays and scalar strings.
/// Trees are immutable once installed into a [`Locale`](crate::Locale);
/// replacing translations means installing a whole new tree.
///
/// Any self-describing serde format can produce a `LocaleNode`. Numbers and
/// booleans become their textual scalar form and `null` becomes the empty
/// scalar.
///
/// # Example
///
/// ```
/// use dotloc::{KeyPath, LocaleNode};
///
/// let tree = LocaleNode::from_json_str(r#"{"menu": {"open": "Open"}}"#).unwrap();
/// let path = KeyPath::parse("menu.open").unwrap();
/// assert_eq!(tree.get_path(&path), Some(&LocaleNode::scalar("Open")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleNode {
    /// Named children.
    Object(BTreeMap<String, LocaleNode>),

    /// Ordered children.
    Array(Vec<LocaleNode>),

    /// A literal template string.
    Scalar(String),
}

impl LocaleNode {
    /// Create a scalar node.
    pub fn scalar(text: impl Into<String>) -> Self {
        LocaleNode::Scalar(text.into())
    }

    /// Parse JSON text into a locale tree.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Json { source })
    }

    /// Get a named child, if this node is an object containing `name`.
    pub fn child(&self, name: &str) -> Option<&LocaleNode> {
        match self {
            LocaleNode::Object(children) => children.get(name),
            LocaleNode::Array(_) | LocaleNode::Scalar(_) => None,
        }
    }

    /// Walk `path` from this node. Arrays and scalars cannot be indexed by name.
    pub fn get_path(&self, path: &KeyPath) -> Option<&LocaleNode> {
        path.segments()
            .iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Text of this node when it appears as an array element.
    ///
    /// Scalars render verbatim; nested objects and arrays render as compact
    /// JSON.
    pub fn element_text(&self) -> String {
        match self {
            LocaleNode::Scalar(s) => s.clone(),
            // Keys are strings and leaves are strings, so serialization cannot fail.
            LocaleNode::Object(_) | LocaleNode::Array(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }

    /// Every dotted key that ends on a scalar or array leaf, in sorted order.
    ///
    /// A scalar or array root has no keys.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let LocaleNode::Object(children) = self {
            for (name, child) in children {
                collect_leaf_keys(child, name.clone(), &mut keys);
            }
        }
        keys
    }
}

fn collect_leaf_keys(node: &LocaleNode, prefix: String, keys: &mut Vec<String>) {
    match node {
        LocaleNode::Object(children) => {
            for (name, child) in children {
                collect_leaf_keys(child, format!("{prefix}.{name}"), keys);
            }
        }
        LocaleNode::Array(_) | LocaleNode::Scalar(_) => keys.push(prefix),
    }
}

impl From<serde_json::Value> for LocaleNode {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => LocaleNode::Scalar(String::new()),
            Json::Bool(b) => LocaleNode::Scalar(b.to_string()),
            Json::Number(n) => LocaleNode::Scalar(number_text(&n)),
            Json::String(s) => LocaleNode::Scalar(s),
            Json::Array(items) => LocaleNode::Array(items.into_iter().map(Into::into).collect()),
            Json::Object(map) => {
                LocaleNode::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Number text matching what deserialization produces, so `1.0` reads as `1`.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}

impl<'de> Deserialize<'de> for LocaleNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = LocaleNode;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a locale object, array or scalar")
    }

    fn visit_bool<E: Error>(self, v: bool) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(v.to_string()))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(v.to_string()))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(v.to_string()))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(v.to_string()))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(v.to_string()))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(v))
    }

    fn visit_unit<E: Error>(self) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(String::new()))
    }

    fn visit_none<E: Error>(self) -> Result<LocaleNode, E> {
        Ok(LocaleNode::Scalar(String::new()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<LocaleNode, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(LocaleNode::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LocaleNode, A::Error> {
        let mut children = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, LocaleNode>()? {
            children.insert(key, value);
        }
        Ok(LocaleNode::Object(children))
    }
}
