//! Hiccup node model.
//!
//! A single closed enum describes both what callers hand to the normalizer
//! and what comes back out of it. Structures (`Node::List`) only ever appear
//! on the input side; the normalizer replaces them with vnodes.

use serde_json::Value;

use crate::component::{Component, RenderFn};
use crate::vnode::Vnode;

/// String-keyed attribute map attached to a structure.
pub type Attributes = serde_json::Map<String, Value>;

/// Attribute keys that mark a map as a vnode or component rather than
/// an attribute map.
const RESERVED_KEYS: [&str; 2] = ["tag", "view"];

/// A Hiccup input node or a normalized output node.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Node {
    /// Explicit absence of a value.
    #[default]
    Null,
    /// Missing value. Kept apart from [`Node::Null`] so it passes through
    /// unchanged.
    Undefined,
    /// Boolean placeholder, typically the result of a conditional child.
    Bool(bool),
    /// Text content, or a selector when in head position.
    Text(String),
    /// Numeric text content.
    Number(f64),
    /// Map-like object; an attribute map when in second position.
    Attrs(Attributes),
    /// Plain two-argument render function.
    Function(RenderFn),
    /// Object component exposing a view.
    Component(Component),
    /// Already-constructed framework vnode.
    Vnode(Box<Vnode>),
    /// Hiccup structure `[head, attrs?, ...children]`, or a list of roots.
    List(Vec<Node>),
}

impl Node {
    /// Build a structure from anything convertible into nodes.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether this is a structure.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Whether this is an empty placeholder: null, undefined, or a boolean.
    pub fn is_empty_value(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined | Self::Bool(_))
    }

    /// Whether this value in head position denotes a fragment.
    pub fn is_fragment_marker(&self) -> bool {
        match self {
            Self::Null | Self::Undefined => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Whether this value in second position is an attribute map.
    ///
    /// Only plain maps qualify; a map carrying a `tag` or `view` key is the
    /// shape of a vnode or component and is treated as the first child.
    pub fn is_attributes(&self) -> bool {
        match self {
            Self::Attrs(map) => !RESERVED_KEYS.iter().any(|key| map.contains_key(*key)),
            _ => false,
        }
    }

    /// Borrow the vnode, if this is one.
    pub fn as_vnode(&self) -> Option<&Vnode> {
        match self {
            Self::Vnode(vnode) => Some(vnode),
            _ => None,
        }
    }

    /// Short variant name, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Attrs(_) => "attrs",
            Self::Function(_) => "function",
            Self::Component(_) => "component",
            Self::Vnode(_) => "vnode",
            Self::List(_) => "list",
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Node {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Node {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Attributes> for Node {
    fn from(attrs: Attributes) -> Self {
        Self::Attrs(attrs)
    }
}

impl From<RenderFn> for Node {
    fn from(render: RenderFn) -> Self {
        Self::Function(render)
    }
}

impl From<Component> for Node {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

impl From<Vnode> for Node {
    fn from(vnode: Vnode) -> Self {
        Self::Vnode(Box::new(vnode))
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Hiccup written as JSON data: arrays become structures and objects become
/// maps.
///
/// ```
/// use hiccup::Node;
/// use serde_json::json;
///
/// let node = Node::from(json!(["div", {"id": "main"}, "text"]));
/// assert!(node.is_list());
/// ```
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(number) => number.as_f64().map_or(Self::Undefined, Self::Number),
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Attrs(map),
        }
    }
}
