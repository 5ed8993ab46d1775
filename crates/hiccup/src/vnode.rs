//! Framework vnodes and the constructor that builds them.

use crate::component::Component;
use crate::node::{Attributes, Node};

/// What a vnode renders as.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Tag {
    /// Element selector such as `div` or `a#home.nav`. Shorthand is left
    /// for the framework to interpret.
    Selector(String),
    /// Tagless grouping node.
    Fragment,
    /// Object component; rendered by invoking its view.
    Component(Component),
    /// Previously constructed vnode used in tag position.
    Vnode(Box<Vnode>),
}

/// A framework vnode: tag, attributes and children.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vnode {
    /// Element selector, fragment marker or component.
    pub tag: Tag,
    /// Attributes, or component properties.
    pub attrs: Attributes,
    /// Normalized children in input order.
    pub children: Vec<Node>,
}

impl Vnode {
    /// Create a vnode.
    pub fn new(tag: Tag, attrs: Attributes, children: Vec<Node>) -> Self {
        Self {
            tag,
            attrs,
            children,
        }
    }

    /// Element vnode with no attributes and no children.
    pub fn element(selector: impl Into<String>) -> Self {
        Self::new(Tag::Selector(selector.into()), Attributes::new(), Vec::new())
    }

    /// Fragment vnode holding `children`.
    pub fn fragment(children: Vec<Node>) -> Self {
        Self::new(Tag::Fragment, Attributes::new(), children)
    }

    /// The selector, if this is an element vnode.
    pub fn selector(&self) -> Option<&str> {
        match &self.tag {
            Tag::Selector(selector) => Some(selector),
            _ => None,
        }
    }

    /// The component, if this vnode renders one.
    pub fn component(&self) -> Option<&Component> {
        match &self.tag {
            Tag::Component(component) => Some(component),
            _ => None,
        }
    }
}

/// The framework's vnode constructor.
///
/// Receives a resolved tag, an attribute map and the already normalized
/// children. Closures with the matching signature implement this trait.
pub trait Construct {
    /// Build the output node for one structure.
    fn construct(&self, tag: Tag, attrs: Attributes, children: Vec<Node>) -> Node;
}

impl<F> Construct for F
where
    F: Fn(Tag, Attributes, Vec<Node>) -> Node,
{
    fn construct(&self, tag: Tag, attrs: Attributes, children: Vec<Node>) -> Node {
        self(tag, attrs, children)
    }
}

/// Default constructor producing plain [`Vnode`] values.
///
/// Does no interpretation of its own: selectors stay verbatim and children
/// are kept as given, including empty placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyperscript;

impl Construct for Hyperscript {
    fn construct(&self, tag: Tag, attrs: Attributes, children: Vec<Node>) -> Node {
        Node::from(Vnode::new(tag, attrs, children))
    }
}
