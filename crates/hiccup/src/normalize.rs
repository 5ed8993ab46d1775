//! Recursive normalization of Hiccup structures into vnodes.

use crate::component::Component;
use crate::node::{Attributes, Node};
use crate::vnode::{Construct, Hyperscript, Tag};

/// Normalizes Hiccup nodes using an injected [`Construct`] implementation.
///
/// Stateless; a single normalizer can be shared across threads and calls.
///
/// # Example
///
/// ```
/// use hiccup::{Node, Normalizer};
/// use serde_json::json;
///
/// let normalizer = Normalizer::new();
/// let node = normalizer.normalize(Node::from(json!(["p", "hi"])));
///
/// let vnode = node.as_vnode().unwrap();
/// assert_eq!(vnode.selector(), Some("p"));
/// assert_eq!(vnode.children, vec![Node::from("hi")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer<C = Hyperscript> {
    construct: C,
}

impl Normalizer {
    /// Create a normalizer backed by [`Hyperscript`].
    pub fn new() -> Self {
        Self {
            construct: Hyperscript,
        }
    }
}

impl<C: Construct> Normalizer<C> {
    /// Create a normalizer backed by a custom constructor.
    pub fn with_constructor(construct: C) -> Self {
        Self { construct }
    }

    /// The constructor used for every structure.
    pub fn constructor(&self) -> &C {
        &self.construct
    }

    /// Normalize one node.
    ///
    /// Anything that is not a structure is returned unchanged and an empty
    /// structure becomes [`Node::Null`]. Otherwise the head is resolved,
    /// an attribute map is picked out of second position when present, and
    /// each remaining element is normalized as a child.
    pub fn normalize(&self, node: Node) -> Node {
        let Node::List(items) = node else {
            return node;
        };

        let mut items = items.into_iter().peekable();
        let Some(head) = items.next() else {
            return Node::Null;
        };

        // Nested structures in head position resolve before anything else.
        let head = if head.is_list() || head.is_empty_value() {
            self.normalize(head)
        } else {
            head
        };

        let attrs = match items.next_if(Node::is_attributes) {
            Some(Node::Attrs(attrs)) => attrs,
            _ => Attributes::new(),
        };

        let children: Vec<Node> = items.map(|child| self.normalize(child)).collect();

        let (tag, attrs, children) = match head {
            Node::Function(render) => {
                // The render function already received the attributes.
                let component = Component::from_fn(render, attrs, children.clone());
                (Tag::Component(component), Attributes::new(), children)
            }
            Node::Vnode(vnode) if attrs.is_empty() && children.is_empty() => {
                return Node::Vnode(vnode);
            }
            head => (resolve_tag(head), attrs, children),
        };

        self.construct.construct(tag, attrs, children)
    }
}

/// Normalize `node` with the default [`Hyperscript`] constructor.
pub fn normalize(node: impl Into<Node>) -> Node {
    Normalizer::new().normalize(node.into())
}

fn resolve_tag(head: Node) -> Tag {
    match head {
        head if head.is_fragment_marker() => Tag::Fragment,
        Node::Text(selector) => Tag::Selector(selector),
        Node::Component(component) => Tag::Component(component),
        Node::Vnode(vnode) => Tag::Vnode(vnode),
        other => {
            tracing::debug!(head = other.kind(), "Unusable structure head, using fragment");
            Tag::Fragment
        }
    }
}
