//! Hiccup to virtual-DOM node transformer.
//!
//! Turns nested data literals of the form `[tag, attrs?, ...children]` into
//! the vnodes a virtual-DOM framework consumes.
//!
//! # Architecture
//!
//! - [`Node`]: closed union of everything that can appear in a Hiccup tree
//! - [`Normalizer`]: recursive transform from [`Node`] structures to vnodes
//! - [`Construct`]: the framework's vnode constructor, injected into the
//!   normalizer; [`Hyperscript`] builds plain [`Vnode`] values
//! - [`Component`] / [`RenderFn`]: object components and plain render
//!   functions, bridged by [`Component::from_fn`]
//!
//! Serializing the resulting tree to HTML lives in the `hiccup-ssr` crate.
//!
//! # Example
//!
//! ```
//! use hiccup::{normalize, Attributes, Node, RenderFn, Tag, Vnode};
//! use serde_json::json;
//!
//! let card = RenderFn::new(|attrs: &Attributes, children: &[Node]| {
//!     Ok(Node::from(Vnode::new(
//!         Tag::Selector("div.card".to_owned()),
//!         attrs.clone(),
//!         children.to_vec(),
//!     )))
//! });
//!
//! let tree = Node::list([
//!     Node::from("main"),
//!     Node::from(json!(["h1", "Title"])),
//!     Node::list([Node::Function(card), Node::from("body")]),
//! ]);
//!
//! let vnode = normalize(tree);
//! let main = vnode.as_vnode().unwrap();
//! assert_eq!(main.selector(), Some("main"));
//! assert_eq!(main.children.len(), 2);
//! assert!(main.children[1].as_vnode().unwrap().component().is_some());
//! ```

mod component;
mod node;
mod normalize;
mod vnode;

pub use component::{Component, ComponentError, RenderFn, View};
pub use node::{Attributes, Node};
pub use normalize::{Normalizer, normalize};
pub use vnode::{Construct, Hyperscript, Tag, Vnode};
