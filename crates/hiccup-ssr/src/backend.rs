//! Serialization backend abstraction.

use std::future::Future;

use hiccup::Node;

use crate::options::RenderOptions;

/// Turns a normalized node tree into HTML markup.
///
/// Receives either a single normalized root or a [`Node::List`] of
/// independent roots. Implementations decide how falsy children are
/// suppressed, how selector shorthand expands into `id`/`class` attributes,
/// and which attributes are omitted from markup. Component views are invoked
/// by the backend; a [`hiccup::ComponentError`] raised there should be
/// reported through [`SerializeBackend::Error`].
pub trait SerializeBackend {
    /// Failure raised while serializing.
    type Error: std::fmt::Display;

    /// Serialize `node` to an HTML string.
    fn serialize(
        &self,
        node: &Node,
        options: &RenderOptions,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
