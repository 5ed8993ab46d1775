//! Best-effort HTML string rendering.

use std::future::Future;

use hiccup::{Construct, Hyperscript, Node, Normalizer};

use crate::backend::SerializeBackend;
use crate::options::RenderOptions;

/// Normalizes Hiccup input and hands it to a [`SerializeBackend`].
///
/// Rendering never fails from the caller's point of view: empty input and
/// backend errors both produce an empty string. Backend errors are logged
/// at `warn` level.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<B, C = Hyperscript> {
    backend: B,
    normalizer: Normalizer<C>,
}

impl<B: SerializeBackend> HtmlRenderer<B> {
    /// Create a renderer using the default [`Hyperscript`] constructor.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            normalizer: Normalizer::new(),
        }
    }
}

impl<B: SerializeBackend, C: Construct> HtmlRenderer<B, C> {
    /// Create a renderer with a custom normalizer.
    pub fn with_normalizer(backend: B, normalizer: Normalizer<C>) -> Self {
        Self {
            backend,
            normalizer,
        }
    }

    /// The serialization backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Normalize input the way [`HtmlRenderer::render_to_html_string`] does.
    ///
    /// A non-empty list whose first element is itself a list is read as a
    /// list of sibling roots and each element is normalized on its own.
    /// Anything else is normalized as a single structure. Only the first
    /// element is inspected, so `[["div"]]` is two-level sibling input
    /// rather than a structure with a nested head.
    pub fn prepare(&self, node: Node) -> Node {
        match node {
            Node::List(roots) if roots.first().is_some_and(Node::is_list) => {
                tracing::debug!(roots = roots.len(), "Normalizing sibling roots");
                Node::List(
                    roots
                        .into_iter()
                        .map(|root| self.normalizer.normalize(root))
                        .collect(),
                )
            }
            node => self.normalizer.normalize(node),
        }
    }

    /// Render `node` to an HTML string.
    ///
    /// Returns an empty string without calling the backend when the input,
    /// or its normalized form, is null, undefined or a boolean.
    pub async fn render_to_html_string(&self, node: Node, options: &RenderOptions) -> String {
        if node.is_empty_value() {
            return String::new();
        }

        let normalized = self.prepare(node);
        if normalized.is_empty_value() {
            tracing::debug!("Normalized tree is empty, skipping serialization");
            return String::new();
        }

        match self.backend.serialize(&normalized, options).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to render HTML string");
                String::new()
            }
        }
    }
}

/// Render `node` with `backend` and the default constructor.
///
/// See [`HtmlRenderer::render_to_html_string`].
pub async fn render_to_html_string<B: SerializeBackend>(
    backend: &B,
    node: impl Into<Node>,
    options: &RenderOptions,
) -> String {
    HtmlRenderer::new(backend)
        .render_to_html_string(node.into(), options)
        .await
}

impl<B: SerializeBackend + ?Sized> SerializeBackend for &B {
    type Error = B::Error;

    fn serialize(
        &self,
        node: &Node,
        options: &RenderOptions,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        (**self).serialize(node, options)
    }
}
