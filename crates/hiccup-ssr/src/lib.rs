//! Server-side HTML string rendering for Hiccup trees.
//!
//! Normalizes Hiccup input with [`hiccup::Normalizer`] and hands the vnode
//! tree to a [`SerializeBackend`] that produces markup. This crate does not
//! serialize HTML itself; the backend owns escaping, falsy-child suppression
//! and selector shorthand expansion.
//!
//! Rendering is best-effort: backend failures are logged and turned into an
//! empty string.
//!
//! # Example
//!
//! ```
//! use std::future::{Future, ready};
//!
//! use hiccup::Node;
//! use hiccup_ssr::{RenderOptions, SerializeBackend, render_to_html_string};
//! use serde_json::json;
//!
//! struct KindBackend;
//!
//! impl SerializeBackend for KindBackend {
//!     type Error = String;
//!
//!     fn serialize(
//!         &self,
//!         node: &Node,
//!         _options: &RenderOptions,
//!     ) -> impl Future<Output = Result<String, String>> + Send {
//!         ready(Ok(node.kind().to_owned()))
//!     }
//! }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let options = RenderOptions::new();
//! assert_eq!(render_to_html_string(&KindBackend, json!(["p"]), &options).await, "vnode");
//! assert_eq!(render_to_html_string(&KindBackend, Node::Null, &options).await, "");
//! # });
//! ```

mod backend;
mod options;
mod renderer;

pub use backend::SerializeBackend;
pub use options::{OptionsError, RenderOptions};
pub use renderer::{HtmlRenderer, render_to_html_string};
