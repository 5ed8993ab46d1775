//! Components and the function-component adapter.
//!
//! The target framework only understands object components: values exposing a
//! zero-argument `view` operation. Plain render functions taking
//! `(attributes, children)` are bridged into that convention by
//! [`Component::from_fn`], which moves the call-time attributes and children
//! into the produced component.

use std::fmt;
use std::sync::Arc;

use crate::node::{Attributes, Node};

/// Error raised while rendering a component view.
///
/// Neither the normalizer nor the function-component adapter ever catch this
/// error; it surfaces wherever the view is finally invoked, typically inside
/// a serialization backend.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ComponentError {
    /// Render failure described by a message.
    #[error("{0}")]
    Message(String),

    /// Render failure caused by another error.
    #[error("component render failed")]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ComponentError {
    /// Create an error from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// An object component: anything exposing a zero-argument view operation.
///
/// Closures `Fn() -> Result<Node, ComponentError>` implement this trait, so
/// simple components do not need a dedicated type.
pub trait View: Send + Sync {
    /// Render the component.
    fn view(&self) -> Result<Node, ComponentError>;
}

impl<F> View for F
where
    F: Fn() -> Result<Node, ComponentError> + Send + Sync,
{
    fn view(&self) -> Result<Node, ComponentError> {
        self()
    }
}

/// Shared handle to an object component.
///
/// Two handles are equal only when they point at the same component instance.
#[derive(Clone)]
pub struct Component(Arc<dyn View>);

impl Component {
    /// Wrap a [`View`] implementation.
    pub fn new(view: impl View + 'static) -> Self {
        Self(Arc::new(view))
    }

    /// Adapt a two-argument render function into an object component.
    ///
    /// The returned component owns `attrs` and `children`; each call to
    /// [`Component::view`] evaluates `render(&attrs, &children)`.
    pub fn from_fn(render: RenderFn, attrs: Attributes, children: Vec<Node>) -> Self {
        Self::new(BoundRender {
            render,
            attrs,
            children,
        })
    }

    /// Invoke the component's view.
    pub fn view(&self) -> Result<Node, ComponentError> {
        self.0.view()
    }

    /// Whether both handles refer to the same component instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({:p})", Arc::as_ptr(&self.0))
    }
}

type RenderFnInner = dyn Fn(&Attributes, &[Node]) -> Result<Node, ComponentError> + Send + Sync;

/// A plain render function taking attributes and normalized children.
#[derive(Clone)]
pub struct RenderFn(Arc<RenderFnInner>);

impl RenderFn {
    /// Wrap a closure or function item.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Attributes, &[Node]) -> Result<Node, ComponentError> + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    /// Call the function directly.
    pub fn call(&self, attrs: &Attributes, children: &[Node]) -> Result<Node, ComponentError> {
        (self.0)(attrs, children)
    }
}

impl PartialEq for RenderFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RenderFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RenderFn({:p})", Arc::as_ptr(&self.0))
    }
}

/// Render function bound to the attributes and children it was called with.
struct BoundRender {
    render: RenderFn,
    attrs: Attributes,
    children: Vec<Node>,
}

impl View for BoundRender {
    fn view(&self) -> Result<Node, ComponentError> {
        self.render.call(&self.attrs, &self.children)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Component {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("<component>")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RenderFn {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("<function>")
    }
}
