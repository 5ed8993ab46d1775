//! Minimal markup backend shared by the integration tests.
//!
//! Good enough to assert on rendered output: expands `tag#id.class`
//! shorthand, drops falsy children and `on*` attributes, and invokes
//! component views. No escaping beyond `<`, `>` and `&`.

use std::future::{Future, ready};
use std::sync::atomic::{AtomicUsize, Ordering};

use hiccup::{ComponentError, Node, Tag, Vnode};
use hiccup_ssr::{RenderOptions, SerializeBackend};
use serde_json::Value;

const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("component failed: {0}")]
    Component(#[from] ComponentError),
}

#[derive(Debug, Default)]
pub struct MarkupBackend {
    calls: AtomicUsize,
}

impl MarkupBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SerializeBackend for MarkupBackend {
    type Error = MarkupError;

    fn serialize(
        &self,
        node: &Node,
        options: &RenderOptions,
    ) -> impl Future<Output = Result<String, MarkupError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut out = String::new();
        if options.get_bool("doctype") == Some(true) {
            out.push_str("<!DOCTYPE html>");
        }
        ready(write_node(node, &mut out).map(|()| out))
    }
}

fn write_node(node: &Node, out: &mut String) -> Result<(), MarkupError> {
    match node {
        Node::Null | Node::Undefined | Node::Bool(_) | Node::Attrs(_) | Node::Function(_) => {}
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Number(number) => out.push_str(&format_number(*number)),
        Node::Component(component) => write_node(&component.view()?, out)?,
        Node::Vnode(vnode) => write_vnode(vnode, out)?,
        Node::List(items) => {
            for item in items {
                write_node(item, out)?;
            }
        }
    }
    Ok(())
}

fn write_vnode(vnode: &Vnode, out: &mut String) -> Result<(), MarkupError> {
    match &vnode.tag {
        Tag::Fragment => write_children(&vnode.children, out),
        Tag::Component(component) => write_node(&component.view()?, out),
        Tag::Vnode(inner) => {
            write_vnode(inner, out)?;
            write_children(&vnode.children, out)
        }
        Tag::Selector(selector) => {
            let (name, id, classes) = split_selector(selector);
            out.push('<');
            out.push_str(name);
            if let Some(id) = id {
                out.push_str(&format!(r#" id="{}""#, escape(id)));
            }
            if !classes.is_empty() {
                out.push_str(&format!(r#" class="{}""#, escape(&classes.join(" "))));
            }
            for (key, value) in &vnode.attrs {
                if key.starts_with("on") {
                    continue;
                }
                match value {
                    Value::Null | Value::Bool(false) => {}
                    Value::Bool(true) => out.push_str(&format!(" {key}")),
                    Value::String(text) => out.push_str(&format!(r#" {key}="{}""#, escape(text))),
                    other => out.push_str(&format!(r#" {key}="{other}""#)),
                }
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&name) {
                return Ok(());
            }
            write_children(&vnode.children, out)?;
            out.push_str(&format!("</{name}>"));
            Ok(())
        }
    }
}

fn write_children(children: &[Node], out: &mut String) -> Result<(), MarkupError> {
    for child in children {
        write_node(child, out)?;
    }
    Ok(())
}

fn split_selector(selector: &str) -> (&str, Option<&str>, Vec<&str>) {
    let name_end = selector.find(['#', '.']).unwrap_or(selector.len());
    let (name, mut rest) = selector.split_at(name_end);
    let name = if name.is_empty() { "div" } else { name };

    let mut id = None;
    let mut classes = Vec::new();
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let (part, next) = body.split_at(end);
        if marker == '#' {
            id = Some(part);
        } else {
            classes.push(part);
        }
        rest = next;
    }
    (name, id, classes)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.is_finite() {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}
