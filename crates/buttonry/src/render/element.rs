//! A minimal element tree produced by the renderers.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// A click handler shared between renders of the same control.
#[derive(Clone)]
pub struct ClickHandler(Arc<dyn Fn() + Send + Sync>);

impl ClickHandler {
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

/// A node of rendered output.
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element(Element),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment(nodes) => {
                for child in nodes {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serializes the node to HTML.
    pub fn to_html(&self) -> Result<String, minijinja::Error> {
        super::html::default_renderer().render_node(self)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element with a tag, attributes, a class list, children and an
/// optional click handler.
///
/// `display_name` identifies the component that produced the element
/// (`"CheckIcon"`); it is not serialized.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: Cow<'static, str>,
    display_name: Option<Cow<'static, str>>,
    class: Option<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    on_click: Option<ClickHandler>,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// An element produced by a named component, e.g. an icon rendered as
    /// `<svg>` by `ArrowRightIcon`.
    pub fn component(
        display_name: impl Into<Cow<'static, str>>,
        tag: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(tag).with_display_name(display_name)
    }

    pub fn with_display_name(mut self, display_name: impl Into<Cow<'static, str>>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the class attribute. Blank strings clear it.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = (!class.trim().is_empty()).then_some(class);
        self
    }

    /// Sets an attribute, replacing an earlier value of the same name.
    ///
    /// An empty value renders as a bare boolean attribute (`disabled`).
    /// Names that could not be serialized as a single attribute (empty, or
    /// containing whitespace, quotes, `=`, `<`, `>` or `/`) are dropped.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if !is_valid_attr_name(&name) {
            warn!(attr = %name, tag = %self.tag, "dropping invalid attribute name");
            return self;
        }
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Removes an attribute if present.
    pub fn without_attr(mut self, name: &str) -> Self {
        self.attrs.retain(|(n, _)| n != name);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_on_click(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Iterates the class tokens.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.as_deref().unwrap_or("").split_ascii_whitespace()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes().any(|t| t == token)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether a click handler is wired to this element.
    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Natively disabled elements ignore clicks.
    pub fn is_disabled(&self) -> bool {
        self.attr("disabled").is_some()
    }

    /// Dispatches a click. Returns whether a handler ran.
    pub fn click(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler.call();
                true
            }
            None => false,
        }
    }

    pub fn text_content(&self) -> String {
        Node::Fragment(self.children.clone()).text_content()
    }

    /// Depth-first search of this element and its descendants.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| find_in(child, predicate))
    }

    pub fn to_html(&self) -> Result<String, minijinja::Error> {
        super::html::default_renderer().render_element(self)
    }
}

fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/')
        })
}

fn find_in<'e>(node: &'e Node, predicate: &dyn Fn(&Element) -> bool) -> Option<&'e Element> {
    match node {
        Node::Text(_) => None,
        Node::Element(element) => element.find(predicate),
        Node::Fragment(nodes) => nodes.iter().find_map(|n| find_in(n, predicate)),
    }
}

/// A handle that receives the root element of every render it is passed to.
///
/// Clones share the same target, so a caller can keep one clone and hand
/// another to a component.
#[derive(Debug, Clone, Default)]
pub struct ElementRef(Arc<Mutex<Option<Element>>>);

impl ElementRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered element, if any.
    pub fn get(&self) -> Option<Element> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub(crate) fn set(&self, element: &Element) {
        *self
            .0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(element.clone());
    }
}
