//! Unstyled navigable and actionable elements.
//!
//! [`LinkBase`] renders an `<a>` and owns the link rules (disabled links,
//! in-page anchors, new-tab targets). [`ButtonBase`] renders a
//! `<button type="button">`. Both apply caller attributes first and their
//! own attributes after, so the controlled attributes cannot be overridden.

use super::element::{ClickHandler, Element, ElementRef, Node};

const NEW_TAB_TARGET: &str = "_blank";
const NEW_TAB_REL: &str = "noopener noreferrer";

/// An anchor element with link semantics.
#[derive(Debug, Clone, Default)]
pub struct LinkBase {
    href: Option<String>,
    target: Option<String>,
    rel: Option<String>,
    open_in_new_tab: bool,
    disabled: bool,
    on_click: Option<ClickHandler>,
    test_id: Option<String>,
    attrs: Vec<(String, String)>,
    class_name: Option<String>,
    children: Vec<Node>,
    node_ref: Option<ElementRef>,
}

impl LinkBase {
    /// A link to `href`. An empty `href` renders an anchor without one.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Ignored for in-page links and when opening in a new tab.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Opens the link in a new tab with `noopener noreferrer`, replacing any
    /// target and rel given by the caller.
    pub fn open_in_new_tab(mut self, open: bool) -> Self {
        self.open_in_new_tab = open;
        self
    }

    /// Disabled links keep their content but lose href, target and handler.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(handler));
        self
    }

    pub(crate) fn click_handler(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }

    /// Rendered as `data-testid`.
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// A pass-through attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Receives the rendered `<a>`.
    pub fn node_ref(mut self, node_ref: ElementRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn render(&self) -> Element {
        let mut element = pass_through(Element::new("a"), &self.attrs, self.test_id.as_deref());
        if let Some(class) = &self.class_name {
            element = element.with_class(class.as_str());
        }

        let href = self.href.as_deref().unwrap_or("");
        if self.disabled {
            element = element
                .without_attr("href")
                .with_attr("aria-disabled", "true");
        } else if href.is_empty() || href.starts_with('#') {
            // Same-page links: no new-tab rewriting, and no href when empty.
            element = match href {
                "" => element.without_attr("href"),
                anchor => element.with_attr("href", anchor),
            }
            .with_on_click(self.on_click.clone());
        } else {
            element = element
                .with_attr("href", href)
                .with_on_click(self.on_click.clone());
            if self.open_in_new_tab {
                element = element
                    .with_attr("target", NEW_TAB_TARGET)
                    .with_attr("rel", NEW_TAB_REL);
            } else {
                if let Some(target) = &self.target {
                    element = element.with_attr("target", target.as_str());
                }
                if let Some(rel) = &self.rel {
                    element = element.with_attr("rel", rel.as_str());
                }
            }
        }

        let element = element.with_children(self.children.iter().cloned());
        if let Some(node_ref) = &self.node_ref {
            node_ref.set(&element);
        }
        element
    }
}

/// A `<button type="button">` with native disabling.
#[derive(Debug, Clone, Default)]
pub struct ButtonBase {
    disabled: bool,
    on_click: Option<ClickHandler>,
    test_id: Option<String>,
    attrs: Vec<(String, String)>,
    class_name: Option<String>,
    children: Vec<Node>,
    node_ref: Option<ElementRef>,
}

impl ButtonBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the native `disabled` attribute.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(handler));
        self
    }

    pub(crate) fn click_handler(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }

    /// Rendered as `data-testid`.
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// A pass-through attribute; `type` is always replaced.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends children after any added with [`ButtonBase::child`].
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn node_ref(mut self, node_ref: ElementRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn render(&self) -> Element {
        let mut element =
            pass_through(Element::new("button"), &self.attrs, self.test_id.as_deref())
                .with_attr("type", "button")
                .with_on_click(self.on_click.clone());
        if let Some(class) = &self.class_name {
            element = element.with_class(class.as_str());
        }
        if self.disabled {
            element = element.with_attr("disabled", "");
        }

        let element = element.with_children(self.children.iter().cloned());
        if let Some(node_ref) = &self.node_ref {
            node_ref.set(&element);
        }
        element
    }
}

fn pass_through(mut element: Element, attrs: &[(String, String)], test_id: Option<&str>) -> Element {
    for (name, value) in attrs {
        element = element.with_attr(name.as_str(), value.as_str());
    }
    if let Some(id) = test_id {
        element = element.with_attr("data-testid", id);
    }
    element
}
