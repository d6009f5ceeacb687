//! The inline text link.

use super::base::LinkBase;
use super::element::{Element, ElementRef, Node};

const LINK_CLASSES: &str = "text-link transition-opacity";
const LINK_HOVER_CLASSES: &str = "hocus:opacity-80";

/// A styled [`LinkBase`]. Disabled links keep their content but lose the
/// hover feedback along with the href.
///
/// ```rust
/// use buttonry::Link;
///
/// let el = Link::new("/docs").text("Docs").class_name("underline").render();
/// assert_eq!(el.class(), Some("text-link transition-opacity hocus:opacity-80 underline"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Link {
    base: LinkBase,
    disabled: bool,
    class_name: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            base: LinkBase::new(href),
            ..Self::default()
        }
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.base = self.base.child(child);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.base = self.base.target(target);
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.base = self.base.rel(rel);
        self
    }

    pub fn open_in_new_tab(mut self, open: bool) -> Self {
        self.base = self.base.open_in_new_tab(open);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.base = self.base.disabled(disabled);
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.base = self.base.on_click(handler);
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.base = self.base.test_id(id);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.base = self.base.attr(name, value);
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn node_ref(mut self, node_ref: ElementRef) -> Self {
        self.base = self.base.node_ref(node_ref);
        self
    }

    pub fn class_list(&self) -> String {
        crate::classes!(
            LINK_CLASSES,
            (!self.disabled).then_some(LINK_HOVER_CLASSES),
            self.class_name.as_deref(),
        )
    }

    pub fn render(&self) -> Element {
        self.base.clone().class_name(self.class_list()).render()
    }
}
