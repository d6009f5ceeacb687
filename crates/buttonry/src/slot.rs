//! Icon classification for prefix, suffix and child slots.
//!
//! Components tag their slots explicitly with [`Slot::icon`] or
//! [`Slot::plain`]. For nodes coming from elsewhere, [`Slot::classify`] falls
//! back to the naming convention checked by [`is_icon`]: an element whose
//! component display name ends in `Icon` is an icon.

use crate::render::{Element, Node};

const ICON_SUFFIX: &str = "Icon";

/// Whether `node` is an element produced by an icon component.
///
/// Text, fragments, unnamed elements and absent nodes are not icons.
pub fn is_icon(node: Option<&Node>) -> bool {
    node.and_then(Node::as_element)
        .and_then(Element::display_name)
        .is_some_and(|name| name.ends_with(ICON_SUFFIX))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Icon,
    Plain,
}

/// A child placed in a control, tagged with its kind.
#[derive(Debug, Clone)]
pub enum Slot {
    /// An icon element; receives the control's icon size and tint classes.
    Icon(Element),
    /// Anything else, rendered unchanged (text children may be title-cased).
    Plain(Node),
}

impl Slot {
    pub fn icon(element: Element) -> Self {
        Slot::Icon(element)
    }

    pub fn plain(node: impl Into<Node>) -> Self {
        Slot::Plain(node.into())
    }

    /// Tags a node by the icon naming convention. Classification happens
    /// once, here; the result is stored in the slot.
    pub fn classify(node: impl Into<Node>) -> Self {
        let node = node.into();
        if !is_icon(Some(&node)) {
            return Slot::Plain(node);
        }
        match node {
            Node::Element(element) => Slot::Icon(element),
            other => Slot::Plain(other),
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Slot::Icon(_) => SlotKind::Icon,
            Slot::Plain(_) => SlotKind::Plain,
        }
    }

    pub fn is_icon(&self) -> bool {
        self.kind() == SlotKind::Icon
    }

    /// Literal text content, when the slot is plain text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Slot::Plain(Node::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// An empty text slot, which counts as no content.
    pub fn is_empty(&self) -> bool {
        self.as_text().is_some_and(str::is_empty)
    }

    /// Renders the slot. Icons get `icon_classes` first with their own
    /// class merged over it.
    pub(crate) fn render(&self, icon_classes: Option<&str>) -> Node {
        match self {
            Slot::Icon(element) => {
                let class = crate::classes!(icon_classes, element.class());
                Node::Element(element.clone().with_class(class))
            }
            Slot::Plain(node) => node.clone(),
        }
    }
}

impl From<&str> for Slot {
    fn from(text: &str) -> Self {
        Slot::Plain(Node::text(text))
    }
}

impl From<String> for Slot {
    fn from(text: String) -> Self {
        Slot::Plain(Node::Text(text))
    }
}

impl From<Element> for Slot {
    fn from(element: Element) -> Self {
        Slot::classify(element)
    }
}

impl From<Node> for Slot {
    fn from(node: Node) -> Self {
        Slot::classify(node)
    }
}
