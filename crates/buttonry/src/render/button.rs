//! The themed button.
//!
//! A [`Button`] renders as an `<a>` when it has a non-empty `href` and as a
//! `<button>` otherwise. Size, variant and disabled state resolve to a class
//! list through [`crate::style`]; the caller's `class_name` is merged last.
//!
//! # Example
//!
//! ```rust
//! use buttonry::{Button, Size, Variant};
//!
//! let el = Button::new()
//!     .text("save file")
//!     .size(Size::Md)
//!     .variant(Variant::Secondary)
//!     .render();
//!
//! assert_eq!(el.tag(), "button");
//! assert_eq!(el.text_content(), "Save File");
//! assert!(el.has_class("h-10"));
//! ```

use super::base::{ButtonBase, LinkBase};
use super::element::{ClickHandler, Element, ElementRef, Node};
use crate::slot::Slot;
use crate::style::{
    icon_classes, icon_only_layout_classes, size_classes, theme_classes, Size, Variant,
    BASE_CLASSES, CONTENT_CLASSES, DISABLED_CLASSES,
};
use crate::util::title_case;

/// Which element a button renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderIntent {
    /// An anchor, chosen whenever a non-empty `href` is set.
    Navigable,
    /// A `<button type="button">`.
    Actionable,
}

/// Options of a [`Button`].
#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    pub children: Option<Slot>,
    pub size: Size,
    pub variant: Variant,
    pub disabled: bool,
    pub href: Option<String>,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub open_in_new_tab: bool,
    pub prefix: Option<Slot>,
    pub suffix: Option<Slot>,
    pub skip_capitalization: bool,
    pub on_click: Option<ClickHandler>,
    pub test_id: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub class_name: Option<String>,
    pub node_ref: Option<ElementRef>,
}

/// Builder over [`ButtonProps`].
#[derive(Debug, Clone, Default)]
pub struct Button {
    props: ButtonProps,
}

impl Button {
    /// A small primary button with no content.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props(props: ButtonProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Sets text children.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.props.children = Some(Slot::from(text.into()));
        self
    }

    /// Sets the children slot. Elements are classified by their component
    /// name; use [`Slot::icon`] or [`Slot::plain`] to tag explicitly.
    pub fn child(mut self, child: impl Into<Slot>) -> Self {
        self.props.children = Some(child.into());
        self
    }

    /// Height, padding and text size. Defaults to [`Size::Sm`].
    pub fn size(mut self, size: Size) -> Self {
        self.props.size = size;
        self
    }

    /// Color scheme. Defaults to [`Variant::Primary`].
    pub fn variant(mut self, variant: Variant) -> Self {
        self.props.variant = variant;
        self
    }

    /// Disabled buttons drop their handler and hover styles.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Link target. A non-empty value renders the button as an `<a>`.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.props.href = Some(href.into());
        self
    }

    /// `target` of the rendered link; replaced when opening in a new tab.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.props.target = Some(target.into());
        self
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.props.rel = Some(rel.into());
        self
    }

    /// Renders the link with `target="_blank"` and a safe `rel`.
    pub fn open_in_new_tab(mut self, open: bool) -> Self {
        self.props.open_in_new_tab = open;
        self
    }

    /// Content before the children, usually an icon.
    pub fn prefix(mut self, prefix: impl Into<Slot>) -> Self {
        self.props.prefix = Some(prefix.into());
        self
    }

    /// Content after the children.
    pub fn suffix(mut self, suffix: impl Into<Slot>) -> Self {
        self.props.suffix = Some(suffix.into());
        self
    }

    /// Keeps text children as written instead of title-casing them.
    pub fn skip_capitalization(mut self, skip: bool) -> Self {
        self.props.skip_capitalization = skip;
        self
    }

    /// Click handler, attached to either element kind.
    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.props.on_click = Some(ClickHandler::new(handler));
        self
    }

    /// Rendered as `data-testid`.
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.props.test_id = Some(id.into());
        self
    }

    /// A pass-through attribute for the rendered element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attrs.push((name.into(), value.into()));
        self
    }

    /// Classes merged over the resolved ones.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.props.class_name = Some(class.into());
        self
    }

    /// Receives the rendered root element.
    pub fn node_ref(mut self, node_ref: ElementRef) -> Self {
        self.props.node_ref = Some(node_ref);
        self
    }

    /// `Navigable` for any non-empty `href`, whitespace included.
    pub fn intent(&self) -> RenderIntent {
        match self.props.href.as_deref() {
            Some(href) if !href.is_empty() => RenderIntent::Navigable,
            _ => RenderIntent::Actionable,
        }
    }

    /// Whether the button shows nothing but a single icon. Empty text
    /// children count as absent.
    pub fn is_icon_only(&self) -> bool {
        let p = &self.props;
        let present: Vec<&Slot> = [&p.prefix, &p.children, &p.suffix]
            .into_iter()
            .flatten()
            .filter(|slot| !slot.is_empty())
            .collect();
        matches!(present.as_slice(), [slot] if slot.is_icon())
    }

    /// The merged class list of the root element.
    pub fn class_list(&self) -> String {
        let p = &self.props;
        crate::classes!(
            BASE_CLASSES,
            size_classes(p.size),
            theme_classes(p.variant, p.disabled),
            self.is_icon_only()
                .then(|| icon_only_layout_classes(p.size)),
            p.disabled.then_some(DISABLED_CLASSES),
            p.class_name.as_deref(),
        )
    }

    pub fn render(&self) -> Element {
        let p = &self.props;
        let intent = self.intent();
        let icon_class = icon_classes(p.size, p.variant, p.disabled);
        let class = self.class_list();
        let content = self.render_content(intent, &icon_class);

        match intent {
            RenderIntent::Navigable => {
                let mut link = LinkBase::new(p.href.clone().unwrap_or_default())
                    .open_in_new_tab(p.open_in_new_tab)
                    .disabled(p.disabled)
                    .click_handler(p.on_click.clone())
                    .class_name(class)
                    .children(content);
                if let Some(target) = &p.target {
                    link = link.target(target.as_str());
                }
                if let Some(rel) = &p.rel {
                    link = link.rel(rel.as_str());
                }
                self.finish_link(link).render()
            }
            RenderIntent::Actionable => {
                let button = ButtonBase::new()
                    .disabled(p.disabled)
                    .click_handler(p.on_click.clone())
                    .class_name(class)
                    .children(content);
                self.finish_button(button).render()
            }
        }
    }

    fn render_content(&self, intent: RenderIntent, icon_class: &str) -> Vec<Node> {
        let p = &self.props;
        let mut content = Vec::with_capacity(3);

        if let Some(prefix) = &p.prefix {
            content.push(prefix.render(Some(icon_class)));
        }
        if let Some(children) = p.children.as_ref().filter(|slot| !slot.is_empty()) {
            let node = match children.as_text() {
                Some(text) if !p.skip_capitalization => Node::Text(title_case(text)),
                _ => children.render(Some(icon_class)),
            };
            let span = Element::new("span")
                .with_class(crate::classes!(
                    CONTENT_CLASSES,
                    (intent == RenderIntent::Navigable).then_some("select-none"),
                ))
                .with_child(node);
            content.push(span.into());
        }
        if let Some(suffix) = &p.suffix {
            content.push(suffix.render(Some(icon_class)));
        }
        content
    }

    fn finish_link(&self, mut link: LinkBase) -> LinkBase {
        for (name, value) in &self.props.attrs {
            link = link.attr(name.as_str(), value.as_str());
        }
        if let Some(id) = &self.props.test_id {
            link = link.test_id(id.as_str());
        }
        if let Some(node_ref) = &self.props.node_ref {
            link = link.node_ref(node_ref.clone());
        }
        link
    }

    fn finish_button(&self, mut button: ButtonBase) -> ButtonBase {
        for (name, value) in &self.props.attrs {
            button = button.attr(name.as_str(), value.as_str());
        }
        if let Some(id) = &self.props.test_id {
            button = button.test_id(id.as_str());
        }
        if let Some(node_ref) = &self.props.node_ref {
            button = button.node_ref(node_ref.clone());
        }
        button
    }
}

impl From<ButtonProps> for Button {
    fn from(props: ButtonProps) -> Self {
        Self::from_props(props)
    }
}
