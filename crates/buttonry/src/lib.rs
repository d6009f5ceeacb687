//! Themed button and link components for utility-class design systems.
//!
//! Buttonry resolves a small, closed set of options (size, variant, disabled
//! state, icon presence, link vs. action) into a deterministic class list and
//! an element tree that serializes to HTML.
//!
//! # Concepts
//!
//! - [`Button`]: renders as `<a>` when given an `href`, as `<button>`
//!   otherwise, with classes from [`Size`] and [`Variant`]
//! - [`Link`]: the inline text link
//! - [`Slot`]: a prefix, suffix or child, tagged as icon or plain content
//! - [`classes!`]: merges class fragments so later ones win within a utility
//!   group
//! - [`theme`]: the application-wide theme selection
//!
//! # Example
//!
//! ```rust
//! use buttonry::{Button, Element, Size, Variant};
//!
//! let arrow = Element::component("ArrowRightIcon", "svg");
//! let button = Button::new()
//!     .text("continue")
//!     .suffix(arrow)
//!     .variant(Variant::Secondary)
//!     .size(Size::Lg)
//!     .href("/next")
//!     .render();
//!
//! assert_eq!(button.tag(), "a");
//! assert_eq!(button.attr("href"), Some("/next"));
//!
//! let html = button.to_html().unwrap();
//! assert!(html.contains("Continue"));
//! assert!(html.contains(r#"<svg class="icon-md text-button-secondary-icon">"#));
//! ```

pub mod render;
pub mod slot;
pub mod style;
pub mod theme;
mod util;

pub use buttonry_merge::{Fragment, MergeConfig};
pub use render::{
    escape_html, register_filters, Button, ButtonBase, ButtonProps, ClickHandler, Element,
    ElementRef, HtmlRenderer, Link, LinkBase, Node, RenderIntent,
};
pub use slot::{is_icon, Slot, SlotKind};
pub use style::{merge, merge_config, ParseError, Size, Variant};
pub use theme::{ThemeConfig, ThemeController, ThemeError};
pub use util::title_case;
