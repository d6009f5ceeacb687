//! Rendering of buttons and links to an element tree and to HTML.
//!
//! - [`Button`]: the themed button, rendered as `<a>` or `<button>`
//! - [`Link`]: the inline text link
//! - [`LinkBase`] / [`ButtonBase`]: unstyled elements with the link and
//!   button rules
//! - [`Element`] / [`Node`]: the output tree, serialized by [`HtmlRenderer`]

mod base;
mod button;
mod element;
mod filters;
mod html;
mod link;

pub use base::{ButtonBase, LinkBase};
pub use button::{Button, ButtonProps, RenderIntent};
pub use element::{ClickHandler, Element, ElementRef, Node};
pub use filters::register_filters;
pub use html::{escape_html, HtmlRenderer};
pub use link::Link;
