//! Style resolution for buttons and links.
//!
//! This module provides:
//!
//! - [`Size`] and [`Variant`]: the closed option sets of a control
//! - the resolver functions mapping them to class fragments
//!   ([`size_classes`], [`theme_classes`], [`icon_size_classes`],
//!   [`themed_icon_classes`], [`icon_only_layout_classes`])
//! - [`merge`] and the [`classes!`](crate::classes) macro, which merge
//!   fragments with the library's utility groups
//!
//! Fragments are always combined through the merge, never concatenated:
//! disabled colors and caller overrides rely on the last fragment winning
//! within a utility group.

mod error;
mod resolve;
mod size;
mod variant;

use buttonry_merge::{Fragment, MergeConfig};
use once_cell::sync::Lazy;

pub use error::ParseError;
pub use resolve::{
    icon_classes, icon_only_layout_classes, icon_size_classes, size_classes, theme_classes,
    themed_icon_classes, BASE_CLASSES, CONTENT_CLASSES, DISABLED_CLASSES,
};
pub use size::Size;
pub use variant::Variant;

/// Built-in groups plus the `icon-*` size scale of the design system.
static MERGE_CONFIG: Lazy<MergeConfig> =
    Lazy::new(|| MergeConfig::new().with_group("icon-size", &["icon-"]));

/// Returns the merge rules used by every component in this crate.
pub fn merge_config() -> &'static MergeConfig {
    &MERGE_CONFIG
}

/// Merges class fragments; later fragments win within a utility group.
pub fn merge<'a, I, F>(fragments: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment<'a>>,
{
    MERGE_CONFIG.merge(fragments)
}

/// Merges heterogeneous class fragments with the library's merge rules.
///
/// ```rust
/// let disabled = true;
/// let classes = buttonry::classes!("icon-sm opacity-100", disabled.then_some("opacity-60 icon-md"));
/// assert_eq!(classes, "opacity-60 icon-md");
/// ```
#[macro_export]
macro_rules! classes {
    ($($fragment:expr),* $(,)?) => {
        $crate::style::merge([$($crate::Fragment::from($fragment)),*])
    };
}
