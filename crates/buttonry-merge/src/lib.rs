//! Utility-class merging with last-write-wins conflict resolution.
//!
//! Utility-first CSS builds an element's look from many small classes. When
//! class lists are composed from several sources (component defaults, state
//! overrides, caller overrides), later sources must be able to replace
//! earlier ones. Plain concatenation does not do this: `bg-blue bg-red`
//! leaves the outcome to stylesheet order.
//!
//! This crate models the merge as a small rule engine:
//!
//! - every token maps to a **utility group** (`bg-*` colors, `px-*` padding,
//!   `text-{xs..9xl}` font sizes, ...)
//! - for tokens in the same group, under the same variant modifiers, the
//!   last one wins
//! - some groups override others (`p-*` knocks out `px-*` and `pt-*`)
//! - tokens with no known group are kept untouched
//!
//! # Example
//!
//! ```rust
//! use buttonry_merge::{merge, merge_classes};
//!
//! assert_eq!(merge(["px-4 py-2 bg-blue", "bg-red"]), "px-4 py-2 bg-red");
//!
//! let disabled = true;
//! let classes = merge_classes!(
//!     "bg-button-primary hocus:bg-button-primary-hover",
//!     disabled.then_some("bg-button-primary-disabled"),
//! );
//! assert_eq!(classes, "hocus:bg-button-primary-hover bg-button-primary-disabled");
//! ```

use once_cell::sync::Lazy;

mod config;
mod fragment;
mod groups;
mod token;

pub use config::MergeConfig;
pub use fragment::Fragment;
pub use groups::{builtin_group, conflicting_groups};
pub use token::Token;

static DEFAULT_CONFIG: Lazy<MergeConfig> = Lazy::new(MergeConfig::new);

/// Merges fragments with the built-in group table.
///
/// See [`MergeConfig::merge`] for the rules.
pub fn merge<'a, I, F>(fragments: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment<'a>>,
{
    DEFAULT_CONFIG.merge(fragments)
}

/// Merges heterogeneous fragments with the built-in group table.
///
/// Each argument may be a `&str`, `String`, `&String` or an `Option` of any
/// of those.
#[macro_export]
macro_rules! merge_classes {
    ($($fragment:expr),* $(,)?) => {
        $crate::merge([$($crate::Fragment::from($fragment)),*])
    };
}
