//! Merge configuration and the merge algorithm itself.

use std::collections::HashSet;

use crate::fragment::Fragment;
use crate::groups::{builtin_group, conflicting_groups};
use crate::token::Token;

/// A caller-registered utility group, matched by prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CustomGroup {
    id: String,
    prefixes: Vec<String>,
}

/// Rules used to decide which class tokens conflict.
///
/// The built-in table covers the Tailwind utility families; design systems
/// with their own utilities (icon sizes, for instance) register extra groups
/// with [`MergeConfig::with_group`]. Custom groups are checked before the
/// built-in table.
///
/// # Example
///
/// ```rust
/// use buttonry_merge::MergeConfig;
///
/// let config = MergeConfig::new().with_group("icon-size", &["icon-"]);
/// assert_eq!(config.merge(["icon-sm text-red", "icon-lg"]), "text-red icon-lg");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MergeConfig {
    custom: Vec<CustomGroup>,
}

impl MergeConfig {
    /// Creates a configuration with only the built-in groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom group. A utility belongs to it when it equals one
    /// of `prefixes` or starts with one of them.
    pub fn with_group(mut self, id: &str, prefixes: &[&str]) -> Self {
        self.custom.push(CustomGroup {
            id: id.to_string(),
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    /// Returns the group of a bare utility, if any.
    pub fn group_of<'c>(&'c self, utility: &str) -> Option<&'c str> {
        self.custom
            .iter()
            .find(|group| {
                group
                    .prefixes
                    .iter()
                    .any(|prefix| utility.starts_with(prefix.as_str()))
            })
            .map(|group| group.id.as_str())
            .or_else(|| builtin_group(utility))
    }

    /// Merges fragments into one class string.
    ///
    /// Empty and absent fragments are dropped. When two tokens share a
    /// utility group under the same modifiers, the later one wins; a token
    /// also removes earlier tokens of the groups it overrides (`p-0` removes
    /// an earlier `px-4`). Tokens without a group are kept, with exact
    /// duplicates collapsed onto their last occurrence.
    pub fn merge<'a, I, F>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment<'a>>,
    {
        let fragments: Vec<Fragment<'a>> = fragments.into_iter().map(Into::into).collect();
        let tokens: Vec<&str> = fragments
            .iter()
            .filter_map(Fragment::as_str)
            .flat_map(str::split_ascii_whitespace)
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for &raw in tokens.iter().rev() {
            let token = Token::parse(raw);
            match self.group_of(token.utility) {
                Some(group) => {
                    let modifiers = token.modifier_key();
                    if !seen.insert(conflict_key(&modifiers, group)) {
                        continue;
                    }
                    for other in conflicting_groups(group) {
                        seen.insert(conflict_key(&modifiers, other));
                    }
                }
                None => {
                    if !seen.insert(format!("raw|{}", raw)) {
                        continue;
                    }
                }
            }
            kept.push(raw);
        }

        kept.reverse();
        kept.join(" ")
    }
}

fn conflict_key(modifiers: &str, group: &str) -> String {
    format!("{}|{}", modifiers, group)
}
