use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Control size: drives height, horizontal padding, text scale and the
/// square footprint of icon-only controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 6] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl, Size::Xxl];

    /// Names accepted by [`FromStr`], in the same order as [`Size::ALL`].
    pub const NAMES: [&'static str; 6] = ["xs", "sm", "md", "lg", "xl", "2xl"];

    /// The option name, as used in configuration and templates.
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
            Size::Xxl => "2xl",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSize { name: s.to_string() })
    }
}
