use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Visual style of a control: border, background and text color tokens for
/// the enabled and disabled states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
    Danger,
    DangerOutline,
    Success,
}

impl Variant {
    /// Every variant, in the order of the style tables.
    pub const ALL: [Variant; 7] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Tertiary,
        Variant::Quaternary,
        Variant::Danger,
        Variant::DangerOutline,
        Variant::Success,
    ];

    /// Kebab-case names accepted by [`FromStr`].
    pub const NAMES: [&'static str; 7] = [
        "primary",
        "secondary",
        "tertiary",
        "quaternary",
        "danger",
        "danger-outline",
        "success",
    ];

    /// The kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Tertiary => "tertiary",
            Variant::Quaternary => "quaternary",
            Variant::Danger => "danger",
            Variant::DangerOutline => "danger-outline",
            Variant::Success => "success",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| ParseError::UnknownVariant { name: s.to_string() })
    }
}
