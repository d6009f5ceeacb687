//! Errors for parsing style options from strings.

/// Error returned when a size or variant name is not a member of its
/// closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The name is not one of `xs`, `sm`, `md`, `lg`, `xl`, `2xl`.
    UnknownSize { name: String },
    /// The name is not one of the button variants.
    UnknownVariant { name: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownSize { name } => {
                write!(
                    f,
                    "unknown button size '{}' (expected one of: {})",
                    name,
                    crate::style::Size::NAMES.join(", ")
                )
            }
            ParseError::UnknownVariant { name } => {
                write!(
                    f,
                    "unknown button variant '{}' (expected one of: {})",
                    name,
                    crate::style::Variant::NAMES.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_size_display() {
        let err = ParseError::UnknownSize {
            name: "huge".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("huge"));
        assert!(msg.contains("2xl"));
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = ParseError::UnknownVariant {
            name: "warning".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("warning"));
        assert!(msg.contains("danger-outline"));
    }
}
