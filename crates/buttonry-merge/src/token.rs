//! Splitting a class token into variant modifiers and the base utility.

/// A single class token broken into its parts.
///
/// `hover:focus:!bg-red-500` parses to modifiers `["hover", "focus"]`,
/// `important = true` and utility `bg-red-500`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token exactly as written.
    pub raw: &'a str,
    /// Variant modifiers in written order (`hover`, `md`, `dark`, ...).
    pub modifiers: Vec<&'a str>,
    /// Whether the utility carries the `!` important marker.
    pub important: bool,
    /// The utility with modifiers, the important marker and a leading
    /// negative sign removed.
    pub utility: &'a str,
}

impl<'a> Token<'a> {
    /// Parses a whitespace-free token.
    ///
    /// Colons inside arbitrary values (`bg-[url(https://x)]`) do not split
    /// modifiers.
    pub fn parse(raw: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;

        for (i, c) in raw.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&raw[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        let mut utility = &raw[start..];
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        } else if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }
        if let Some(rest) = utility.strip_prefix('-') {
            utility = rest;
        }

        Self {
            raw,
            modifiers,
            important,
            utility,
        }
    }

    /// Returns the modifier part of the conflict key.
    ///
    /// Modifier order does not matter for conflicts: `hover:focus:x` and
    /// `focus:hover:x` target the same state.
    pub fn modifier_key(&self) -> String {
        let mut sorted = self.modifiers.clone();
        sorted.sort_unstable();
        let mut key = sorted.join(":");
        if self.important {
            key.push('!');
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_utility() {
        let token = Token::parse("bg-red-500");
        assert!(token.modifiers.is_empty());
        assert!(!token.important);
        assert_eq!(token.utility, "bg-red-500");
    }

    #[test]
    fn test_parse_modifiers() {
        let token = Token::parse("hocus:active:scale-98");
        assert_eq!(token.modifiers, vec!["hocus", "active"]);
        assert_eq!(token.utility, "scale-98");
    }

    #[test]
    fn test_parse_important_both_positions() {
        assert!(Token::parse("!px-0").important);
        assert!(Token::parse("px-0!").important);
        assert_eq!(Token::parse("md:!px-0").utility, "px-0");
    }

    #[test]
    fn test_parse_negative_value() {
        assert_eq!(Token::parse("-mt-2").utility, "mt-2");
    }

    #[test]
    fn test_parse_arbitrary_value_keeps_colons() {
        let token = Token::parse("hover:bg-[url(https://x.test/a.png)]");
        assert_eq!(token.modifiers, vec!["hover"]);
        assert_eq!(token.utility, "bg-[url(https://x.test/a.png)]");
    }

    #[test]
    fn test_modifier_key_is_order_independent() {
        let a = Token::parse("hover:focus:bg-x");
        let b = Token::parse("focus:hover:bg-x");
        assert_eq!(a.modifier_key(), b.modifier_key());
        assert_ne!(a.modifier_key(), Token::parse("hover:bg-x").modifier_key());
    }
}
