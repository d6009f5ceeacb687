//! Text helpers.

/// Upper-cases the first letter of every whitespace-separated word.
///
/// The rest of each word is left as written, so acronyms and mixed-case
/// product names survive.
///
/// # Example
///
/// ```rust
/// use buttonry::title_case;
///
/// assert_eq!(title_case("save file"), "Save File");
/// assert_eq!(title_case("open in GitHub"), "Open In GitHub");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("save file"), "Save File");
        assert_eq!(title_case("primary"), "Primary");
    }

    #[test]
    fn test_title_case_preserves_spacing() {
        assert_eq!(title_case("  two  spaces "), "  Two  Spaces ");
    }

    #[test]
    fn test_title_case_keeps_inner_case() {
        assert_eq!(title_case("iOS app"), "IOS App");
        assert_eq!(title_case("already Titled"), "Already Titled");
    }

    #[test]
    fn test_title_case_unicode() {
        assert_eq!(title_case("élan vital"), "Élan Vital");
        assert_eq!(title_case("straße"), "Straße");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
