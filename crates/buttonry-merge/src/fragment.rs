//! Class fragments: possibly-absent pieces of a class list.

use std::borrow::Cow;

/// One piece of a class list handed to a merge.
///
/// Fragments convert from strings and from `Option`s of strings, so
/// conditional classes can be written as `disabled.then_some("opacity-60")`.
/// Absent and blank fragments contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment<'a>(Option<Cow<'a, str>>);

impl<'a> Fragment<'a> {
    /// An empty fragment.
    pub fn none() -> Self {
        Self(None)
    }

    /// Returns the fragment text when it has any non-whitespace content.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref().filter(|s| !s.trim().is_empty())
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(value: &'a str) -> Self {
        Fragment(Some(Cow::Borrowed(value)))
    }
}

impl<'a> From<&'a String> for Fragment<'a> {
    fn from(value: &'a String) -> Self {
        Fragment(Some(Cow::Borrowed(value.as_str())))
    }
}

impl From<String> for Fragment<'static> {
    fn from(value: String) -> Self {
        Fragment(Some(Cow::Owned(value)))
    }
}

impl<'a> From<Cow<'a, str>> for Fragment<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Fragment(Some(value))
    }
}

impl<'a, T> From<Option<T>> for Fragment<'a>
where
    T: Into<Fragment<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fragments_are_absent() {
        assert_eq!(Fragment::from("").as_str(), None);
        assert_eq!(Fragment::from("   ").as_str(), None);
        assert_eq!(Fragment::none().as_str(), None);
        assert_eq!(Fragment::from(None::<&str>).as_str(), None);
    }

    #[test]
    fn test_conditional_fragment() {
        let on = Fragment::from(true.then_some("px-0"));
        let off = Fragment::from(false.then_some("px-0"));
        assert_eq!(on.as_str(), Some("px-0"));
        assert_eq!(off.as_str(), None);
    }

    #[test]
    fn test_owned_fragment() {
        let owned = Fragment::from(String::from("w-9"));
        assert_eq!(owned.as_str(), Some("w-9"));
    }
}
