//! Lookup policy for resolving source values against mappings.

use std::borrow::Cow;

/// How source values are compared to mapping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchingMode {
    /// Byte-for-byte, case-sensitive comparison.
    #[default]
    Exact,
    /// Ignore surrounding whitespace and letter case.
    Lenient,
}

impl MatchingMode {
    /// Key under which `raw` is stored and looked up.
    pub fn key<'a>(self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Exact => Cow::Borrowed(raw),
            Self::Lenient => Cow::Owned(raw.trim().to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_key_is_untouched() {
        assert_eq!(MatchingMode::Exact.key(" John@Mail.com "), " John@Mail.com ");
    }

    #[test]
    fn lenient_key_trims_and_folds_case() {
        assert_eq!(MatchingMode::Lenient.key(" John@Mail.com "), "john@mail.com");
    }
}
