//! Locale identifiers and lookup requests.
//!
//! Locales are plain [`unic_langid::LanguageIdentifier`] values, compared by
//! their language, script, region, and variant subtags. Lookups name the
//! locale they want through [`LocaleRequest`], which makes "use whatever the
//! receiver considers the default" an explicit variant instead of an absent
//! reference.

use std::str::FromStr;

use crate::LocalizableError;

/// Locale identifier used as the key of localized entries.
pub type Locale = unic_langid::LanguageIdentifier;

/// Locale requested by a lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleRequest<'a> {
    /// Resolve for exactly this locale.
    Explicit(&'a Locale),
    /// Resolve for the receiver's notion of the default locale.
    UseDefault,
}

impl<'a> LocaleRequest<'a> {
    /// Returns the explicitly requested locale, if any.
    #[must_use]
    pub const fn explicit(self) -> Option<&'a Locale> {
        match self {
            Self::Explicit(locale) => Some(locale),
            Self::UseDefault => None,
        }
    }

    /// Whether the request defers to the receiver's default locale.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::UseDefault)
    }
}

impl<'a> From<&'a Locale> for LocaleRequest<'a> {
    fn from(locale: &'a Locale) -> Self {
        Self::Explicit(locale)
    }
}

impl<'a> From<Option<&'a Locale>> for LocaleRequest<'a> {
    fn from(locale: Option<&'a Locale>) -> Self {
        locale.map_or(Self::UseDefault, Self::Explicit)
    }
}

/// Parse a BCP 47 style tag such as `en-GB` into a [`Locale`].
///
/// # Errors
///
/// Returns [`LocalizableError::InvalidLocale`] when `tag` is not a valid
/// language identifier.
///
/// ```
/// use localizable::parse_locale;
///
/// let locale = parse_locale("nl-BE").expect("valid tag");
/// assert_eq!(locale.to_string(), "nl-BE");
/// assert!(parse_locale("not a locale").is_err());
/// ```
pub fn parse_locale(tag: &str) -> Result<Locale, LocalizableError> {
    Locale::from_str(tag).map_err(|error| LocalizableError::InvalidLocale {
        tag: tag.to_owned(),
        reason: error.to_string(),
    })
}

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}

/// Strip script, region, and variants, keeping only the language subtag.
#[must_use]
pub fn language_only(locale: &Locale) -> Locale {
    Locale::from_parts(locale.language, None, None, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use unic_langid::langid;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  "), None)]
    #[case(Some("nl"), Some("nl"))]
    #[case(Some(" en-GB "), Some("en-GB"))]
    fn normalises_candidates(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(normalise_locale(input), expected);
    }

    #[rstest]
    #[case("en-GB", "en")]
    #[case("sr-Latn-RS", "sr")]
    #[case("nl", "nl")]
    fn strips_to_language(#[case] tag: &str, #[case] expected: &str) {
        let locale = parse_locale(tag).expect("tag should parse");
        assert_eq!(language_only(&locale).to_string(), expected);
    }

    #[test]
    fn rejects_malformed_tags() {
        let error = parse_locale("en_GB!").expect_err("tag should be rejected");
        assert!(matches!(
            error,
            LocalizableError::InvalidLocale { ref tag, .. } if tag == "en_GB!"
        ));
    }

    #[test]
    fn converts_optional_locales_into_requests() {
        let locale = langid!("en");
        assert_eq!(
            LocaleRequest::from(Some(&locale)),
            LocaleRequest::Explicit(&locale)
        );
        assert!(LocaleRequest::from(None).is_default());
        assert_eq!(LocaleRequest::from(&locale).explicit(), Some(&locale));
    }
}
