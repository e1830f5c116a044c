//! Resolver configuration loaded from TOML.
//!
//! Applications keep the ambient locale and the bundle fallback order in a
//! small TOML document:
//!
//! ```toml
//! ambient_locale = "en-GB"
//! fallback = ["exact", "language", "bundle-default"]
//! ```
//!
//! Both keys are optional. Omitting `fallback` keeps the default order;
//! blank `ambient_locale` values are treated as absent so templated files can
//! leave the key empty.

use std::sync::Arc;

use serde::Deserialize;

use crate::{
    BundleResolver, BundleSource, FallbackOrder, FallbackStep, Locale, LocalizableError,
    normalise_locale, parse_locale,
};

/// Settings used to build a [`BundleResolver`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ResolutionConfig {
    /// Locale answering default lookups on undecorated values.
    pub ambient_locale: Option<String>,
    /// Fallback steps in evaluation order.
    pub fallback: Option<Vec<FallbackStep>>,
}

impl ResolutionConfig {
    /// Parse configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizableError::Config`] when the document is not valid
    /// TOML or names unknown keys or fallback steps.
    ///
    /// ```
    /// use localizable::{FallbackStep, ResolutionConfig};
    ///
    /// let config = ResolutionConfig::from_toml_str("fallback = [\"bundle-default\"]\n")
    ///     .expect("configuration should parse");
    /// assert_eq!(
    ///     config.fallback_order().expect("steps are distinct").steps(),
    ///     [FallbackStep::BundleDefault]
    /// );
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, LocalizableError> {
        toml::from_str(source).map_err(|error| LocalizableError::Config {
            reason: error.to_string(),
        })
    }

    /// The configured ambient locale tag, ignoring blank values.
    #[must_use]
    pub fn ambient_locale(&self) -> Option<&str> {
        normalise_locale(self.ambient_locale.as_deref())
    }

    /// Parse the ambient locale.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizableError::InvalidLocale`] for an unparsable tag.
    pub fn parsed_ambient_locale(&self) -> Result<Option<Locale>, LocalizableError> {
        self.ambient_locale().map(parse_locale).transpose()
    }

    /// The configured fallback order, or the default when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizableError::DuplicateFallbackStep`] when a step repeats.
    pub fn fallback_order(&self) -> Result<FallbackOrder, LocalizableError> {
        self.fallback
            .as_ref()
            .map_or_else(|| Ok(FallbackOrder::default()), |steps| {
                FallbackOrder::new(steps.iter().copied())
            })
    }

    /// Build a resolver over `source` using these settings.
    ///
    /// # Errors
    ///
    /// Surfaces the errors of [`Self::fallback_order`] and
    /// [`Self::parsed_ambient_locale`].
    pub fn build_resolver(
        &self,
        source: Arc<dyn BundleSource>,
    ) -> Result<BundleResolver, LocalizableError> {
        Ok(BundleResolver::new(source)
            .with_order(self.fallback_order()?)
            .with_ambient_locale(self.parsed_ambient_locale()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryBundles, NoBundles};
    use rstest::rstest;
    use unic_langid::langid;

    #[rstest]
    fn defaults_keep_the_standard_order() {
        let config = ResolutionConfig::default();

        assert!(config.ambient_locale().is_none());
        assert_eq!(
            config.fallback_order().expect("default order is valid"),
            FallbackOrder::default()
        );
    }

    #[rstest]
    fn deserialises_overrides_from_toml() {
        let source = concat!(
            "ambient_locale = \"nl\"\n",
            "fallback = [\"language\", \"exact\"]\n",
        );

        let config =
            ResolutionConfig::from_toml_str(source).expect("configuration should parse");

        assert_eq!(config.ambient_locale(), Some("nl"));
        assert_eq!(
            config.fallback_order().expect("steps are distinct").steps(),
            [FallbackStep::Language, FallbackStep::Exact]
        );
    }

    #[rstest]
    #[case("ambient_locale = \"  \"\n")]
    #[case("ambient_locale = \"\"\n")]
    fn treats_blank_locales_as_absent(#[case] source: &str) {
        let config =
            ResolutionConfig::from_toml_str(source).expect("configuration should parse");

        assert!(config.ambient_locale().is_none());
        assert_eq!(config.parsed_ambient_locale(), Ok(None));
    }

    #[rstest]
    #[case("unexpected = true\n")]
    #[case("fallback = [\"sideways\"]\n")]
    #[case("fallback = \"exact\"\n")]
    fn rejects_malformed_documents(#[case] source: &str) {
        let outcome = ResolutionConfig::from_toml_str(source);

        assert!(matches!(outcome, Err(LocalizableError::Config { .. })));
    }

    #[rstest]
    fn surfaces_invalid_settings_when_building() {
        let duplicate =
            ResolutionConfig::from_toml_str("fallback = [\"exact\", \"exact\"]\n")
                .expect("configuration should parse");
        let invalid_locale = ResolutionConfig::from_toml_str("ambient_locale = \"??\"\n")
            .expect("configuration should parse");

        assert!(matches!(
            duplicate.build_resolver(Arc::new(NoBundles)),
            Err(LocalizableError::DuplicateFallbackStep { .. })
        ));
        assert!(matches!(
            invalid_locale.build_resolver(Arc::new(NoBundles)),
            Err(LocalizableError::InvalidLocale { .. })
        ));
    }

    #[rstest]
    fn builds_a_resolver_with_the_configured_policy() {
        let config = ResolutionConfig::from_toml_str(concat!(
            "ambient_locale = \"de\"\n",
            "fallback = [\"bundle-default\"]\n",
        ))
        .expect("configuration should parse");
        let bundles = MemoryBundles::new()
            .with_entry("app", Some(langid!("de")), "title", "Titel")
            .with_entry("app", None, "title", "Title");

        let resolver = config
            .build_resolver(Arc::new(bundles))
            .expect("settings are valid");

        assert_eq!(resolver.ambient_locale(), Some(&langid!("de")));
        assert_eq!(
            resolver.resolve("app", Some(&langid!("de")), "title").as_deref(),
            Some("Title")
        );
    }
}
