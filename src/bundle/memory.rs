use std::collections::HashMap;

use super::BundleSource;
use crate::Locale;

type Entries = HashMap<String, String>;

/// In-memory bundle store keyed by bundle name, locale, and key.
///
/// Entries stored under a `None` locale form the bundle-wide default.
#[derive(Clone, Debug, Default)]
pub struct MemoryBundles {
    bundles: HashMap<String, HashMap<Option<Locale>, Entries>>,
}

impl MemoryBundles {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` for `key`, returning the entry it replaced.
    pub fn insert(
        &mut self,
        bundle: impl Into<String>,
        locale: Option<Locale>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.bundles
            .entry(bundle.into())
            .or_default()
            .entry(locale)
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn with_entry(
        mut self,
        bundle: impl Into<String>,
        locale: Option<Locale>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(bundle, locale, key, value);
        self
    }

    /// Whether `bundle` has any entries at all.
    #[must_use]
    pub fn contains_bundle(&self, bundle: &str) -> bool {
        self.bundles.contains_key(bundle)
    }
}

impl BundleSource for MemoryBundles {
    fn lookup(&self, bundle: &str, locale: Option<&Locale>, key: &str) -> Option<String> {
        self.bundles
            .get(bundle)?
            .get(&locale.cloned())?
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unic_langid::langid;

    #[test]
    fn lookups_are_exact() {
        let bundles = MemoryBundles::new()
            .with_entry("app", Some(langid!("en-GB")), "title", "Colour")
            .with_entry("app", None, "title", "Title");

        assert_eq!(
            bundles
                .lookup("app", Some(&langid!("en-GB")), "title")
                .as_deref(),
            Some("Colour")
        );
        assert!(bundles.lookup("app", Some(&langid!("en")), "title").is_none());
        assert_eq!(
            bundles.lookup("app", None, "title").as_deref(),
            Some("Title")
        );
        assert!(bundles.lookup("other", None, "title").is_none());
    }

    #[test]
    fn insert_reports_the_replaced_entry() {
        let mut bundles = MemoryBundles::new();

        assert!(bundles.insert("app", None, "title", "First").is_none());
        assert_eq!(
            bundles.insert("app", None, "title", "Second").as_deref(),
            Some("First")
        );
        assert!(bundles.contains_bundle("app"));
        assert!(!bundles.contains_bundle("other"));
    }
}
