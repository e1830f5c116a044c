//! Bundle source backed by a `fluent-templates` loader.
//!
//! Bundle names become message id prefixes: key `greeting` in bundle `app`
//! is looked up as the Fluent message `app-greeting`. Loading, parsing, and
//! formatting stay entirely inside `fluent-templates`.

use std::fmt;

use fluent_templates::Loader;

use super::BundleSource;
use crate::Locale;

/// [`BundleSource`] reading messages from a Fluent loader.
///
/// Locale-specific lookups only consult languages the loader lists, so an
/// unknown locale moves on to the next fallback step instead of silently
/// picking up the loader's own fallback. Once a listed language is chosen,
/// missing messages may still be filled in by the loader's fallback language.
pub struct FluentBundles<L: 'static> {
    loader: &'static L,
    fallback: Locale,
}

impl<L: Loader + Sync + 'static> FluentBundles<L> {
    /// Wrap `loader`, using `fallback` for bundle-wide default lookups.
    #[must_use]
    pub const fn new(loader: &'static L, fallback: Locale) -> Self {
        Self { loader, fallback }
    }

    /// The language used for bundle-wide default lookups.
    #[must_use]
    pub const fn fallback(&self) -> &Locale {
        &self.fallback
    }

    fn lists(&self, locale: &Locale) -> bool {
        self.loader.locales().any(|candidate| candidate == locale)
    }
}

impl<L: Loader + Sync + 'static> BundleSource for FluentBundles<L> {
    fn lookup(&self, bundle: &str, locale: Option<&Locale>, key: &str) -> Option<String> {
        let language = match locale {
            Some(requested) if self.lists(requested) => requested,
            Some(_) => return None,
            None => &self.fallback,
        };

        self.loader
            .try_lookup(language, format!("{bundle}-{key}").as_str())
    }
}

impl<L: 'static> fmt::Debug for FluentBundles<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FluentBundles")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}
