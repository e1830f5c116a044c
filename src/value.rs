//! The leaf localized value.
//!
//! A [`LocalizedValue`] keeps its own per-locale entries and, optionally, the
//! name of a bundle to consult when an entry is missing. Which bundle store
//! backs that name, and in which order its locales are tried, is decided by
//! the value's [`BundleResolver`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::{BundleResolver, Locale, LocaleRequest, Localizable, LocalizableError};

/// Key given to values that exist only to be wrapped and carry no bundle data.
pub const WRAPPED_KEY: &str = "WRAPPED";

/// Mutable, locale-keyed text value.
///
/// Two values are equal when their key, bundle, and entries are equal. The
/// resolver is a collaborator and takes no part in equality or hashing.
///
/// ```
/// use localizable::{Localizable, LocalizedValue};
/// use unic_langid::langid;
///
/// let mut greeting = LocalizedValue::new("greeting");
/// greeting.set(String::from("hello"), langid!("en")).expect("values are writable");
///
/// assert_eq!(greeting.get((&langid!("en")).into()).as_deref(), Some("hello"));
/// assert!(greeting.get((&langid!("nl")).into()).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct LocalizedValue {
    key: String,
    bundle: Option<String>,
    values: HashMap<Locale, String>,
    resolver: BundleResolver,
}

impl LocalizedValue {
    /// Create an empty value identified by `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            bundle: None,
            values: HashMap::new(),
            resolver: BundleResolver::default(),
        }
    }

    /// Create the empty placeholder substituted for a missing wrapped value.
    #[must_use]
    pub fn wrapped() -> Self {
        Self::new(WRAPPED_KEY)
    }

    /// Builder form of [`Localizable::set`].
    #[must_use]
    pub fn with(mut self, value: impl Into<String>, locale: Locale) -> Self {
        self.values.insert(locale, value.into());
        self
    }

    /// Builder form of [`Localizable::set_bundle`].
    #[must_use]
    pub fn with_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = Some(bundle.into());
        self
    }

    /// Builder form of [`Self::set_resolver`].
    #[must_use]
    pub fn with_resolver(mut self, resolver: BundleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The resolver consulted on direct misses.
    #[must_use]
    pub const fn resolver(&self) -> &BundleResolver {
        &self.resolver
    }

    /// Replace the resolver, returning the previous one.
    pub const fn set_resolver(&mut self, resolver: BundleResolver) -> BundleResolver {
        std::mem::replace(&mut self.resolver, resolver)
    }

    /// Whether the value holds no direct entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Localizable for LocalizedValue {
    fn get(&self, locale: LocaleRequest<'_>) -> Option<Cow<'_, str>> {
        let requested = locale.explicit().or_else(|| self.resolver.ambient_locale());

        if let Some(direct) = requested.and_then(|target| self.values.get(target)) {
            return Some(Cow::Borrowed(direct.as_str()));
        }

        let bundle = self.bundle.as_deref()?;
        self.resolver
            .resolve(bundle, requested, &self.key)
            .map(Cow::Owned)
    }

    fn set(&mut self, value: String, locale: Locale) -> Result<(), LocalizableError> {
        self.values.insert(locale, value);
        Ok(())
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: String) -> Result<(), LocalizableError> {
        self.key = key;
        Ok(())
    }

    fn bundle(&self) -> Option<&str> {
        self.bundle.as_deref()
    }

    fn set_bundle(&mut self, bundle: Option<String>) -> Result<(), LocalizableError> {
        self.bundle = bundle;
        Ok(())
    }

    fn as_map(&self) -> &HashMap<Locale, String> {
        &self.values
    }

    fn clone_value(&self) -> LocalizedValue {
        self.clone()
    }

    fn innermost(&self) -> &LocalizedValue {
        self
    }
}

impl<R: Localizable + ?Sized> PartialEq<R> for LocalizedValue {
    fn eq(&self, other: &R) -> bool {
        let rhs = other.innermost();
        self.key == rhs.key && self.bundle == rhs.bundle && self.values == rhs.values
    }
}

impl Eq for LocalizedValue {}

impl Hash for LocalizedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.bundle.hash(state);

        let mut entries: Vec<(String, &str)> = self
            .values
            .iter()
            .map(|(locale, text)| (locale.to_string(), text.as_str()))
            .collect();
        entries.sort_unstable();
        entries.hash(state);
    }
}
