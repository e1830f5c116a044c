//! The capability shared by localized values and the views that wrap them.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Locale, LocaleRequest, LocalizableError, LocalizedValue};

/// Owned, type-erased chain of values and views.
pub type BoxedLocalizable = Box<dyn Localizable>;

/// Locale-keyed text with bundle fallback.
///
/// Implemented by [`LocalizedValue`] and, through [`crate::Decorator`], by
/// every view wrapping one. Callers can hold any chain behind this trait
/// without knowing how it is composed.
pub trait Localizable: fmt::Debug {
    /// Resolve the text for `locale`.
    ///
    /// Direct entries win; otherwise the value's bundle is consulted. `None`
    /// is an ordinary outcome, not a failure.
    fn get(&self, locale: LocaleRequest<'_>) -> Option<Cow<'_, str>>;

    /// Insert or overwrite the entry for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizableError::UnsupportedOperation`] when the value is viewed
    /// read-only.
    fn set(&mut self, value: String, locale: Locale) -> Result<(), LocalizableError>;

    /// The value's key.
    fn key(&self) -> &str;

    /// Replace the value's key.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizableError::UnsupportedOperation`] when the value is viewed
    /// read-only.
    fn set_key(&mut self, key: String) -> Result<(), LocalizableError>;

    /// The bundle consulted on a direct miss, if any.
    fn bundle(&self) -> Option<&str>;

    /// Replace the fallback bundle.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizableError::UnsupportedOperation`] when the value is viewed
    /// read-only.
    fn set_bundle(&mut self, bundle: Option<String>) -> Result<(), LocalizableError>;

    /// All direct entries.
    fn as_map(&self) -> &HashMap<Locale, String>;

    /// Writable copy of the innermost value, without any wrapping views.
    fn clone_value(&self) -> LocalizedValue;

    /// The innermost value, used for equality and hashing.
    fn innermost(&self) -> &LocalizedValue;

    /// Whether mutators on this chain are rejected.
    fn is_read_only(&self) -> bool {
        false
    }
}

impl From<LocalizedValue> for BoxedLocalizable {
    fn from(value: LocalizedValue) -> Self {
        Box::new(value)
    }
}

impl PartialEq for dyn Localizable + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.innermost() == other.innermost()
    }
}

impl Eq for dyn Localizable + '_ {}

impl Hash for dyn Localizable + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.innermost().hash(state);
    }
}
