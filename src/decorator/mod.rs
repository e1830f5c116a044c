//! Views layered over a [`Localizable`].
//!
//! A decorator owns (or borrows) exactly one inner [`Localizable`] and
//! forwards every operation to it. The [`Decorator`] trait exposes the
//! operations a view may intercept as `forward_*` hooks whose defaults simply
//! delegate; a single blanket impl turns any decorator into a
//! [`Localizable`]. Views therefore override only what they change.
//!
//! Equality and hashing always look through the chain to the innermost
//! [`LocalizedValue`], so a view equals the bare value it wraps.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::{Locale, LocaleRequest, Localizable, LocalizableError, LocalizedValue};

/// Equality and hashing that look through a view to its innermost value.
///
/// Defined ahead of the view modules so they see it in textual scope.
macro_rules! impl_innermost_identity {
    ($view:ident) => {
        impl<I, R> PartialEq<R> for $view<I>
        where
            I: $crate::Localizable,
            R: $crate::Localizable + ?Sized,
        {
            fn eq(&self, other: &R) -> bool {
                $crate::Localizable::innermost(self) == $crate::Localizable::innermost(other)
            }
        }

        impl<I: $crate::Localizable> Eq for $view<I> {}

        impl<I: $crate::Localizable> ::std::hash::Hash for $view<I> {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash($crate::Localizable::innermost(self), state);
            }
        }
    };
}

mod default_locale;
mod read_only;

pub use default_locale::DefaultLocaleView;
pub use read_only::{ReadOnlyView, read_only};

/// Wrapper implementing [`Localizable`] by forwarding to an inner value.
pub trait Decorator {
    /// The wrapped capability.
    type Inner: Localizable + ?Sized;

    /// Borrow the wrapped value.
    fn inner(&self) -> &Self::Inner;

    /// Mutably borrow the wrapped value.
    fn inner_mut(&mut self) -> &mut Self::Inner;

    /// Hook for [`Localizable::get`].
    fn forward_get(&self, locale: LocaleRequest<'_>) -> Option<Cow<'_, str>> {
        self.inner().get(locale)
    }

    /// Hook for [`Localizable::set`].
    ///
    /// # Errors
    ///
    /// Propagates the inner value's error unless a view overrides the hook.
    fn forward_set(&mut self, value: String, locale: Locale) -> Result<(), LocalizableError> {
        self.inner_mut().set(value, locale)
    }

    /// Hook for [`Localizable::set_key`].
    ///
    /// # Errors
    ///
    /// Propagates the inner value's error unless a view overrides the hook.
    fn forward_set_key(&mut self, key: String) -> Result<(), LocalizableError> {
        self.inner_mut().set_key(key)
    }

    /// Hook for [`Localizable::set_bundle`].
    ///
    /// # Errors
    ///
    /// Propagates the inner value's error unless a view overrides the hook.
    fn forward_set_bundle(&mut self, bundle: Option<String>) -> Result<(), LocalizableError> {
        self.inner_mut().set_bundle(bundle)
    }

    /// Hook for [`Localizable::is_read_only`].
    fn forward_is_read_only(&self) -> bool {
        self.inner().is_read_only()
    }
}

impl<D: Decorator + fmt::Debug> Localizable for D {
    fn get(&self, locale: LocaleRequest<'_>) -> Option<Cow<'_, str>> {
        self.forward_get(locale)
    }

    fn set(&mut self, value: String, locale: Locale) -> Result<(), LocalizableError> {
        self.forward_set(value, locale)
    }

    fn key(&self) -> &str {
        self.inner().key()
    }

    fn set_key(&mut self, key: String) -> Result<(), LocalizableError> {
        self.forward_set_key(key)
    }

    fn bundle(&self) -> Option<&str> {
        self.inner().bundle()
    }

    fn set_bundle(&mut self, bundle: Option<String>) -> Result<(), LocalizableError> {
        self.forward_set_bundle(bundle)
    }

    fn as_map(&self) -> &HashMap<Locale, String> {
        self.inner().as_map()
    }

    fn clone_value(&self) -> LocalizedValue {
        self.inner().clone_value()
    }

    fn innermost(&self) -> &LocalizedValue {
        self.inner().innermost()
    }

    fn is_read_only(&self) -> bool {
        self.forward_is_read_only()
    }
}

impl<L: Localizable + ?Sized> Decorator for Box<L> {
    type Inner = L;

    fn inner(&self) -> &L {
        self
    }

    fn inner_mut(&mut self) -> &mut L {
        self
    }
}

impl<L: Localizable + ?Sized> Decorator for &mut L {
    type Inner = L;

    fn inner(&self) -> &L {
        self
    }

    fn inner_mut(&mut self) -> &mut L {
        self
    }
}
