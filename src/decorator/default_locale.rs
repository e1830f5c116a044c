use std::borrow::Cow;

use super::Decorator;
use crate::{BoxedLocalizable, Locale, LocaleRequest, LocaleSelection, Localizable, LocalizedValue};

/// View that answers default-locale lookups with a locale of its own.
///
/// Only [`LocaleRequest::UseDefault`] lookups are affected. When no default
/// is configured they reach the wrapped value unchanged, so its own notion of
/// the default applies.
#[derive(Debug)]
pub struct DefaultLocaleView<I = BoxedLocalizable> {
    inner: I,
    default_locale: Option<Locale>,
}

impl<I: Localizable> DefaultLocaleView<I> {
    /// Wrap `inner` with no default locale configured.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self::with_default_locale(inner, None)
    }

    /// Wrap `inner`, substituting `locale` for default lookups.
    #[must_use]
    pub const fn with_default_locale(inner: I, locale: Option<Locale>) -> Self {
        Self {
            inner,
            default_locale: locale,
        }
    }

    /// Wrap `inner`, seeding the default from a resolved selection.
    #[must_use]
    pub fn from_selection(inner: I, selection: &LocaleSelection) -> Self {
        Self::with_default_locale(inner, selection.locale().cloned())
    }

    /// The locale substituted for default lookups.
    #[must_use]
    pub const fn default_locale(&self) -> Option<&Locale> {
        self.default_locale.as_ref()
    }

    /// Replace the default locale, returning the previous setting.
    ///
    /// ```
    /// use localizable::{DefaultLocaleView, LocalizedValue};
    /// use unic_langid::langid;
    ///
    /// let mut view = DefaultLocaleView::new(LocalizedValue::new("greeting"));
    /// assert_eq!(view.set_default_locale(Some(langid!("en"))), None);
    /// assert_eq!(view.set_default_locale(Some(langid!("nl"))), Some(langid!("en")));
    /// ```
    pub const fn set_default_locale(&mut self, locale: Option<Locale>) -> Option<Locale> {
        std::mem::replace(&mut self.default_locale, locale)
    }

    /// Release the wrapped value.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Localizable + From<LocalizedValue>> DefaultLocaleView<I> {
    /// Wrap `inner`, substituting an empty [`LocalizedValue::wrapped`] value
    /// when none is supplied.
    #[must_use]
    pub fn from_option(inner: Option<I>) -> Self {
        Self::new(inner.unwrap_or_else(|| I::from(LocalizedValue::wrapped())))
    }
}

impl<I: Localizable> Decorator for DefaultLocaleView<I> {
    type Inner = I;

    fn inner(&self) -> &I {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    fn forward_get(&self, locale: LocaleRequest<'_>) -> Option<Cow<'_, str>> {
        match (locale, self.default_locale.as_ref()) {
            (LocaleRequest::UseDefault, Some(default)) => {
                self.inner.get(LocaleRequest::Explicit(default))
            }
            (request, _) => self.inner.get(request),
        }
    }
}

impl_innermost_identity!(DefaultLocaleView);
