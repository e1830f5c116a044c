use log::debug;

use super::Decorator;
use crate::{
    BoxedLocalizable, Locale, Localizable, LocalizableError, LocalizedValue, Mutation,
};

/// View that rejects every mutation of the wrapped value.
///
/// Reads pass straight through. [`Localizable::clone_value`] clones the
/// wrapped value, so the copy is writable again.
///
/// ```
/// use localizable::{Localizable, LocalizableError, LocalizedValue, ReadOnlyView};
/// use unic_langid::langid;
///
/// let mut view = ReadOnlyView::new(LocalizedValue::new("greeting").with("hello", langid!("en")));
///
/// assert!(matches!(
///     view.set_key(String::from("x")),
///     Err(LocalizableError::UnsupportedOperation { .. })
/// ));
///
/// let mut copy = view.clone_value();
/// copy.set_key(String::from("x")).expect("clones are writable");
/// assert_eq!(view.key(), "greeting");
/// ```
#[derive(Debug)]
pub struct ReadOnlyView<I = BoxedLocalizable> {
    inner: I,
}

impl<I: Localizable> ReadOnlyView<I> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Release the wrapped value.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.inner
    }

    fn reject(&self, operation: Mutation) -> Result<(), LocalizableError> {
        debug!(
            target: "localizable::read_only",
            "rejected `{operation}` on read-only value `{}`",
            self.inner.key(),
        );
        Err(LocalizableError::unsupported(operation))
    }
}

impl<I: Localizable + From<LocalizedValue>> ReadOnlyView<I> {
    /// Wrap `inner`, substituting an empty [`LocalizedValue::wrapped`] value
    /// when none is supplied.
    #[must_use]
    pub fn from_option(inner: Option<I>) -> Self {
        Self::new(inner.unwrap_or_else(|| I::from(LocalizedValue::wrapped())))
    }
}

impl<I: Localizable> Decorator for ReadOnlyView<I> {
    type Inner = I;

    fn inner(&self) -> &I {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    fn forward_set(&mut self, _value: String, _locale: Locale) -> Result<(), LocalizableError> {
        self.reject(Mutation::Set)
    }

    fn forward_set_key(&mut self, _key: String) -> Result<(), LocalizableError> {
        self.reject(Mutation::SetKey)
    }

    fn forward_set_bundle(&mut self, _bundle: Option<String>) -> Result<(), LocalizableError> {
        self.reject(Mutation::SetBundle)
    }

    fn forward_is_read_only(&self) -> bool {
        true
    }
}

impl_innermost_identity!(ReadOnlyView);

/// Read-only view of `value`.
///
/// A chain that already rejects mutation is returned as the same instance
/// instead of being wrapped again.
///
/// ```
/// use localizable::{BoxedLocalizable, Localizable, LocalizedValue, read_only};
///
/// let view = read_only(LocalizedValue::new("greeting").into());
/// let address = std::ptr::from_ref::<dyn Localizable>(view.as_ref()).cast::<()>();
///
/// let again: BoxedLocalizable = read_only(view);
/// assert_eq!(std::ptr::from_ref::<dyn Localizable>(again.as_ref()).cast::<()>(), address);
/// ```
#[must_use]
pub fn read_only(value: BoxedLocalizable) -> BoxedLocalizable {
    if value.is_read_only() {
        value
    } else {
        Box::new(ReadOnlyView::new(value))
    }
}
