//! Locale-keyed text values with bundle fallback, composed through views.
//!
//! A [`LocalizedValue`] maps locales to strings and names an optional bundle
//! consulted when an entry is missing. Callers hold values through the
//! [`Localizable`] capability, which is also implemented by the views in
//! [`decorator`]: [`ReadOnlyView`] rejects every mutation, and
//! [`DefaultLocaleView`] answers default-locale lookups with a locale of its
//! own. Views forward everything they do not intercept, including equality,
//! so a view compares equal to the value it wraps.
//!
//! Bundle storage stays outside the crate. A [`BundleSource`] answers exact
//! lookups and a [`BundleResolver`] applies the configurable
//! [`FallbackOrder`] on top of it.

pub mod bundle;
pub mod config;
pub mod decorator;
pub mod error;
pub mod locale;
pub mod localizable;
pub mod selection;
pub mod testing;
pub mod value;

pub use bundle::{
    BundleResolver, BundleSource, FallbackOrder, FallbackStep, FluentBundles, MemoryBundles,
    NoBundles,
};
pub use config::ResolutionConfig;
pub use decorator::{Decorator, DefaultLocaleView, ReadOnlyView, read_only};
pub use error::{LocalizableError, Mutation};
pub use locale::{Locale, LocaleRequest, language_only, normalise_locale, parse_locale};
pub use localizable::{BoxedLocalizable, Localizable};
pub use selection::{
    LOCALE_ENV_VAR, LocaleSelection, LocaleSource, default_locale_from_environment,
    resolve_default_locale,
};
pub use value::{LocalizedValue, WRAPPED_KEY};
