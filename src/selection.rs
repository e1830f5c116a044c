//! Choosing the default locale for [`crate::DefaultLocaleView`].
//!
//! Candidates are considered in priority order: an explicit override, the
//! `LOCALIZABLE_LOCALE` environment variable, then configuration. Blank and
//! unparsable candidates are skipped with a warning rather than failing, so a
//! stray environment value never prevents resolution.

use std::env;
use std::fmt;

use log::{debug, warn};

use crate::{Locale, normalise_locale, parse_locale};

/// Environment variable consulted for the default locale.
pub const LOCALE_ENV_VAR: &str = "LOCALIZABLE_LOCALE";

const TARGET: &str = "localizable::selection";

/// Where a default locale came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Passed in by the caller.
    ExplicitArgument,
    /// Read from [`LOCALE_ENV_VAR`].
    EnvironmentVariable,
    /// Read from [`crate::ResolutionConfig`] or a similar setting.
    Configuration,
    /// Every candidate was missing or invalid.
    Unset,
}

impl LocaleSource {
    const fn label(self) -> &'static str {
        match self {
            Self::ExplicitArgument => "explicit locale override",
            Self::EnvironmentVariable => LOCALE_ENV_VAR,
            Self::Configuration => "configuration locale",
            Self::Unset => "no default locale",
        }
    }
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// A chosen default locale, or the lack of one, with its provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleSelection {
    locale: Option<Locale>,
    source: LocaleSource,
    requested: Option<String>,
}

impl LocaleSelection {
    fn chosen(locale: Locale, source: LocaleSource, candidate: &str) -> Self {
        Self {
            locale: Some(locale),
            source,
            requested: Some(candidate.to_owned()),
        }
    }

    const fn unset() -> Self {
        Self {
            locale: None,
            source: LocaleSource::Unset,
            requested: None,
        }
    }

    /// Which candidate won.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// The winning candidate as written, minus surrounding whitespace.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// The parsed default, if any candidate was usable.
    #[must_use]
    pub const fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Take the parsed default out of the selection.
    #[must_use]
    pub fn into_locale(self) -> Option<Locale> {
        self.locale
    }

    /// Record the outcome at debug level under `target`.
    pub fn log_outcome(&self, target: &str) {
        self.locale.as_ref().map_or_else(
            || debug!(target: target, "{}; default lookups are left as-is", self.source),
            |locale| debug!(target: target, "default locale `{locale}` taken from {}", self.source),
        );
    }
}

fn accept(source: LocaleSource, raw: Option<&str>) -> Option<LocaleSelection> {
    let candidate = normalise_locale(raw)?;

    parse_locale(candidate)
        .inspect_err(|error| {
            warn!(target: TARGET, "skipping {source} `{candidate}`: {error}");
        })
        .ok()
        .map(|locale| LocaleSelection::chosen(locale, source, candidate))
}

/// Pick the default locale from up to three candidates.
///
/// The first usable candidate wins, checked as `explicit`, then
/// `environment`, then `configuration`. When none parses the selection
/// reports [`LocaleSource::Unset`].
#[must_use]
pub fn resolve_default_locale(
    explicit: Option<&str>,
    environment: Option<&str>,
    configuration: Option<&str>,
) -> LocaleSelection {
    [
        (LocaleSource::ExplicitArgument, explicit),
        (LocaleSource::EnvironmentVariable, environment),
        (LocaleSource::Configuration, configuration),
    ]
    .into_iter()
    .find_map(|(source, raw)| accept(source, raw))
    .unwrap_or_else(LocaleSelection::unset)
}

/// Read [`LOCALE_ENV_VAR`] and pick the default locale, with `configuration`
/// as the last resort.
///
/// Non-UTF-8 environment values count as unset.
///
/// ```
/// use localizable::{LocaleSource, default_locale_from_environment};
///
/// # // SAFETY: doctests run in their own process.
/// # unsafe { std::env::remove_var("LOCALIZABLE_LOCALE") };
/// let selection = default_locale_from_environment(Some("nl"));
/// assert_eq!(selection.source(), LocaleSource::Configuration);
/// assert_eq!(selection.locale().map(ToString::to_string).as_deref(), Some("nl"));
/// ```
#[must_use]
pub fn default_locale_from_environment(configuration: Option<&str>) -> LocaleSelection {
    let environment = env::var(LOCALE_ENV_VAR).ok();
    let selection = resolve_default_locale(None, environment.as_deref(), configuration);

    selection.log_outcome(TARGET);
    selection
}
