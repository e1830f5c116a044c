//! Test doubles shared by unit and behaviour tests.

use std::sync::{Mutex, PoisonError};

use crate::{BundleSource, Locale};

/// One recorded lookup: bundle name, locale tag (if any), and key.
pub type RecordedLookup = (String, Option<String>, String);

/// [`BundleSource`] wrapper recording every lookup before delegating.
///
/// Used to assert which fallback steps ran, and that direct entries never
/// reach the bundle at all.
#[derive(Debug, Default)]
pub struct RecordingSource<S> {
    inner: S,
    lookups: Mutex<Vec<RecordedLookup>>,
}

impl<S: BundleSource> RecordingSource<S> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// The lookups recorded so far, oldest first.
    #[must_use]
    pub fn lookups(&self) -> Vec<RecordedLookup> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of lookups recorded so far.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<S: BundleSource> BundleSource for RecordingSource<S> {
    fn lookup(&self, bundle: &str, locale: Option<&Locale>, key: &str) -> Option<String> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((
                bundle.to_owned(),
                locale.map(ToString::to_string),
                key.to_owned(),
            ));
        self.inner.lookup(bundle, locale, key)
    }
}
