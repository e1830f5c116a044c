//! Bundle fallback for entries a value does not hold itself.
//!
//! A [`BundleSource`] answers exact lookups only: one bundle name, one locale
//! (or the bundle-wide default), one key. [`BundleResolver`] layers the
//! fallback policy on top by walking a [`FallbackOrder`] until a step
//! produces a string. The order defaults to the exact locale, then the
//! language-only locale, then the bundle-wide default, and can be replaced
//! through [`crate::ResolutionConfig`].

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{Locale, LocalizableError, language_only};

mod fluent;
mod memory;

pub use fluent::FluentBundles;
pub use memory::MemoryBundles;

/// Collaborator mapping `(bundle, locale, key)` to a string.
///
/// `locale` is `None` when the bundle-wide default is requested.
/// Implementations must not apply any fallback of their own beyond what the
/// backing store forces on them.
pub trait BundleSource: fmt::Debug + Send + Sync {
    /// Look up `key` in `bundle` for exactly `locale`.
    fn lookup(&self, bundle: &str, locale: Option<&Locale>, key: &str) -> Option<String>;
}

/// Source that never resolves anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBundles;

impl BundleSource for NoBundles {
    fn lookup(&self, _bundle: &str, _locale: Option<&Locale>, _key: &str) -> Option<String> {
        None
    }
}

static NO_BUNDLES: Lazy<Arc<dyn BundleSource>> = Lazy::new(|| Arc::new(NoBundles));

/// A single stage of bundle fallback.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackStep {
    /// The requested locale as given.
    Exact,
    /// The requested locale reduced to its language subtag.
    Language,
    /// The bundle-wide default entry.
    BundleDefault,
}

impl fmt::Display for FallbackStep {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => formatter.write_str("exact"),
            Self::Language => formatter.write_str("language"),
            Self::BundleDefault => formatter.write_str("bundle-default"),
        }
    }
}

/// Ordered, duplicate-free list of fallback steps.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FallbackOrder {
    steps: Vec<FallbackStep>,
}

impl FallbackOrder {
    /// Build an order from `steps`, rejecting repeated steps.
    ///
    /// An empty order disables bundle fallback entirely.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizableError::DuplicateFallbackStep`] when a step is
    /// listed twice.
    ///
    /// ```
    /// use localizable::{FallbackOrder, FallbackStep};
    ///
    /// let order = FallbackOrder::new([FallbackStep::BundleDefault, FallbackStep::Exact])
    ///     .expect("steps are distinct");
    /// assert_eq!(order.steps(), [FallbackStep::BundleDefault, FallbackStep::Exact]);
    ///
    /// assert!(FallbackOrder::new([FallbackStep::Exact, FallbackStep::Exact]).is_err());
    /// ```
    pub fn new(steps: impl IntoIterator<Item = FallbackStep>) -> Result<Self, LocalizableError> {
        let mut ordered: Vec<FallbackStep> = Vec::new();
        for step in steps {
            if ordered.contains(&step) {
                return Err(LocalizableError::DuplicateFallbackStep { step });
            }
            ordered.push(step);
        }
        Ok(Self { steps: ordered })
    }

    /// The steps in evaluation order.
    #[must_use]
    pub fn steps(&self) -> &[FallbackStep] {
        &self.steps
    }
}

impl Default for FallbackOrder {
    fn default() -> Self {
        Self {
            steps: vec![
                FallbackStep::Exact,
                FallbackStep::Language,
                FallbackStep::BundleDefault,
            ],
        }
    }
}

/// Bundle source plus the policy used to consult it.
///
/// The ambient locale is the resolver's own notion of the current locale. It
/// answers [`crate::LocaleRequest::UseDefault`] lookups on values that are
/// not wrapped in a [`crate::DefaultLocaleView`].
#[derive(Clone, Debug)]
pub struct BundleResolver {
    source: Arc<dyn BundleSource>,
    order: FallbackOrder,
    ambient_locale: Option<Locale>,
}

impl BundleResolver {
    /// Resolver over `source` with the default fallback order.
    #[must_use]
    pub fn new(source: Arc<dyn BundleSource>) -> Self {
        Self {
            source,
            order: FallbackOrder::default(),
            ambient_locale: None,
        }
    }

    /// Replace the fallback order.
    #[must_use]
    pub fn with_order(mut self, order: FallbackOrder) -> Self {
        self.order = order;
        self
    }

    /// Replace the ambient locale.
    #[must_use]
    pub fn with_ambient_locale(mut self, locale: Option<Locale>) -> Self {
        self.ambient_locale = locale;
        self
    }

    /// The configured fallback order.
    #[must_use]
    pub const fn order(&self) -> &FallbackOrder {
        &self.order
    }

    /// The ambient locale, if one is configured.
    #[must_use]
    pub const fn ambient_locale(&self) -> Option<&Locale> {
        self.ambient_locale.as_ref()
    }

    /// Resolve `key` from `bundle`, walking the fallback order.
    ///
    /// Locale-specific steps are skipped when `locale` is `None`. The
    /// language step is skipped when it would repeat the exact locale.
    #[must_use]
    pub fn resolve(&self, bundle: &str, locale: Option<&Locale>, key: &str) -> Option<String> {
        let resolved = self
            .order
            .steps()
            .iter()
            .find_map(|step| self.try_step(*step, bundle, locale, key));

        if resolved.is_none() {
            trace!(
                target: "localizable::bundle",
                "no entry for `{key}` in bundle `{bundle}` ({})",
                describe(locale),
            );
        }

        resolved
    }

    fn try_step(
        &self,
        step: FallbackStep,
        bundle: &str,
        locale: Option<&Locale>,
        key: &str,
    ) -> Option<String> {
        let value = match step {
            FallbackStep::Exact => self.source.lookup(bundle, Some(locale?), key),
            FallbackStep::Language => {
                let requested = locale?;
                let language = language_only(requested);
                if &language == requested {
                    return None;
                }
                self.source.lookup(bundle, Some(&language), key)
            }
            FallbackStep::BundleDefault => self.source.lookup(bundle, None, key),
        }?;

        debug!(
            target: "localizable::bundle",
            "resolved `{key}` from bundle `{bundle}` via {step} step ({})",
            describe(locale),
        );

        Some(value)
    }
}

impl Default for BundleResolver {
    fn default() -> Self {
        Self::new(Arc::clone(&NO_BUNDLES))
    }
}

fn describe(locale: Option<&Locale>) -> String {
    locale.map_or_else(|| String::from("no locale"), |value| format!("locale `{value}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSource;
    use rstest::{fixture, rstest};
    use unic_langid::langid;

    #[fixture]
    fn bundles() -> MemoryBundles {
        MemoryBundles::new()
            .with_entry("app", Some(langid!("en-GB")), "title", "Colour")
            .with_entry("app", Some(langid!("en")), "title", "Color")
            .with_entry("app", None, "title", "Title")
    }

    #[rstest]
    #[case(Some(langid!("en-GB")), Some("Colour"))]
    #[case(Some(langid!("en-AU")), Some("Color"))]
    #[case(Some(langid!("fr")), Some("Title"))]
    #[case(None, Some("Title"))]
    fn default_order_prefers_exact_then_language_then_default(
        bundles: MemoryBundles,
        #[case] locale: Option<Locale>,
        #[case] expected: Option<&str>,
    ) {
        let resolver = BundleResolver::new(Arc::new(bundles));

        let resolved = resolver.resolve("app", locale.as_ref(), "title");

        assert_eq!(resolved.as_deref(), expected);
    }

    #[rstest]
    fn reordered_steps_change_the_outcome(bundles: MemoryBundles) {
        let order = FallbackOrder::new([FallbackStep::BundleDefault, FallbackStep::Exact])
            .expect("steps are distinct");
        let resolver = BundleResolver::new(Arc::new(bundles)).with_order(order);

        let resolved = resolver.resolve("app", Some(&langid!("en-GB")), "title");

        assert_eq!(resolved.as_deref(), Some("Title"));
    }

    #[rstest]
    fn empty_order_disables_fallback(bundles: MemoryBundles) {
        let order = FallbackOrder::new(Vec::<FallbackStep>::new()).expect("empty order is valid");
        let resolver = BundleResolver::new(Arc::new(bundles)).with_order(order);

        assert!(resolver.resolve("app", Some(&langid!("en-GB")), "title").is_none());
    }

    #[test]
    fn language_step_is_skipped_for_language_only_requests() {
        let source = Arc::new(RecordingSource::new(MemoryBundles::new()));
        let resolver = BundleResolver::new(source.clone());

        assert!(resolver.resolve("app", Some(&langid!("nl")), "title").is_none());

        assert_eq!(
            source.lookups(),
            vec![
                (String::from("app"), Some(String::from("nl")), String::from("title")),
                (String::from("app"), None, String::from("title")),
            ]
        );
    }

    #[test]
    fn rejects_duplicate_steps() {
        let outcome = FallbackOrder::new([
            FallbackStep::Exact,
            FallbackStep::Language,
            FallbackStep::Exact,
        ]);

        assert_eq!(
            outcome,
            Err(LocalizableError::DuplicateFallbackStep {
                step: FallbackStep::Exact
            })
        );
    }

    #[test]
    fn default_resolver_never_resolves() {
        let resolver = BundleResolver::default();
        assert!(resolver.resolve("app", Some(&langid!("en")), "title").is_none());
        assert!(resolver.ambient_locale().is_none());
        assert_eq!(resolver.order(), &FallbackOrder::default());
    }
}
