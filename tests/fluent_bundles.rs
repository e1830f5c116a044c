//! Bundle fallback against Fluent resources embedded with `fluent-templates`.
//!
//! The fixtures under `tests/locales` ship `en-GB` (the loader fallback),
//! a language-only `en`, and `nl`, so each fallback step can be observed.

use std::sync::Arc;

use fluent_templates::static_loader;
use localizable::{
    BundleResolver, BundleSource, FluentBundles, Locale, Localizable, LocalizedValue,
};
use rstest::{fixture, rstest};
use unic_langid::langid;

static_loader! {
    static LOCALES = {
        locales: "./tests/locales",
        fallback_language: "en-GB",
    };
}

#[fixture]
fn resolver() -> BundleResolver {
    BundleResolver::new(Arc::new(FluentBundles::new(&*LOCALES, langid!("en-GB"))))
}

#[rstest]
#[case(langid!("nl"), "Hallo")]
#[case(langid!("en-GB"), "Hello")]
#[case(langid!("en-AU"), "Hi")]
#[case(langid!("fr"), "Hello")]
fn resolves_through_the_fallback_steps(
    resolver: BundleResolver,
    #[case] locale: Locale,
    #[case] expected: &str,
) {
    let value = LocalizedValue::new("greeting")
        .with_bundle("app")
        .with_resolver(resolver);

    assert_eq!(value.get((&locale).into()).as_deref(), Some(expected));
}

#[rstest]
fn direct_entries_shadow_fluent_messages(resolver: BundleResolver) {
    let value = LocalizedValue::new("greeting")
        .with("Hoi", langid!("nl"))
        .with_bundle("app")
        .with_resolver(resolver);

    assert_eq!(value.get((&langid!("nl")).into()).as_deref(), Some("Hoi"));
}

#[rstest]
fn unknown_messages_stay_unresolved(resolver: BundleResolver) {
    let value = LocalizedValue::new("missing")
        .with_bundle("app")
        .with_resolver(resolver);

    assert!(value.get((&langid!("nl")).into()).is_none());
}

#[test]
fn unlisted_locales_are_not_looked_up() {
    let bundles = FluentBundles::new(&*LOCALES, langid!("en-GB"));

    assert!(bundles.lookup("app", Some(&langid!("fr")), "greeting").is_none());
    assert_eq!(
        bundles.lookup("app", None, "farewell").as_deref(),
        Some("Goodbye")
    );
    assert_eq!(bundles.fallback(), &langid!("en-GB"));
}
