//! Property tests for query-interpreter round-trip stability.

use bizlens_core::{FILLER_PREFIXES, KNOWN_CITIES, parse_query};
use proptest::prelude::*;

/// Words that would change how the connector pattern splits a sentence.
fn is_reserved(word: &str) -> bool {
    matches!(word, "in" | "at" | "near") || FILLER_PREFIXES.contains(&word)
}

/// Business phrases built from plain lowercase words: no connector words
/// anywhere, and the phrase must not begin with a filler (single- or
/// multi-word), or cleanup would eat part of it.
fn arb_business() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{2,10}", 1..=3).prop_filter_map(
        "business must not collide with connectors or fillers",
        |words| {
            if words.iter().any(|w| matches!(w.as_str(), "in" | "at" | "near")) {
                return None;
            }
            let joined = words.join(" ");
            let starts_with_filler = FILLER_PREFIXES
                .iter()
                .any(|f| joined == *f || joined.starts_with(&format!("{f} ")));
            (!starts_with_filler).then_some(joined)
        },
    )
}

/// Locations either from the known-city table or free-form place words.
fn arb_location() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(KNOWN_CITIES).prop_map(str::to_string),
        proptest::collection::vec("[a-z]{3,10}", 1..=2).prop_filter_map(
            "location words must not be reserved",
            |words| {
                if words.iter().any(|w| is_reserved(w)) {
                    None
                } else {
                    Some(words.join(" "))
                }
            },
        ),
    ]
}

fn arb_connector() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("in"), Just("at"), Just("near")]
}

/// Optional filler prefix in front of the business phrase.
fn arb_filler() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        proptest::sample::select(FILLER_PREFIXES).prop_map(|f| format!("{f} ")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any "<business> in|at|near <location>" sentence resolves with the
    /// cleaned business phrase and the title-cased location, and does not
    /// need clarification.
    #[test]
    fn prop_connector_sentences_resolve(
        filler in arb_filler(),
        business in arb_business(),
        connector in arb_connector(),
        location in arb_location(),
    ) {
        let input = format!("{filler}{business} {connector} {location}");
        let parsed = parse_query(&input);

        prop_assert!(!parsed.needs_clarification(), "unresolved: {input:?}");
        prop_assert_eq!(parsed.business_type.as_deref(), Some(business.as_str()));

        let expected_location: String = location
            .split_whitespace()
            .map(|w| {
                let mut chars = w.chars();
                chars
                    .next()
                    .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(parsed.location.as_deref(), Some(expected_location.as_str()));
    }

    /// Round-trip stability: for any single-line input that resolves,
    /// re-parsing the reconstructed "<business> in <location>" sentence is a
    /// fixed point.
    #[test]
    fn prop_roundtrip_is_fixed_point(input in "[ -~]{0,48}") {
        let first = parse_query(&input);
        if first.needs_clarification() {
            return Ok(());
        }

        let reconstructed = format!(
            "{} in {}",
            first.business_type.as_deref().unwrap(),
            first.location.as_deref().unwrap(),
        );
        let second = parse_query(&reconstructed);

        prop_assert_eq!(&first, &second, "not stable via {:?}", reconstructed);
    }
}
