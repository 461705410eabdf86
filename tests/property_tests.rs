// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Identifier Subsystem
//!
//! This test suite uses proptest to verify the laws the identifier types
//! must uphold for all inputs: slugification is idempotent, parsing and
//! formatting a TRN are exact inverses, and name-derived identifiers are
//! stable under re-derivation.

use proptest::prelude::*;

use rail_catalog::domain::{slugify, BrandId, Epoch, Trn};

/// Generate a single valid grammar token
fn grammar_token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}"
}

/// Generate a valid canonical TRN string with 1 to 3 segments
fn canonical_trn() -> impl Strategy<Value = String> {
    (
        grammar_token(),
        prop::collection::vec(grammar_token(), 1..4),
    )
        .prop_map(|(namespace, segments)| format!("trn:{namespace}:{}", segments.join(":")))
}

proptest! {
    /// Slugifying a slug changes nothing
    #[test]
    fn slugify_is_idempotent(input in ".{0,64}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    /// Slug output never leaves the slug alphabet
    #[test]
    fn slugs_stay_within_their_alphabet(input in ".{0,64}") {
        let slug = slugify(&input);
        prop_assert!(slug.chars().all(|ch| ch.is_ascii_lowercase()
            || ch.is_ascii_digit()
            || ch == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    /// For every valid canonical string, parse then format is the identity
    #[test]
    fn trn_parse_round_trips(value in canonical_trn()) {
        let trn = Trn::parse(&value).unwrap();
        prop_assert_eq!(trn.to_string(), value);
    }

    /// Segment extraction rejoins to the specific string
    #[test]
    fn segments_rejoin_to_the_specific_string(value in canonical_trn()) {
        let trn = Trn::parse(&value).unwrap();
        prop_assert_eq!(
            trn.namespace_specific_strings().join(":"),
            trn.namespace_specific_string()
        );
    }

    /// Composition always yields a parseable TRN when the slug is non-empty
    #[test]
    fn composed_trns_are_valid(name in "[a-zA-Z0-9 ]{1,32}") {
        prop_assume!(!slugify(&name).is_empty());
        let trn = Trn::compose("brand", &name);
        prop_assert!(Trn::is_valid(&trn.to_string()));
    }

    /// Deriving an id from a name, then from that id's specific string,
    /// lands on the same id
    #[test]
    fn from_name_is_idempotent(name in ".{1,48}") {
        prop_assume!(!slugify(&name).is_empty());
        let first = BrandId::from_name(&name);
        let trn = Trn::parse(first.as_str()).unwrap();
        let again = BrandId::from_name(trn.namespace_specific_string());
        prop_assert_eq!(first, again);
    }
}

/// The epoch round-trip law is a closed-set walk, not a random one
#[test]
fn every_epoch_in_all_round_trips_through_parse() {
    for epoch in Epoch::ALL {
        let code = epoch.to_string();
        assert_eq!(Epoch::parse(&code).unwrap(), epoch);
    }
}
