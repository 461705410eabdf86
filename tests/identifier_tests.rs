// Copyright (c) 2025 - Cowboy AI, Inc.
//! Integration tests for the identifier subsystem
//!
//! Exercises the TRN grammar table, namespace enforcement for the typed
//! identifiers, and the epoch vocabulary through the public API.

use pretty_assertions::assert_eq;
use test_case::test_case;

use rail_catalog::domain::{
    slugify, BrandId, CatalogItemId, Epoch, RailwayId, ScaleId, Trn,
};

#[test_case("", false; "empty string")]
#[test_case("trn", false; "scheme only")]
#[test_case("trn:", false; "scheme and separator only")]
#[test_case("trn:namespace", false; "missing specific string")]
#[test_case("trn:namespace:", false; "empty specific string")]
#[test_case("urn:namespace:value", false; "wrong scheme")]
#[test_case("trn:name space:value", false; "space in namespace")]
#[test_case("trn:namespace:name space", false; "space in segment")]
#[test_case("trn:namespace:value", true; "canonical three tokens")]
#[test_case("TRN:namespace:value", true; "uppercase scheme")]
#[test_case("trn:namespace:a:b", true; "two segments")]
#[test_case("trn:catalog-item:maerklin:123456", true; "hyphenated namespace")]
fn trn_grammar(value: &str, valid: bool) {
    assert_eq!(Trn::is_valid(value), valid);
}

#[test]
fn parsing_round_trips_to_the_same_string() {
    for value in [
        "trn:brand:acme",
        "trn:railway:ferrovie-dello-stato",
        "trn:catalog-item:maerklin:123456",
        "trn:namespace:a:b:c",
    ] {
        assert_eq!(Trn::parse(value).unwrap().to_string(), value);
    }
}

#[test]
fn multi_segment_specific_strings_are_preserved() {
    let trn = Trn::parse("trn:namespace:a:b").unwrap();
    assert_eq!(trn.namespace_specific_strings(), vec!["a", "b"]);
}

#[test]
fn brand_ids_enforce_the_brand_namespace() {
    let err = BrandId::new("trn:railway:fs").unwrap_err();
    assert_eq!(err.to_string(), "Invalid brand ID value: trn:railway:fs");

    let id = BrandId::new("trn:brand:fs").unwrap();
    assert_eq!(id.to_string(), "trn:brand:fs");
}

#[test]
fn every_typed_identifier_has_its_own_namespace() {
    assert!(BrandId::new("trn:brand:x").is_ok());
    assert!(RailwayId::new("trn:railway:x").is_ok());
    assert!(ScaleId::new("trn:scale:x").is_ok());
    assert!(CatalogItemId::new("trn:catalog-item:x:1").is_ok());

    assert!(BrandId::new("trn:scale:x").is_err());
    assert!(RailwayId::new("trn:brand:x").is_err());
    assert!(ScaleId::new("trn:catalog-item:x:1").is_err());
    assert!(CatalogItemId::new("trn:railway:x").is_err());
}

#[test]
fn from_name_slugifies_the_display_name() {
    assert_eq!(BrandId::from_name("Brand 1").to_string(), "trn:brand:brand-1");
}

#[test]
fn catalog_item_ids_compose_from_brand_and_item_number() {
    let id = CatalogItemId::from_parts("Marklin", "123456");
    assert_eq!(id.to_string(), "trn:catalog-item:marklin:123456");
}

#[test]
fn slugification_transliterates_and_collapses() {
    assert_eq!(slugify("Märklìn Modellbahnen"), "maerklin-modellbahnen");
}

#[test_case("I")]
#[test_case("II")]
#[test_case("IIa")]
#[test_case("IIb")]
#[test_case("III")]
#[test_case("IIIa")]
#[test_case("IIIb")]
#[test_case("IV")]
#[test_case("IVa")]
#[test_case("IVb")]
#[test_case("IV/V")]
#[test_case("V")]
#[test_case("Va")]
#[test_case("Vb")]
#[test_case("Vm")]
#[test_case("V/VI")]
#[test_case("VI")]
fn epoch_codes_round_trip(code: &str) {
    assert_eq!(Epoch::parse(code).unwrap().to_string(), code);
}

#[test_case("VII")]
#[test_case("i")]
#[test_case("III/IV")]
#[test_case("")]
fn unknown_epoch_codes_are_rejected(code: &str) {
    let err = Epoch::parse(code).unwrap_err();
    assert_eq!(err.to_string(), format!("Invalid epoch value: {code}"));
}
