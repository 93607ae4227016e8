//! Integration tests for error construction, rendering, and combination.

use inquest::decode::{self, Decoder};
use inquest::{DecodeError, DecodeErrors, PathSegment, ValuePath};
use serde_json::json;
use stillwater::prelude::*;

#[test]
fn test_error_fields_are_public() {
    let error = DecodeError::new("An int", "A string")
        .with_path(ValuePath::root().push_field("age"));

    assert_eq!(error.expected, "An int");
    assert_eq!(error.found, "A string");
    assert_eq!(error.path.to_string(), "age");
}

#[test]
fn test_error_display_includes_path() {
    let error = DecodeError::new("A bool", "Nothing")
        .prefixed(PathSegment::index(2))
        .prefixed(PathSegment::field("flags"));

    assert_eq!(
        error.to_string(),
        "flags[2]: expected A bool, found Nothing"
    );
}

#[test]
fn test_errors_combine_in_order() {
    let combined = DecodeErrors::single(DecodeError::new("An int", "x"))
        .combine(DecodeErrors::single(DecodeError::new("A bool", "y")));

    assert_eq!(combined.len(), 2);
    let expectations: Vec<_> = combined.iter().map(|e| e.expected.as_str()).collect();
    assert_eq!(expectations, vec!["An int", "A bool"]);
}

#[test]
fn test_errors_display_enumerates() {
    let errors = DecodeErrors::single(DecodeError::new("An int", "A string"))
        .combine(DecodeErrors::single(DecodeError::new("A bool", "Nothing")));

    let rendered = errors.to_string();
    assert!(rendered.contains("2 error(s)"));
    assert!(rendered.contains("1. expected An int, found A string"));
    assert!(rendered.contains("2. expected A bool, found Nothing"));
}

#[test]
fn test_errors_at_path_filter() {
    let decoder = decode::all(vec![
        decode::field("a", decode::int()).boxed(),
        decode::field("b", decode::int()).boxed(),
    ]);
    let errors = decoder.decode(&json!({})).into_result().unwrap_err();

    let at_a = errors.at_path(&ValuePath::root().push_field("a"));
    assert_eq!(at_a.len(), 1);
    assert_eq!(at_a[0].expected, "A field");
}

#[test]
fn test_errors_into_vec_preserves_everything() {
    let decoder = decode::all(vec![
        decode::field("a", decode::int()).boxed(),
        decode::field("a", decode::int()).boxed(),
    ]);
    let errors = decoder.decode(&json!({})).into_result().unwrap_err();

    let collected = errors.into_vec();
    assert_eq!(collected.len(), 2);
    assert_eq!(collected[0], collected[1]);
}

#[test]
fn test_error_implements_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let error = DecodeError::new("An int", "A string");
    takes_error(&error);

    let errors = DecodeErrors::single(error);
    takes_error(&errors);
}
