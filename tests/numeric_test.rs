//! Integration tests for numeric and string decoders.

use inquest::decode::{self, Decoder};
use inquest::{DecodeErrors, DecodeResult};
use serde_json::json;

fn unwrap_failure<T: std::fmt::Debug>(v: DecodeResult<T>) -> DecodeErrors {
    v.into_result().unwrap_err()
}

#[test]
fn test_non_negative_int_boundary() {
    assert_eq!(
        decode::non_negative_int().decode(&json!(0)).into_result(),
        Ok(0)
    );
    let errors = unwrap_failure(decode::non_negative_int().decode(&json!(-1)));
    assert_eq!(errors.first().expected, "A non-negative int");
    assert_eq!(errors.first().found, "-1");
}

#[test]
fn test_int_string_round_trip() {
    assert_eq!(
        decode::int_string().decode(&json!("123")).into_result(),
        Ok(123)
    );
}

#[test]
fn test_int_string_failure_carries_original() {
    let errors = unwrap_failure(decode::int_string().decode(&json!("12.5")));
    assert_eq!(errors.first().expected, "A stringified int");
    assert_eq!(errors.first().found, "12.5");
}

#[test]
fn test_number_widens_native_int() {
    assert_eq!(decode::number().decode(&json!(5)).into_result(), Ok(5.0));
    assert_eq!(decode::number().decode(&json!(5.5)).into_result(), Ok(5.5));
    assert!(decode::number().decode(&json!("5")).is_failure());
}

#[test]
fn test_number_string_both_forms() {
    assert_eq!(
        decode::number_string().decode(&json!("5")).into_result(),
        Ok(5.0)
    );
    assert_eq!(
        decode::number_string().decode(&json!("5.25")).into_result(),
        Ok(5.25)
    );
}

#[test]
fn test_float_string_negative_exponent() {
    assert_eq!(
        decode::float_string().decode(&json!("1e-3")).into_result(),
        Ok(0.001)
    );
}

#[test]
fn test_nonempty_string_integration() {
    assert!(decode::nonempty_string().decode(&json!("x")).is_success());
    let errors = unwrap_failure(decode::nonempty_string().decode(&json!("")));
    assert_eq!(errors.first().expected, "A non-empty string");
}

#[test]
fn test_matching_refines_a_field() {
    let decoder = decode::field(
        "sku",
        decode::matching(r"^[A-Z]{3}-\d{4}$").unwrap(),
    );

    assert!(decoder.decode(&json!({"sku": "ABC-1234"})).is_success());

    let errors = unwrap_failure(decoder.decode(&json!({"sku": "abc"})));
    assert_eq!(errors.first().path.to_string(), "sku");
    assert!(errors.first().expected.contains("matching"));
}

#[test]
fn test_when_refinement_over_numbers() {
    let small = decode::when(decode::number(), |n: &f64| *n < 100.0);
    assert!(small.decode(&json!(42)).is_success());

    let errors = unwrap_failure(small.decode(&json!(400)));
    assert_eq!(
        errors.first().expected,
        "A value that satisfies the predicate"
    );
    assert_eq!(errors.first().found, "400.0");
}
