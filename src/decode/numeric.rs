//! Numeric decoders beyond the raw int/float leaves.
//!
//! This module covers sign-restricted integers, numbers that arrive as
//! strings, and the widening `number` decoder that accepts either native
//! numeric representation.

use serde_json::Value;
use stillwater::Validation;

use crate::decode::primitive::{float, int, string, type_error};
use crate::decode::traits::Decoder;
use crate::error::{DecodeError, DecodeErrors};
use crate::DecodeResult;

/// Decodes an integer and requires it to be zero or greater.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::non_negative_int();
///
/// assert!(decoder.decode(&json!(0)).is_success());
/// assert!(decoder.decode(&json!(-1)).is_failure());
/// ```
pub fn non_negative_int() -> NonNegativeIntDecoder {
    NonNegativeIntDecoder
}

/// See [`non_negative_int`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeIntDecoder;

impl Decoder for NonNegativeIntDecoder {
    type Output = i64;

    fn decode(&self, value: &Value) -> DecodeResult<i64> {
        match int().decode(value) {
            Validation::Success(n) if n < 0 => Validation::Failure(DecodeErrors::single(
                DecodeError::new("A non-negative int", n.to_string()),
            )),
            other => other,
        }
    }
}

/// Decodes a string and parses it as an integer.
///
/// The failure carries the original string as `found`.
pub fn int_string() -> IntStringDecoder {
    IntStringDecoder
}

/// See [`int_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IntStringDecoder;

impl Decoder for IntStringDecoder {
    type Output = i64;

    fn decode(&self, value: &Value) -> DecodeResult<i64> {
        match string().decode(value) {
            Validation::Success(s) => match s.parse::<i64>() {
                Ok(n) => Validation::Success(n),
                Err(_) => Validation::Failure(DecodeErrors::single(DecodeError::new(
                    "A stringified int",
                    s,
                ))),
            },
            Validation::Failure(e) => Validation::Failure(e),
        }
    }
}

/// Decodes a string and parses it as a float.
pub fn float_string() -> FloatStringDecoder {
    FloatStringDecoder
}

/// See [`float_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatStringDecoder;

impl Decoder for FloatStringDecoder {
    type Output = f64;

    fn decode(&self, value: &Value) -> DecodeResult<f64> {
        match string().decode(value) {
            Validation::Success(s) => match s.parse::<f64>() {
                Ok(f) => Validation::Success(f),
                Err(_) => Validation::Failure(DecodeErrors::single(DecodeError::new(
                    "A stringified float",
                    s,
                ))),
            },
            Validation::Failure(e) => Validation::Failure(e),
        }
    }
}

/// Decodes either a native float or a native int, widening ints to `f64`.
///
/// Tries the float representation first and falls back to the int one, so
/// `5` decodes to `5.0` and `5.5` decodes to `5.5`. Strings fail; use
/// [`number_string`] for string-encoded numbers.
pub fn number() -> NumberDecoder {
    NumberDecoder
}

/// See [`number`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberDecoder;

impl Decoder for NumberDecoder {
    type Output = f64;

    fn decode(&self, value: &Value) -> DecodeResult<f64> {
        match float().decode(value) {
            Validation::Success(f) => Validation::Success(f),
            Validation::Failure(_) => match int().decode(value) {
                Validation::Success(i) => Validation::Success(i as f64),
                Validation::Failure(_) => type_error("A number", value),
            },
        }
    }
}

/// The string-encoded counterpart of [`number`].
///
/// Decodes a string and parses it as a float, falling back to an int parse
/// widened to `f64`.
pub fn number_string() -> NumberStringDecoder {
    NumberStringDecoder
}

/// See [`number_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberStringDecoder;

impl Decoder for NumberStringDecoder {
    type Output = f64;

    fn decode(&self, value: &Value) -> DecodeResult<f64> {
        let s = match string().decode(value) {
            Validation::Success(s) => s,
            Validation::Failure(e) => return Validation::Failure(e),
        };
        if let Ok(f) = s.parse::<f64>() {
            return Validation::Success(f);
        }
        if let Ok(i) = s.parse::<i64>() {
            return Validation::Success(i as f64);
        }
        Validation::Failure(DecodeErrors::single(DecodeError::new(
            "A stringified number",
            s,
        )))
    }
}
