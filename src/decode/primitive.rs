//! Leaf decoders for the base dynamic value shapes.
//!
//! These are the decoders everything else composes: type-checked extraction
//! of booleans, ints, floats, strings, lists, and object fields. Each one
//! fails fast on a type mismatch with a single error describing what was
//! expected and what was actually there.

use serde_json::Value;
use stillwater::Validation;

use crate::decode::traits::Decoder;
use crate::error::{DecodeError, DecodeErrors};
use crate::path::PathSegment;
use crate::DecodeResult;

/// Classifies a dynamic value for the `found` side of a type error.
pub(crate) fn classify(value: &Value) -> &'static str {
    match value {
        Value::Null => "Nothing",
        Value::Bool(_) => "A bool",
        Value::Number(n) => {
            if n.is_f64() {
                "A float"
            } else {
                "An int"
            }
        }
        Value::String(_) => "A string",
        Value::Array(_) => "A list",
        Value::Object(_) => "An object",
    }
}

/// Renders a dynamic value for the `found` side of a value-level error.
pub(crate) fn render(value: &Value) -> String {
    value.to_string()
}

/// Builds the single-error failure every leaf type check produces.
pub(crate) fn type_error<T>(expected: &str, value: &Value) -> DecodeResult<T> {
    Validation::Failure(DecodeErrors::single(DecodeError::new(
        expected,
        classify(value),
    )))
}

/// Decodes a native boolean.
pub fn boolean() -> BoolDecoder {
    BoolDecoder
}

/// See [`boolean`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolDecoder;

impl Decoder for BoolDecoder {
    type Output = bool;

    fn decode(&self, value: &Value) -> DecodeResult<bool> {
        match value {
            Value::Bool(b) => Validation::Success(*b),
            other => type_error("A bool", other),
        }
    }
}

/// Decodes a native integer.
///
/// Accepts JSON numbers with an integral representation; floats fail.
pub fn int() -> IntDecoder {
    IntDecoder
}

/// See [`int`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IntDecoder;

impl Decoder for IntDecoder {
    type Output = i64;

    fn decode(&self, value: &Value) -> DecodeResult<i64> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Validation::Success(i),
                None => type_error("An int", value),
            },
            other => type_error("An int", other),
        }
    }
}

/// Decodes a native float.
///
/// Accepts only JSON numbers stored as floats; integers fail. Use
/// [`number`](crate::decode::number) to accept both.
pub fn float() -> FloatDecoder {
    FloatDecoder
}

/// See [`float`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatDecoder;

impl Decoder for FloatDecoder {
    type Output = f64;

    fn decode(&self, value: &Value) -> DecodeResult<f64> {
        match value {
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(f) => Validation::Success(f),
                None => type_error("A float", value),
            },
            other => type_error("A float", other),
        }
    }
}

/// Decodes a native string.
pub fn string() -> StringDecoder {
    StringDecoder
}

/// See [`string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDecoder;

impl Decoder for StringDecoder {
    type Output = String;

    fn decode(&self, value: &Value) -> DecodeResult<String> {
        match value {
            Value::String(s) => Validation::Success(s.clone()),
            other => type_error("A string", other),
        }
    }
}

/// Decodes a native array, running every element through `inner`.
///
/// Decoding stops at the first failing element; that element's errors are
/// propagated with its index prepended to their paths.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::list(decode::string());
///
/// let result = decoder.decode(&json!(["a", "b"]));
/// assert!(result.is_success());
///
/// let result = decoder.decode(&json!(["a", 1]));
/// let errors = result.into_result().unwrap_err();
/// assert_eq!(errors.first().path.to_string(), "[1]");
/// ```
pub fn list<D: Decoder>(inner: D) -> ListDecoder<D> {
    ListDecoder { inner }
}

/// See [`list`].
#[derive(Clone)]
pub struct ListDecoder<D> {
    inner: D,
}

impl<D: Decoder> Decoder for ListDecoder<D> {
    type Output = Vec<D::Output>;

    fn decode(&self, value: &Value) -> DecodeResult<Vec<D::Output>> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return type_error("A list", value),
        };

        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.inner.decode(item) {
                Validation::Success(v) => decoded.push(v),
                Validation::Failure(e) => {
                    return Validation::Failure(e.prefixed(PathSegment::index(index)))
                }
            }
        }
        Validation::Success(decoded)
    }
}

/// Decodes the named field of an object, running its value through `inner`.
///
/// Every failure this decoder produces or propagates is reported under the
/// field's path segment — including when the input is not an object at all.
/// That uniform tagging is what lets outer combinators recover a meaningful
/// path from a field decoder without knowing its name.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::field("name", decode::string());
///
/// let result = decoder.decode(&json!({"name": "ada"}));
/// assert_eq!(result.into_result().unwrap(), "ada");
///
/// let errors = decoder.decode(&json!({})).into_result().unwrap_err();
/// assert_eq!(errors.first().path.to_string(), "name");
/// ```
pub fn field<D: Decoder>(name: impl Into<String>, inner: D) -> FieldDecoder<D> {
    FieldDecoder {
        name: name.into(),
        inner,
    }
}

/// See [`field`].
#[derive(Clone)]
pub struct FieldDecoder<D> {
    name: String,
    inner: D,
}

impl<D: Decoder> Decoder for FieldDecoder<D> {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> DecodeResult<D::Output> {
        let segment = PathSegment::field(self.name.clone());

        let map = match value.as_object() {
            Some(map) => map,
            None => {
                return Validation::Failure(DecodeErrors::single(
                    DecodeError::new("An object", classify(value)).prefixed(segment),
                ))
            }
        };

        match map.get(&self.name) {
            Some(inner_value) => match self.inner.decode(inner_value) {
                Validation::Success(v) => Validation::Success(v),
                Validation::Failure(e) => Validation::Failure(e.prefixed(segment)),
            },
            None => Validation::Failure(DecodeErrors::single(
                DecodeError::new("A field", "Nothing").prefixed(segment),
            )),
        }
    }
}

/// A decoder that ignores its input and always succeeds with a clone of
/// `value`.
///
/// This is the constant decoder [`enumeration`](crate::decode::enumeration)
/// pairs with each match string.
pub fn succeed<T>(value: T) -> SucceedDecoder<T>
where
    T: Clone + Send + Sync,
{
    SucceedDecoder { value }
}

/// See [`succeed`].
#[derive(Debug, Clone)]
pub struct SucceedDecoder<T> {
    value: T,
}

impl<T> Decoder for SucceedDecoder<T>
where
    T: Clone + Send + Sync,
{
    type Output = T;

    fn decode(&self, _value: &Value) -> DecodeResult<T> {
        Validation::Success(self.value.clone())
    }
}
