//! Collection decoders: sets, non-empty lists, and arraylike objects.
//!
//! The set decoders accept either a native array or an arraylike object (an
//! object with a `"length"` field and positional `"0"`, `"1"`, ... keys),
//! the shape some serializers emit for indexed collections.

use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexSet;
use serde_json::Value;
use stillwater::Validation;

use crate::decode::combinators::all;
use crate::decode::numeric::non_negative_int;
use crate::decode::primitive::{field, render, type_error};
use crate::decode::traits::{BoxDecoder, Decoder};
use crate::error::{DecodeError, DecodeErrors};
use crate::path::PathSegment;
use crate::DecodeResult;

/// Decodes a native array or an arraylike object into a `Vec`.
///
/// Native arrays abort on the first failing element; arraylike objects go
/// through [`decode_arraylike`], which accumulates.
fn decode_listlike<T: 'static>(
    inner: &Arc<dyn Decoder<Output = T>>,
    value: &Value,
) -> DecodeResult<Vec<T>> {
    match value {
        Value::Array(items) => {
            let mut decoded = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match inner.decode(item) {
                    Validation::Success(v) => decoded.push(v),
                    Validation::Failure(e) => {
                        return Validation::Failure(e.prefixed(PathSegment::index(index)))
                    }
                }
            }
            Validation::Success(decoded)
        }
        Value::Object(_) => decode_arraylike(inner, value),
        other => type_error("A list", other),
    }
}

/// Decodes an arraylike object by reading `"length"` and then each
/// positional field through [`all`].
fn decode_arraylike<T: 'static>(
    inner: &Arc<dyn Decoder<Output = T>>,
    value: &Value,
) -> DecodeResult<Vec<T>> {
    let length = match field("length", non_negative_int()).decode(value) {
        Validation::Success(n) => n as usize,
        Validation::Failure(e) => return Validation::Failure(e),
    };

    let positions: Vec<BoxDecoder<T>> = (0..length)
        .map(|index| field(index.to_string(), Arc::clone(inner)).boxed())
        .collect();
    all(positions).decode(value)
}

/// Decodes a collection into a set, silently dropping duplicate values.
///
/// Accepts a native array or an arraylike object. The output preserves
/// first-occurrence order. Use [`exact_set`] to reject duplicates instead.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::set(decode::int());
///
/// let result = decoder.decode(&json!([1, 2, 2, 3]));
/// let set = result.into_result().unwrap();
/// assert_eq!(set.len(), 3);
/// ```
pub fn set<D>(inner: D) -> SetDecoder<D::Output>
where
    D: Decoder + 'static,
    D::Output: Eq + Hash,
{
    SetDecoder {
        inner: Arc::new(inner),
    }
}

/// See [`set`].
pub struct SetDecoder<T: 'static> {
    inner: Arc<dyn Decoder<Output = T>>,
}

impl<T> Decoder for SetDecoder<T>
where
    T: Eq + Hash + 'static,
{
    type Output = IndexSet<T>;

    fn decode(&self, value: &Value) -> DecodeResult<IndexSet<T>> {
        match decode_listlike(&self.inner, value) {
            Validation::Success(items) => Validation::Success(items.into_iter().collect()),
            Validation::Failure(e) => Validation::Failure(e),
        }
    }
}

/// Like [`set`], but fails if the input contained any duplicate value.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::exact_set(decode::int());
///
/// assert!(decoder.decode(&json!([1, 2, 3])).is_success());
/// assert!(decoder.decode(&json!([1, 2, 2, 3])).is_failure());
/// ```
pub fn exact_set<D>(inner: D) -> ExactSetDecoder<D::Output>
where
    D: Decoder + 'static,
    D::Output: Eq + Hash,
{
    ExactSetDecoder {
        inner: Arc::new(inner),
    }
}

/// See [`exact_set`].
pub struct ExactSetDecoder<T: 'static> {
    inner: Arc<dyn Decoder<Output = T>>,
}

impl<T> Decoder for ExactSetDecoder<T>
where
    T: Eq + Hash + 'static,
{
    type Output = IndexSet<T>;

    fn decode(&self, value: &Value) -> DecodeResult<IndexSet<T>> {
        let items = match decode_listlike(&self.inner, value) {
            Validation::Success(items) => items,
            Validation::Failure(e) => return Validation::Failure(e),
        };

        let original_len = items.len();
        let deduped: IndexSet<T> = items.into_iter().collect();
        if deduped.len() < original_len {
            Validation::Failure(DecodeErrors::single(DecodeError::new(
                "A list with no duplicate values",
                render(value),
            )))
        } else {
            Validation::Success(deduped)
        }
    }
}

/// Decodes a native array and requires at least one element.
pub fn nonempty_list<D: Decoder>(inner: D) -> NonEmptyListDecoder<D> {
    NonEmptyListDecoder { inner }
}

/// See [`nonempty_list`].
#[derive(Clone)]
pub struct NonEmptyListDecoder<D> {
    inner: D,
}

impl<D: Decoder> Decoder for NonEmptyListDecoder<D> {
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

        if decoded.is_empty() {
            Validation::Failure(DecodeErrors::single(DecodeError::new(
                "A non-empty list",
                render(value),
            )))
        } else {
            Validation::Success(decoded)
        }
    }
}

/// Decodes an arraylike object: `{"length": 2, "0": ..., "1": ...}`.
///
/// The `"length"` field is read as a non-negative int, then each positional
/// field is decoded in ascending index order. Failing positions accumulate
/// through [`all`], so a single decode reports every bad position at once.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::arraylike(decode::string());
///
/// let result = decoder.decode(&json!({"length": 2, "0": "a", "1": "b"}));
/// assert_eq!(
///     result.into_result().unwrap(),
///     vec!["a".to_string(), "b".to_string()]
/// );
/// ```
pub fn arraylike<D>(inner: D) -> ArraylikeDecoder<D::Output>
where
    D: Decoder + 'static,
{
    ArraylikeDecoder {
        inner: Arc::new(inner),
    }
}

/// See [`arraylike`].
pub struct ArraylikeDecoder<T: 'static> {
    inner: Arc<dyn Decoder<Output = T>>,
}

impl<T: 'static> Decoder for ArraylikeDecoder<T> {
    type Output = Vec<T>;

    fn decode(&self, value: &Value) -> DecodeResult<Vec<T>> {
        match value {
            Value::Object(_) => decode_arraylike(&self.inner, value),
            other => type_error("An object", other),
        }
    }
}
