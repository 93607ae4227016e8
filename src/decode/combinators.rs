//! Higher-order decoders: fan-out validation, refinement, and embedded
//! documents.
//!
//! The centerpiece is [`all`], which runs every branch against the same
//! input and concatenates the failures instead of stopping at the first one.
//! That total-evaluation policy is what turns "fix one error, resubmit,
//! discover the next" into a single round trip.

use std::fmt::Debug;

use serde_json::Value;
use stillwater::Validation;

use crate::decode::primitive::string;
use crate::decode::traits::{BoxDecoder, Decoder};
use crate::error::{DecodeError, DecodeErrors};
use crate::DecodeResult;

/// Runs every decoder against the same input, accumulating all failures.
///
/// If every branch succeeds, the result is the list of outputs in branch
/// order. If any branch fails, the result is the concatenation of every
/// failing branch's errors, still in branch order; succeeding branches
/// contribute nothing. Every branch is evaluated either way — there is no
/// short-circuit on the first failure.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::all(vec![
///     decode::field("name", decode::string()).boxed(),
///     decode::field("email", decode::string()).boxed(),
/// ]);
///
/// // Both fields are missing, so both errors come back at once.
/// let errors = decoder.decode(&json!({})).into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn all<T: 'static>(decoders: Vec<BoxDecoder<T>>) -> AllDecoder<T> {
    AllDecoder { decoders }
}

/// See [`all`].
pub struct AllDecoder<T: 'static> {
    decoders: Vec<BoxDecoder<T>>,
}

impl<T: 'static> Decoder for AllDecoder<T> {
    type Output = Vec<T>;

    fn decode(&self, value: &Value) -> DecodeResult<Vec<T>> {
        // Every branch runs to completion before any result is inspected.
        let results: Vec<DecodeResult<T>> =
            self.decoders.iter().map(|d| d.decode(value)).collect();

        let mut successes = Vec::with_capacity(results.len());
        let mut failures: Vec<DecodeError> = Vec::new();
        for result in results {
            match result {
                Validation::Success(v) => successes.push(v),
                Validation::Failure(e) => failures.extend(e),
            }
        }

        if failures.is_empty() {
            Validation::Success(successes)
        } else {
            Validation::Failure(DecodeErrors::from_vec(failures))
        }
    }
}

/// Refines a decoder with a predicate over its output.
///
/// The inner decoder runs first; its failures propagate unchanged. On
/// success the predicate is applied, and a `false` verdict fails with the
/// rendered value as `found`.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let even = decode::when(decode::int(), |n: &i64| n % 2 == 0);
///
/// assert!(even.decode(&json!(4)).is_success());
/// assert!(even.decode(&json!(3)).is_failure());
/// ```
pub fn when<D, F>(inner: D, predicate: F) -> WhenDecoder<D, F>
where
    D: Decoder,
    D::Output: Debug,
    F: Fn(&D::Output) -> bool + Send + Sync,
{
    WhenDecoder { inner, predicate }
}

/// See [`when`].
#[derive(Clone)]
pub struct WhenDecoder<D, F> {
    inner: D,
    predicate: F,
}

impl<D, F> Decoder for WhenDecoder<D, F>
where
    D: Decoder,
    D::Output: Debug,
    F: Fn(&D::Output) -> bool + Send + Sync,
{
    type Output = D::Output;

    fn decode(&self, value: &Value) -> DecodeResult<D::Output> {
        match self.inner.decode(value) {
            Validation::Success(v) => {
                if (self.predicate)(&v) {
                    Validation::Success(v)
                } else {
                    Validation::Failure(DecodeErrors::single(DecodeError::new(
                        "A value that satisfies the predicate",
                        format!("{:?}", v),
                    )))
                }
            }
            Validation::Failure(e) => Validation::Failure(e),
        }
    }
}

/// Decodes a JSON document embedded in a string.
///
/// The input must be a string containing JSON text; that text is parsed and
/// handed to `inner`, whose failures surface exactly as they would on a
/// directly-decoded value. Malformed JSON text fails with a single error.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::json_string(decode::field("x", decode::int()));
///
/// let result = decoder.decode(&json!("{\"x\":1}"));
/// assert_eq!(result.into_result().unwrap(), 1);
///
/// let errors = decoder.decode(&json!("not json")).into_result().unwrap_err();
/// assert_eq!(errors.first().expected, "A valid JSON-encoded string");
/// ```
pub fn json_string<D: Decoder>(inner: D) -> JsonStringDecoder<D> {
    JsonStringDecoder { inner }
}

/// See [`json_string`].
#[derive(Clone)]
pub struct JsonStringDecoder<D> {
    inner: D,
}

impl<D: Decoder> Decoder for JsonStringDecoder<D> {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> DecodeResult<D::Output> {
        let text = match string().decode(value) {
            Validation::Success(s) => s,
            Validation::Failure(e) => return Validation::Failure(e),
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(document) => self.inner.decode(&document),
            Err(_) => Validation::Failure(DecodeErrors::single(DecodeError::new(
                "A valid JSON-encoded string",
                text,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::primitive::{field, int};
    use serde_json::json;

    fn unwrap_failure<T: std::fmt::Debug>(v: DecodeResult<T>) -> DecodeErrors {
        v.into_result().unwrap_err()
    }

    #[test]
    fn test_all_returns_results_in_branch_order() {
        let decoder = all(vec![
            field("b", int()).boxed(),
            field("a", int()).boxed(),
        ]);
        let result = decoder.decode(&json!({"a": 1, "b": 2}));
        assert_eq!(result.into_result(), Ok(vec![2, 1]));
    }

    #[test]
    fn test_all_concatenates_only_failing_branches() {
        let decoder = all(vec![
            field("ok", int()).boxed(),
            field("missing", int()).boxed(),
            field("wrong", int()).boxed(),
        ]);
        let errors = unwrap_failure(decoder.decode(&json!({"ok": 1, "wrong": "x"})));
        let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["missing", "wrong"]);
    }

    #[test]
    fn test_all_of_nothing_succeeds_empty() {
        let decoder: AllDecoder<i64> = all(vec![]);
        assert_eq!(decoder.decode(&json!(null)).into_result(), Ok(vec![]));
    }

    #[test]
    fn test_when_passes_value_through() {
        let decoder = when(int(), |n: &i64| *n > 0);
        assert_eq!(decoder.decode(&json!(5)).into_result(), Ok(5));
    }

    #[test]
    fn test_when_failure_renders_value() {
        let decoder = when(int(), |n: &i64| *n > 0);
        let errors = unwrap_failure(decoder.decode(&json!(-5)));
        assert_eq!(
            errors.first().expected,
            "A value that satisfies the predicate"
        );
        assert_eq!(errors.first().found, "-5");
    }

    #[test]
    fn test_when_propagates_inner_failure_unchanged() {
        let decoder = when(int(), |_: &i64| true);
        let errors = unwrap_failure(decoder.decode(&json!("x")));
        assert_eq!(errors.first().expected, "An int");
    }

    #[test]
    fn test_json_string_surfaces_inner_errors() {
        let decoder = json_string(field("x", int()));
        let errors = unwrap_failure(decoder.decode(&json!("{\"x\":\"y\"}")));
        assert_eq!(errors.first().expected, "An int");
        assert_eq!(errors.first().path.to_string(), "x");
    }

    #[test]
    fn test_json_string_requires_string_input() {
        let decoder = json_string(int());
        let errors = unwrap_failure(decoder.decode(&json!(7)));
        assert_eq!(errors.first().expected, "A string");
    }
}
