//! The core decoder capability.
//!
//! This module provides the [`Decoder`] trait that every primitive and
//! combinator in the crate implements. A decoder is a stateless, reusable
//! value: applying it to a dynamic value either produces a typed output or a
//! non-empty list of [`DecodeError`](crate::DecodeError)s. Nothing is thrown;
//! all failure travels through the return value.

use std::sync::Arc;

use serde_json::Value;

use crate::DecodeResult;

/// A decoder from a dynamic value to a typed output.
///
/// Decoders are pure values: they hold no mutable state, can be applied any
/// number of times, and running one twice on the same input yields identical
/// results. The `Send + Sync` bounds let decoders be shared across threads
/// and used as trait objects like [`BoxDecoder`].
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::list(decode::int());
///
/// let result = decoder.decode(&json!([1, 2, 3]));
/// assert_eq!(result.into_result().unwrap(), vec![1, 2, 3]);
/// ```
pub trait Decoder: Send + Sync {
    /// The output type produced by a successful decode.
    type Output;

    /// Decodes a dynamic value.
    ///
    /// Returns `Validation::Success` with the typed value on success, or
    /// `Validation::Failure` with at least one [`DecodeError`](crate::DecodeError)
    /// on failure.
    fn decode(&self, value: &Value) -> DecodeResult<Self::Output>;

    /// Boxes this decoder as a [`BoxDecoder`] trait object.
    ///
    /// Combinators that take a homogeneous sequence of decoders, like
    /// [`all`](crate::decode::all) and [`tagged_union`](crate::decode::tagged_union),
    /// work with boxed decoders so branches of different concrete types can
    /// sit side by side.
    fn boxed(self) -> BoxDecoder<Self::Output>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A boxed decoder trait object producing `T`.
pub type BoxDecoder<T> = Box<dyn Decoder<Output = T>>;

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> DecodeResult<Self::Output> {
        (**self).decode(value)
    }
}

impl<D: Decoder + ?Sized> Decoder for Arc<D> {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> DecodeResult<Self::Output> {
        (**self).decode(value)
    }
}

/// A decoder backed by a plain function.
///
/// Created by [`from_fn`]; useful for one-off decoders that do not warrant a
/// named type.
#[derive(Clone)]
pub struct FnDecoder<F> {
    f: F,
}

/// Wraps a function as a decoder.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{from_fn, Decoder};
/// use inquest::{DecodeError, DecodeErrors};
/// use serde_json::{json, Value};
/// use stillwater::Validation;
///
/// let null_only = from_fn(|value: &Value| match value {
///     Value::Null => Validation::Success(()),
///     _ => Validation::Failure(DecodeErrors::single(DecodeError::new(
///         "Nothing",
///         "something",
///     ))),
/// });
///
/// assert!(null_only.decode(&json!(null)).is_success());
/// assert!(null_only.decode(&json!(1)).is_failure());
/// ```
pub fn from_fn<T, F>(f: F) -> FnDecoder<F>
where
    F: Fn(&Value) -> DecodeResult<T> + Send + Sync,
{
    FnDecoder { f }
}

impl<T, F> Decoder for FnDecoder<F>
where
    F: Fn(&Value) -> DecodeResult<T> + Send + Sync,
{
    type Output = T;

    fn decode(&self, value: &Value) -> DecodeResult<T> {
        (self.f)(value)
    }
}
