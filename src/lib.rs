//! # Inquest
//!
//! A library of composable decoders: values that validate and convert an
//! untyped JSON tree into strongly-typed Rust values, or fail with a
//! structured, localized error list.
//!
//! ## Overview
//!
//! Decoders are built ahead of time from primitives and combinators, then
//! applied to a [`serde_json::Value`]. A decoder never panics on malformed
//! input; every failure comes back as a non-empty list of
//! [`DecodeError`]s, each carrying what was expected, what was found, and
//! the path from the decode root to the failure. The fan-out combinator
//! [`decode::all`] runs every branch regardless of earlier failures and
//! concatenates their errors, so one decode reports everything that is
//! wrong instead of stopping at the first problem. Error accumulation rides
//! on stillwater's `Validation` type, the same applicative discipline used
//! for the rest of the error model.
//!
//! ## Core Types
//!
//! - [`decode::Decoder`]: the decoding capability every combinator
//!   implements
//! - [`DecodeError`]: a single failure with `expected`, `found`, and `path`
//! - [`DecodeErrors`]: the non-empty, ordered error collection
//! - [`ValuePath`]: paths into nested documents (e.g. `users[0].email`)
//!
//! ## Example
//!
//! ```rust
//! use inquest::decode::{self, Decoder};
//! use serde_json::json;
//!
//! let decoder = decode::field("age", decode::non_negative_int());
//!
//! let result = decoder.decode(&json!({"age": 42}));
//! assert!(result.is_success());
//!
//! // Failures carry expected/found and the path to the bad value.
//! let result = decoder.decode(&json!({"age": -1}));
//! let errors = result.into_result().unwrap_err();
//! assert_eq!(errors.first().expected, "A non-negative int");
//! assert_eq!(errors.first().path.to_string(), "age");
//! ```

pub mod decode;
pub mod error;
pub mod path;

pub use decode::{BoxDecoder, Decoder};
pub use error::{DecodeError, DecodeErrors};
pub use path::{PathSegment, ValuePath};

/// Type alias for decode results using [`DecodeErrors`].
pub type DecodeResult<T> = stillwater::Validation<T, DecodeErrors>;
