//! Error types for decode failures.
//!
//! This module provides types for representing decode errors with an
//! expected/found description and the access path to the failure.

mod decode_error;

pub use decode_error::{DecodeError, DecodeErrors};
