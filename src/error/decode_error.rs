//! Decode error types.
//!
//! This module provides [`DecodeError`] for single decode failures and
//! [`DecodeErrors`] for the non-empty, ordered collection a failed decode
//! returns.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::{PathSegment, ValuePath};

/// A single decode error with full context.
///
/// `DecodeError` captures the three pieces of information a caller needs to
/// act on a failure:
/// - **expected**: a human-readable description of what was wanted
/// - **found**: a rendering of what was actually present
/// - **path**: the access path from the decode root to the failure,
///   outermost segment first
///
/// # Example
///
/// ```rust
/// use inquest::{DecodeError, PathSegment};
///
/// let error = DecodeError::new("An int", "A string")
///     .prefixed(PathSegment::field("age"));
///
/// assert_eq!(error.expected, "An int");
/// assert_eq!(error.path.to_string(), "age");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    /// Description of what the decoder wanted.
    pub expected: String,
    /// Rendering of what was actually present.
    pub found: String,
    /// The path to the value that failed to decode.
    pub path: ValuePath,
}

impl DecodeError {
    /// Creates a new decode error at the root path.
    pub fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
            path: ValuePath::root(),
        }
    }

    /// Replaces the path and returns self for chaining.
    pub fn with_path(mut self, path: ValuePath) -> Self {
        self.path = path;
        self
    }

    /// Returns this error with `segment` prepended to its path.
    ///
    /// Decoders that descend into a field or element call this when
    /// propagating an inner failure, so the outermost segment ends up first.
    pub fn prefixed(mut self, segment: PathSegment) -> Self {
        self.path = self.path.prefixed(segment);
        self
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "expected {}, found {}", self.expected, self.found)
        } else {
            write!(
                f,
                "{}: expected {}, found {}",
                self.path, self.expected, self.found
            )
        }
    }
}

impl std::error::Error for DecodeError {}

/// A non-empty collection of decode errors.
///
/// `DecodeErrors` wraps a `NonEmptyVec<DecodeError>` to guarantee that at
/// least one error is present, which is what `Validation<T, DecodeErrors>`
/// requires of its failure channel. Order is accumulation order and
/// duplicates are preserved.
///
/// # Combining Errors
///
/// `DecodeErrors` implements `Semigroup`, so independent failures can be
/// concatenated:
///
/// ```rust
/// use inquest::{DecodeError, DecodeErrors};
/// use stillwater::prelude::*;
///
/// let first = DecodeErrors::single(DecodeError::new("An int", "A string"));
/// let second = DecodeErrors::single(DecodeError::new("A bool", "Nothing"));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeErrors(NonEmptyVec<DecodeError>);

impl DecodeErrors {
    /// Creates a `DecodeErrors` containing a single error.
    pub fn single(error: DecodeError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `DecodeErrors` from a `Vec<DecodeError>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<DecodeError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("DecodeErrors requires at least one error"))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &DecodeError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &DecodeError {
        self.0.head()
    }

    /// Returns all errors whose path equals `path`.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&DecodeError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Converts this collection into a `Vec<DecodeError>`.
    pub fn into_vec(self) -> Vec<DecodeError> {
        self.0.into_vec()
    }

    /// Returns this collection with `segment` prepended to every error's path.
    pub fn prefixed(self, segment: PathSegment) -> Self {
        let errors = self
            .0
            .into_vec()
            .into_iter()
            .map(|e| e.prefixed(segment.clone()))
            .collect();
        Self::from_vec(errors)
    }
}

impl Semigroup for DecodeErrors {
    fn combine(self, other: Self) -> Self {
        DecodeErrors(self.0.combine(other.0))
    }
}

impl Display for DecodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decoding failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeErrors {}

impl IntoIterator for DecodeErrors {
    type Item = DecodeError;
    type IntoIter = std::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeError;
    type IntoIter = Box<dyn Iterator<Item = &'a DecodeError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// DecodeError and DecodeErrors hold only owned data and must stay shareable
// across threads alongside the decoders that produce them.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<DecodeError>();
    assert_sync::<DecodeError>();
    assert_send::<DecodeErrors>();
    assert_sync::<DecodeErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_creation() {
        let error = DecodeError::new("An int", "A string");

        assert_eq!(error.expected, "An int");
        assert_eq!(error.found, "A string");
        assert!(error.path.is_root());
    }

    #[test]
    fn test_decode_error_prefixed() {
        let error = DecodeError::new("An int", "A string")
            .prefixed(PathSegment::index(0))
            .prefixed(PathSegment::field("users"));

        assert_eq!(error.path.to_string(), "users[0]");
    }

    #[test]
    fn test_decode_error_display() {
        let error =
            DecodeError::new("An int", "A string").prefixed(PathSegment::field("age"));

        assert_eq!(error.to_string(), "age: expected An int, found A string");
    }

    #[test]
    fn test_decode_error_display_root() {
        let error = DecodeError::new("A bool", "Nothing");
        assert_eq!(error.to_string(), "expected A bool, found Nothing");
    }

    #[test]
    fn test_decode_errors_single() {
        let error = DecodeError::new("An int", "A float");
        let errors = DecodeErrors::single(error.clone());

        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first(), &error);
    }

    #[test]
    fn test_decode_errors_combine_preserves_order() {
        let errors = DecodeErrors::single(DecodeError::new("first", "x"))
            .combine(DecodeErrors::single(DecodeError::new("second", "y")))
            .combine(DecodeErrors::single(DecodeError::new("third", "z")));

        let expected: Vec<_> = errors.iter().map(|e| e.expected.clone()).collect();
        assert_eq!(expected, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_decode_errors_preserve_duplicates() {
        let error = DecodeError::new("An int", "A string");
        let errors = DecodeErrors::single(error.clone())
            .combine(DecodeErrors::single(error));

        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_decode_errors_prefixed_applies_to_all() {
        let errors = DecodeErrors::single(DecodeError::new("An int", "A string"))
            .combine(DecodeErrors::single(
                DecodeError::new("A bool", "Nothing").prefixed(PathSegment::field("flag")),
            ))
            .prefixed(PathSegment::field("config"));

        let paths: Vec<_> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["config", "config.flag"]);
    }

    #[test]
    fn test_decode_errors_at_path() {
        let path = ValuePath::root().push_field("a");
        let errors = DecodeErrors::single(
            DecodeError::new("An int", "A string").with_path(path.clone()),
        )
        .combine(DecodeErrors::single(DecodeError::new("A bool", "Nothing")));

        assert_eq!(errors.at_path(&path).len(), 1);
        assert_eq!(errors.at_path(&ValuePath::root()).len(), 1);
    }

    #[test]
    fn test_decode_errors_display() {
        let errors = DecodeErrors::single(DecodeError::new("An int", "A string"))
            .combine(DecodeErrors::single(DecodeError::new("A bool", "Nothing")));

        let display = errors.to_string();
        assert!(display.contains("2 error(s)"));
        assert!(display.contains("expected An int, found A string"));
    }

    #[test]
    fn test_decode_errors_into_iter() {
        let errors = DecodeErrors::single(DecodeError::new("a", "b"))
            .combine(DecodeErrors::single(DecodeError::new("c", "d")));

        let collected: Vec<DecodeError> = errors.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
