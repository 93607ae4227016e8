//! Tagged-union dispatch.
//!
//! A [`TaggedUnion`] first extracts a discriminant from the input with a tag
//! decoder, then looks it up in a variant table to pick the decoder for the
//! whole value. [`enumeration`] is the common special case where the tag is
//! a bare string and every variant is a constant.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::decode::primitive::{string, succeed};
use crate::decode::traits::{BoxDecoder, Decoder};
use crate::error::{DecodeError, DecodeErrors};
use crate::path::ValuePath;
use crate::DecodeResult;

/// Returned by [`TaggedUnion::strict`] when the same tag is registered twice.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("variant tag {tag} registered more than once")]
pub struct DuplicateTagError {
    /// The rendered duplicate tag.
    pub tag: String,
}

/// Dispatches on a discriminant extracted from the input.
///
/// Decoding proceeds in two steps: the tag decoder runs against the input,
/// and its output selects a variant decoder that then runs against the
/// *original* input (not the discriminant). A failing tag decode propagates
/// unchanged; an unknown discriminant fails with a single error listing
/// every registered tag.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::tagged_union(
///     decode::field("kind", decode::string()),
///     vec![
///         ("circle".to_string(), decode::field("radius", decode::int()).boxed()),
///         ("square".to_string(), decode::field("side", decode::int()).boxed()),
///     ],
/// );
///
/// let result = decoder.decode(&json!({"kind": "circle", "radius": 3}));
/// assert_eq!(result.into_result().unwrap(), 3);
/// ```
pub struct TaggedUnion<K: 'static, T: 'static> {
    tag: BoxDecoder<K>,
    variants: IndexMap<K, BoxDecoder<T>>,
}

/// Builds a [`TaggedUnion`] from a tag decoder and a `(tag, decoder)` list.
///
/// Registering the same tag twice is accepted: the last registration
/// silently wins. Use [`TaggedUnion::strict`] to reject duplicates instead.
pub fn tagged_union<K, T, D>(tag: D, variants: Vec<(K, BoxDecoder<T>)>) -> TaggedUnion<K, T>
where
    D: Decoder<Output = K> + 'static,
    K: Eq + Hash + Debug + Send + Sync + 'static,
    T: 'static,
{
    let mut table = IndexMap::with_capacity(variants.len());
    for (tag_value, decoder) in variants {
        table.insert(tag_value, decoder);
    }
    TaggedUnion {
        tag: Box::new(tag),
        variants: table,
    }
}

impl<K, T> TaggedUnion<K, T>
where
    K: Eq + Hash + Debug + Send + Sync + 'static,
    T: 'static,
{
    /// Builds a [`TaggedUnion`], failing if any tag is registered twice.
    ///
    /// This is the opt-in alternative to the default last-wins behavior of
    /// [`tagged_union`].
    pub fn strict<D>(
        tag: D,
        variants: Vec<(K, BoxDecoder<T>)>,
    ) -> Result<Self, DuplicateTagError>
    where
        D: Decoder<Output = K> + 'static,
    {
        let mut table = IndexMap::with_capacity(variants.len());
        for (tag_value, decoder) in variants {
            if table.contains_key(&tag_value) {
                return Err(DuplicateTagError {
                    tag: format!("{:?}", tag_value),
                });
            }
            table.insert(tag_value, decoder);
        }
        Ok(TaggedUnion {
            tag: Box::new(tag),
            variants: table,
        })
    }

    /// Renders the full set of legal discriminants, joined with `" | "`.
    fn known_tags(&self) -> String {
        self.variants
            .keys()
            .map(|k| format!("{:?}", k))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Best-effort recovery of the tag's location for the unknown-tag error.
    ///
    /// The tag decoder is re-run against a null input purely to harvest the
    /// path of whatever error it produces. This is a heuristic: the tag
    /// decoder may behave differently on null than on the real input, and if
    /// it somehow succeeds the path stays empty.
    fn recover_tag_path(&self) -> ValuePath {
        match self.tag.decode(&Value::Null) {
            Validation::Failure(errors) => errors.first().path.clone(),
            Validation::Success(_) => ValuePath::root(),
        }
    }
}

impl<K, T> Decoder for TaggedUnion<K, T>
where
    K: Eq + Hash + Debug + Send + Sync + 'static,
    T: 'static,
{
    type Output = T;

    fn decode(&self, value: &Value) -> DecodeResult<T> {
        let tag_value = match self.tag.decode(value) {
            Validation::Success(k) => k,
            Validation::Failure(e) => return Validation::Failure(e),
        };

        match self.variants.get(&tag_value) {
            Some(variant) => variant.decode(value),
            None => Validation::Failure(DecodeErrors::single(
                DecodeError::new(self.known_tags(), format!("{:?}", tag_value))
                    .with_path(self.recover_tag_path()),
            )),
        }
    }
}

/// Builds a decoder over a fixed set of `(match string, value)` pairs.
///
/// The tag is decoded as a bare string; on a match the paired value is
/// returned regardless of the rest of the input. Unknown strings fail with
/// the union-of-tags error.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Level {
///     Info,
///     Warn,
/// }
///
/// let decoder = decode::enumeration(vec![
///     ("info", Level::Info),
///     ("warn", Level::Warn),
/// ]);
///
/// assert_eq!(decoder.decode(&json!("warn")).into_result(), Ok(Level::Warn));
/// assert!(decoder.decode(&json!("debug")).is_failure());
/// ```
pub fn enumeration<S, T>(variants: Vec<(S, T)>) -> TaggedUnion<String, T>
where
    S: Into<String>,
    T: Clone + Send + Sync + 'static,
{
    tagged_union(
        string(),
        variants
            .into_iter()
            .map(|(tag, value)| (tag.into(), succeed(value).boxed()))
            .collect(),
    )
}
