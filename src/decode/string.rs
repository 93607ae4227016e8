//! String decoders beyond the raw string leaf.

use regex::Regex;
use serde_json::Value;
use stillwater::Validation;

use crate::decode::primitive::string;
use crate::decode::traits::Decoder;
use crate::decode::union::{enumeration, TaggedUnion};
use crate::error::{DecodeError, DecodeErrors};
use crate::DecodeResult;

/// Decodes a string and rejects the empty string.
pub fn nonempty_string() -> NonEmptyStringDecoder {
    NonEmptyStringDecoder
}

/// See [`nonempty_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyStringDecoder;

impl Decoder for NonEmptyStringDecoder {
    type Output = String;

    fn decode(&self, value: &Value) -> DecodeResult<String> {
        match string().decode(value) {
            Validation::Success(s) if s.is_empty() => Validation::Failure(DecodeErrors::single(
                DecodeError::new("A non-empty string", "\"\""),
            )),
            other => other,
        }
    }
}

/// Decodes a string-encoded boolean.
///
/// Matches case-sensitively against a fixed table: `true`, `True`, `on`,
/// `On`, `yes`, `Yes` decode to `true`; `false`, `False`, `off`, `Off`,
/// `no`, `No` decode to `false`. Any other string fails with the
/// union-of-tags error listing every accepted token, because this decoder is
/// an [`enumeration`] over that table.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::bool_string();
///
/// assert_eq!(decoder.decode(&json!("yes")).into_result(), Ok(true));
/// assert_eq!(decoder.decode(&json!("Off")).into_result(), Ok(false));
/// assert!(decoder.decode(&json!("YES")).is_failure());
/// ```
pub fn bool_string() -> TaggedUnion<String, bool> {
    enumeration(vec![
        ("true", true),
        ("True", true),
        ("on", true),
        ("On", true),
        ("yes", true),
        ("Yes", true),
        ("false", false),
        ("False", false),
        ("off", false),
        ("Off", false),
        ("no", false),
        ("No", false),
    ])
}

/// Decodes a string and requires it to match `pattern`.
///
/// Returns an error if the pattern itself is not a valid regex.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::matching(r"^[a-z]+$").unwrap();
///
/// assert!(decoder.decode(&json!("abc")).is_success());
/// assert!(decoder.decode(&json!("ABC")).is_failure());
/// ```
pub fn matching(pattern: &str) -> Result<MatchingDecoder, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(MatchingDecoder {
        regex,
        pattern: pattern.to_string(),
    })
}

/// See [`matching`].
#[derive(Debug, Clone)]
pub struct MatchingDecoder {
    regex: Regex,
    pattern: String,
}

impl Decoder for MatchingDecoder {
    type Output = String;

    fn decode(&self, value: &Value) -> DecodeResult<String> {
        match string().decode(value) {
            Validation::Success(s) => {
                if self.regex.is_match(&s) {
                    Validation::Success(s)
                } else {
                    Validation::Failure(DecodeErrors::single(DecodeError::new(
                        format!("A string matching '{}'", self.pattern),
                        format!("{:?}", s),
                    )))
                }
            }
            Validation::Failure(e) => Validation::Failure(e),
        }
    }
}
