//! URI decoding.

use serde_json::Value;
use stillwater::Validation;
use url::Url;

use crate::decode::primitive::string;
use crate::decode::traits::Decoder;
use crate::error::{DecodeError, DecodeErrors};
use crate::DecodeResult;

/// Decodes a string as a URI.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::uri();
///
/// let result = decoder.decode(&json!("https://example.com/a?b=c"));
/// assert_eq!(result.into_result().unwrap().host_str(), Some("example.com"));
/// ```
pub fn uri() -> UriDecoder {
    UriDecoder
}

/// See [`uri`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UriDecoder;

impl Decoder for UriDecoder {
    type Output = Url;

    fn decode(&self, value: &Value) -> DecodeResult<Url> {
        let s = match string().decode(value) {
            Validation::Success(s) => s,
            Validation::Failure(e) => return Validation::Failure(e),
        };
        match Url::parse(&s) {
            Ok(parsed) => Validation::Success(parsed),
            Err(_) => Validation::Failure(DecodeErrors::single(DecodeError::new(
                "A valid URI",
                s,
            ))),
        }
    }
}
