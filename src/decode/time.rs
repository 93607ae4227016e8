//! Timestamp decoders.
//!
//! All parsing is delegated to `chrono`; these decoders only adapt its
//! results into the expected/found/path error model.

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::Value;
use stillwater::Validation;

use crate::decode::numeric::int_string;
use crate::decode::primitive::{int, string};
use crate::decode::traits::Decoder;
use crate::error::{DecodeError, DecodeErrors};
use crate::DecodeResult;

/// Decodes an ISO 8601 / RFC 3339 timestamp string.
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::iso_8601();
///
/// assert!(decoder.decode(&json!("2024-03-01T12:00:00Z")).is_success());
/// assert!(decoder.decode(&json!("yesterday")).is_failure());
/// ```
pub fn iso_8601() -> Iso8601Decoder {
    Iso8601Decoder
}

/// See [`iso_8601`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601Decoder;

impl Decoder for Iso8601Decoder {
    type Output = DateTime<FixedOffset>;

    fn decode(&self, value: &Value) -> DecodeResult<DateTime<FixedOffset>> {
        let s = match string().decode(value) {
            Validation::Success(s) => s,
            Validation::Failure(e) => return Validation::Failure(e),
        };
        match DateTime::parse_from_rfc3339(&s) {
            Ok(timestamp) => Validation::Success(timestamp),
            Err(_) => Validation::Failure(DecodeErrors::single(DecodeError::new(
                "An ISO 8601 date string",
                s,
            ))),
        }
    }
}

/// Decodes seconds-since-epoch into a UTC timestamp.
///
/// Accepts a native int, or a stringified int when the input is a string.
/// The only failures beyond the underlying int decode are seconds outside
/// chrono's representable range.
pub fn unix_timestamp() -> UnixTimestampDecoder {
    UnixTimestampDecoder
}

/// See [`unix_timestamp`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTimestampDecoder;

impl Decoder for UnixTimestampDecoder {
    type Output = DateTime<Utc>;

    fn decode(&self, value: &Value) -> DecodeResult<DateTime<Utc>> {
        let decoded = match value {
            Value::String(_) => int_string().decode(value),
            _ => int().decode(value),
        };
        let seconds = match decoded {
            Validation::Success(n) => n,
            Validation::Failure(e) => return Validation::Failure(e),
        };
        match DateTime::from_timestamp(seconds, 0) {
            Some(timestamp) => Validation::Success(timestamp),
            None => Validation::Failure(DecodeErrors::single(DecodeError::new(
                "A unix timestamp in seconds",
                seconds.to_string(),
            ))),
        }
    }
}

/// Decodes an HTTP-date string (the RFC 9110 IMF-fixdate form).
///
/// # Example
///
/// ```rust
/// use inquest::decode::{self, Decoder};
/// use serde_json::json;
///
/// let decoder = decode::http_date();
///
/// assert!(decoder
///     .decode(&json!("Sun, 06 Nov 1994 08:49:37 GMT"))
///     .is_success());
/// ```
pub fn http_date() -> HttpDateDecoder {
    HttpDateDecoder
}

/// See [`http_date`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDateDecoder;

impl Decoder for HttpDateDecoder {
    type Output = DateTime<FixedOffset>;

    fn decode(&self, value: &Value) -> DecodeResult<DateTime<FixedOffset>> {
        let s = match string().decode(value) {
            Validation::Success(s) => s,
            Validation::Failure(e) => return Validation::Failure(e),
        };
        match DateTime::parse_from_rfc2822(&s) {
            Ok(timestamp) => Validation::Success(timestamp),
            Err(_) => Validation::Failure(DecodeErrors::single(DecodeError::new(
                "An HTTP date string",
                s,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unwrap_failure<T: std::fmt::Debug>(v: DecodeResult<T>) -> DecodeErrors {
        v.into_result().unwrap_err()
    }

    #[test]
    fn test_iso_8601_parses_rfc3339() {
        let result = iso_8601().decode(&json!("2024-03-01T12:00:00+02:00"));
        let timestamp = result.into_result().unwrap();
        assert_eq!(timestamp.timestamp(), 1709287200);
    }

    #[test]
    fn test_iso_8601_failure_keeps_input() {
        let errors = unwrap_failure(iso_8601().decode(&json!("not a date")));
        assert_eq!(errors.first().expected, "An ISO 8601 date string");
        assert_eq!(errors.first().found, "not a date");
    }

    #[test]
    fn test_iso_8601_requires_string() {
        let errors = unwrap_failure(iso_8601().decode(&json!(1709287200)));
        assert_eq!(errors.first().expected, "A string");
    }

    #[test]
    fn test_unix_timestamp_from_int() {
        let result = unix_timestamp().decode(&json!(0));
        assert_eq!(result.into_result().unwrap().timestamp(), 0);
    }

    #[test]
    fn test_unix_timestamp_from_string() {
        let result = unix_timestamp().decode(&json!("86400"));
        assert_eq!(result.into_result().unwrap().timestamp(), 86400);
    }

    #[test]
    fn test_unix_timestamp_bad_string() {
        let errors = unwrap_failure(unix_timestamp().decode(&json!("soon")));
        assert_eq!(errors.first().expected, "A stringified int");
    }

    #[test]
    fn test_unix_timestamp_bad_type() {
        let errors = unwrap_failure(unix_timestamp().decode(&json!(true)));
        assert_eq!(errors.first().expected, "An int");
    }

    #[test]
    fn test_unix_timestamp_out_of_range() {
        let errors = unwrap_failure(unix_timestamp().decode(&json!(i64::MAX)));
        assert_eq!(errors.first().expected, "A unix timestamp in seconds");
    }

    #[test]
    fn test_http_date_parses_imf_fixdate() {
        let result = http_date().decode(&json!("Sun, 06 Nov 1994 08:49:37 GMT"));
        assert_eq!(result.into_result().unwrap().timestamp(), 784111777);
    }

    #[test]
    fn test_http_date_failure() {
        let errors = unwrap_failure(http_date().decode(&json!("06/11/1994")));
        assert_eq!(errors.first().expected, "An HTTP date string");
        assert_eq!(errors.first().found, "06/11/1994");
    }
}
