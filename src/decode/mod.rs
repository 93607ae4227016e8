//! Decoders and the combinators that compose them.
//!
//! Everything here implements [`Decoder`]: the leaf decoders that
//! type-check the base dynamic shapes, the refinements layered on top of
//! them, and the higher-order combinators that build decoders out of other
//! decoders. Decoders are built ahead of time as plain values and applied
//! once per input.
//!
//! # Example
//!
//! ```rust
//! use inquest::decode::{self, Decoder};
//! use serde_json::json;
//!
//! let decoder = decode::all(vec![
//!     decode::field("host", decode::nonempty_string()).boxed(),
//!     decode::field("scheme", decode::string()).boxed(),
//! ]);
//!
//! let result = decoder.decode(&json!({"host": "example.com", "scheme": "https"}));
//! assert!(result.is_success());
//! ```

mod collection;
mod combinators;
mod numeric;
mod primitive;
mod string;
mod time;
mod traits;
mod union;
mod uri;

pub use collection::{
    arraylike, exact_set, nonempty_list, set, ArraylikeDecoder, ExactSetDecoder,
    NonEmptyListDecoder, SetDecoder,
};
pub use combinators::{all, json_string, when, AllDecoder, JsonStringDecoder, WhenDecoder};
pub use numeric::{
    float_string, int_string, non_negative_int, number, number_string, FloatStringDecoder,
    IntStringDecoder, NonNegativeIntDecoder, NumberDecoder, NumberStringDecoder,
};
pub use primitive::{
    boolean, field, float, int, list, string, succeed, BoolDecoder, FieldDecoder, FloatDecoder,
    IntDecoder, ListDecoder, StringDecoder, SucceedDecoder,
};
pub use string::{bool_string, matching, nonempty_string, MatchingDecoder, NonEmptyStringDecoder};
pub use time::{
    http_date, iso_8601, unix_timestamp, HttpDateDecoder, Iso8601Decoder, UnixTimestampDecoder,
};
pub use traits::{from_fn, BoxDecoder, Decoder, FnDecoder};
pub use union::{enumeration, tagged_union, DuplicateTagError, TaggedUnion};
pub use uri::{uri, UriDecoder};
