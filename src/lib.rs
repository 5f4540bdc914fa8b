//! # Decant
//!
//! Composable decoders that turn untyped JSON values into precisely typed
//! values, or report exactly where in a nested structure the input did not
//! match.
//!
//! ## Overview
//!
//! A [`Decoder<T>`] is an immutable, reusable capability: given an already
//! deserialized [`serde_json::Value`] it produces a typed `T` or a
//! [`DecodeError`] carrying the field path to the mismatch. Small decoders
//! compose into larger ones — arrays, tuples, unions, records, structured
//! objects, and self-referential schemas — and a failure deep inside a
//! composite value propagates out with each enclosing combinator prepending
//! its own path segment.
//!
//! Decoding is single-pass, synchronous, and purely in-memory. There is no
//! coercion between kinds: `"5"` never decodes as a number.
//!
//! ## Core Types
//!
//! - [`Decoder`]: the capability itself, with consumption modes `decode`,
//!   `validate`, `decode_opt`, `is`, and `force_decode`
//! - [`DecodeError`]: a single validation failure with message and path
//! - [`PathSegment`]: one level of nesting in a failure's location
//! - [`ObjectDecoder`]: builder for structured objects with required and
//!   optional fields
//!
//! ## Example
//!
//! ```rust
//! use decant::Decoder;
//! use serde_json::json;
//!
//! let user = Decoder::object()
//!     .required("name", Decoder::string())
//!     .required("age", Decoder::number())
//!     .optional("email", Decoder::string())
//!     .finish();
//!
//! let decoded = user.decode(&json!({"name": "Alice", "age": 30})).unwrap();
//! assert_eq!(decoded["name"], json!("Alice"));
//!
//! // Failures carry the path to the mismatch
//! let error = user.decode(&json!({"name": 1, "age": 30})).unwrap_err();
//! assert_eq!(error.to_string(), "name: This is not a string: 1");
//! ```

pub mod decoder;
pub mod error;
pub mod path;

pub use decoder::{DecodeResult, Decoder, ObjectDecoder, TupleDecoder};
pub use error::DecodeError;
pub use path::PathSegment;

/// Type alias for decode outcomes carried as a `stillwater` validation.
///
/// Returned by [`Decoder::validate`]; the success variant holds the decoded
/// value, the failure variant a [`DecodeError`]. Never both.
pub type ValidationResult<T> = stillwater::Validation<T, DecodeError>;
