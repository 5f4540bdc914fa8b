//! The decoder capability and its combinators.
//!
//! A [`Decoder<T>`] checks an untyped [`Value`] against a declared shape and
//! produces a typed `T` or a path-annotated [`DecodeError`]. Decoders are
//! immutable and cheaply cloneable; the constructors in this module's
//! submodules build composite decoders out of smaller ones.
//!
//! # Example
//!
//! ```rust
//! use decant::Decoder;
//! use serde_json::json;
//!
//! let ages = Decoder::array(Decoder::number());
//!
//! assert_eq!(ages.decode(&json!([1, 2, 3])).unwrap(), vec![1.0, 2.0, 3.0]);
//!
//! let error = ages.decode(&json!([1, "x"])).unwrap_err();
//! assert_eq!(error.to_string(), "1: This is not a number: \"x\"");
//! ```

mod object;
mod primitives;
mod recursive;
mod sequence;
mod union;

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::error::DecodeError;

pub use object::ObjectDecoder;
pub use sequence::TupleDecoder;

/// The outcome of a single decode: the typed value or the failure.
pub type DecodeResult<T> = Result<T, DecodeError>;

type DecodeFn<T> = Arc<dyn Fn(&Value) -> DecodeResult<T> + Send + Sync>;

/// An immutable capability that checks an untyped value and produces a typed
/// one.
///
/// Every decoder derives from a single core function from [`Value`] to
/// [`DecodeResult`]. The consumption modes differ only in how they surface
/// the failure:
///
/// - [`decode`](Decoder::decode) returns the structured result.
/// - [`validate`](Decoder::validate) returns a
///   [`Validation`](stillwater::Validation), for callers already working
///   applicatively.
/// - [`decode_opt`](Decoder::decode_opt) collapses the failure to `None`.
/// - [`is`](Decoder::is) collapses it to `false`.
/// - [`force_decode`](Decoder::force_decode) panics with the failure.
///
/// Decoders hold no mutable state: they may be cloned, shared across threads,
/// and invoked repeatedly with the same input for the same result.
///
/// # Example
///
/// ```rust
/// use decant::Decoder;
/// use serde_json::json;
///
/// let decoder = Decoder::string();
///
/// assert_eq!(decoder.decode(&json!("hi")).unwrap(), "hi");
/// assert!(decoder.is(&json!("hi")));
/// assert!(!decoder.is(&json!(1)));
/// ```
pub struct Decoder<T> {
    run: DecodeFn<T>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: 'static> Decoder<T> {
    /// Creates a decoder from a core decode function.
    ///
    /// This is the escape hatch for custom decoders; everything in this crate
    /// is built on it. The function must be pure: same input, same result.
    pub fn from_fn(f: impl Fn(&Value) -> DecodeResult<T> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(f) }
    }

    /// Decodes a value, returning the typed result or the failure.
    ///
    /// This is the primary operation; the other consumption modes derive
    /// from it.
    pub fn decode(&self, value: &Value) -> DecodeResult<T> {
        (self.run)(value)
    }

    /// Decodes a value, panicking on failure.
    ///
    /// A thin wrapper over [`decode`](Decoder::decode) for callers that treat
    /// a mismatch as fatal.
    ///
    /// # Panics
    ///
    /// Panics with the error's display form if decoding fails.
    pub fn force_decode(&self, value: &Value) -> T {
        match self.decode(value) {
            Ok(decoded) => decoded,
            Err(error) => panic!("{}", error),
        }
    }

    /// Decodes a value, collapsing any decoding failure into `None`.
    ///
    /// The error detail is discarded entirely; use
    /// [`validate`](Decoder::validate) when the caller needs to know why
    /// decoding failed. Defects (panics raised inside
    /// [`and_then`](Decoder::and_then) transforms or custom decoders) are not
    /// absorbed; they unwind as usual.
    pub fn decode_opt(&self, value: &Value) -> Option<T> {
        self.decode(value).ok()
    }

    /// Decodes a value into a [`Validation`], preserving the failure.
    ///
    /// The recommended mode for callers that branch on success or failure
    /// programmatically, and for combining decoded results applicatively.
    pub fn validate(&self, value: &Value) -> Validation<T, DecodeError> {
        match self.decode(value) {
            Ok(decoded) => Validation::Success(decoded),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Returns true if the value decodes successfully.
    pub fn is(&self, value: &Value) -> bool {
        self.decode(value).is_ok()
    }

    /// Produces a decoder that applies an infallible transform to the
    /// decoded value.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Decoder<U> {
        Decoder::from_fn(move |value| self.decode(value).map(&f))
    }

    /// Produces a decoder that runs the receiver, then a fallible transform.
    ///
    /// A transform failing with a [`DecodeError`] fails the composed decoder
    /// exactly like a kind mismatch would, through every consumption mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::{DecodeError, Decoder};
    /// use serde_json::json;
    ///
    /// let positive = Decoder::number().and_then(|n| {
    ///     if n > 0.0 {
    ///         Ok(n)
    ///     } else {
    ///         Err(DecodeError::new(format!("This is not positive: {}", n)))
    ///     }
    /// });
    ///
    /// assert_eq!(positive.decode(&json!(5)).unwrap(), 5.0);
    /// assert!(positive.decode(&json!(-5)).is_err());
    /// ```
    pub fn and_then<U: 'static>(
        self,
        f: impl Fn(T) -> DecodeResult<U> + Send + Sync + 'static,
    ) -> Decoder<U> {
        Decoder::from_fn(move |value| self.decode(value).and_then(&f))
    }
}

impl<T: Into<Value> + 'static> Decoder<T> {
    /// Erases the output type to [`Value`].
    ///
    /// Heterogeneous decoders can then feed combinators that require a
    /// uniform output type, such as [`one_of`](Decoder::one_of) and the
    /// [`object`](Decoder::object) builder's field slots.
    pub fn erased(self) -> Decoder<Value> {
        self.map(Into::into)
    }
}

// Decoder is Send + Sync for any output type: the closure is behind an Arc
// with both bounds, and no other state exists.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Decoder<String>>();
    assert_sync::<Decoder<String>>();
};
