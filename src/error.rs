//! Decoding failure type.
//!
//! This module provides [`DecodeError`], the single error kind used for all
//! validation failures. An error is created innermost with an empty path; each
//! enclosing combinator prepends its own segment as the failure propagates up,
//! so the message reaching the caller carries a dotted path prefix like
//! `sub.name: This is not a string: 1`.

use stillwater::prelude::*;
use thiserror::Error;

use crate::path::PathSegment;

/// A decoding failure with a human-readable message and the path to the
/// mismatched value.
///
/// The message already includes the dotted path prefix once the error has
/// propagated out of the enclosing combinators, so `Display` simply prints it.
///
/// # Example
///
/// ```rust
/// use decant::{DecodeError, PathSegment};
///
/// let error = DecodeError::new("This is not a string: 1")
///     .at("name")
///     .at("sub");
///
/// assert_eq!(error.to_string(), "sub.name: This is not a string: 1");
/// assert_eq!(
///     error.path(),
///     &[PathSegment::key("sub"), PathSegment::key("name")]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
    path: Vec<PathSegment>,
}

impl DecodeError {
    /// Creates a new error with the given message and an empty path.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// Creates the generic failure for a `Null` input where a value was
    /// required.
    ///
    /// Every decoder except [`Decoder::unknown`](crate::Decoder::unknown)
    /// rejects `Null` with this error before looking at the value's kind.
    pub fn missing_value() -> Self {
        Self::new("This value is missing")
    }

    /// Returns the message, including any accumulated path prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the path from the outermost combinator down to the failure.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Wraps this error with an enclosing combinator's path segment.
    ///
    /// The segment is prepended to the path. The message gains a `": "`
    /// separator on the first wrap and a `"."` join on every deeper one,
    /// yielding a single dotted prefix such as `sub.name: ...`.
    pub fn at(self, segment: impl Into<PathSegment>) -> Self {
        let segment = segment.into();
        let message = if self.path.is_empty() {
            format!("{}: {}", segment, self.message)
        } else {
            format!("{}.{}", segment, self.message)
        };

        let mut path = self.path;
        path.insert(0, segment);

        Self { message, path }
    }
}

/// Combines two errors by concatenating their messages.
///
/// Decoding itself always short-circuits to a single error; this impl exists
/// so `DecodeError` can sit in the failure position of
/// [`Validation`](stillwater::Validation) when callers combine results
/// applicatively. The path of the first error is kept.
impl Semigroup for DecodeError {
    fn combine(self, other: Self) -> Self {
        Self {
            message: format!("{}; {}", self.message, other.message),
            path: self.path,
        }
    }
}
