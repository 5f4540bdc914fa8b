//! Path segments for locating values in nested structures.
//!
//! This module provides [`PathSegment`], the unit from which a
//! [`DecodeError`](crate::DecodeError) builds the location of a failure
//! inside a nested value.

use std::fmt::{self, Display};

/// One level of nesting in a decoded structure.
///
/// A failure deep inside a composite value carries an ordered sequence of
/// segments identifying where the mismatch occurred. Object and record
/// combinators contribute [`Key`](PathSegment::Key) segments; array and
/// tuple combinators contribute [`Index`](PathSegment::Index) segments.
///
/// Segments render as bare strings (`name`, `0`) so that a full path joins
/// into the dotted form used in error messages, e.g. `sub.name` or `items.2`.
///
/// # Example
///
/// ```rust
/// use decant::PathSegment;
///
/// assert_eq!(PathSegment::key("email").to_string(), "email");
/// assert_eq!(PathSegment::index(3).to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A key in a string-keyed mapping (e.g. `user`, `email`).
    Key(String),
    /// An index into an ordered sequence (e.g. `0`, `42`).
    Index(usize),
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(name: impl Into<String>) -> Self {
        PathSegment::Key(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Returns the key name if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(name) => Some(name),
            PathSegment::Index(_) => None,
        }
    }

    /// Returns the index if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(idx) => Some(*idx),
        }
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}
