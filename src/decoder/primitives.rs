//! Leaf decoders for the primitive value kinds.
//!
//! This module provides the constructors for opaque, string, number, boolean,
//! and exact-literal decoders. Every primitive except
//! [`unknown`](Decoder::unknown) rejects `Null` before inspecting the value's
//! kind.

use serde_json::Value;

use crate::error::DecodeError;

use super::Decoder;

impl Decoder<Value> {
    /// A decoder that accepts anything, including `Null`, and echoes it.
    ///
    /// The escape hatch for values whose shape the schema does not care
    /// about. This is the only decoder that accepts a missing value.
    pub fn unknown() -> Decoder<Value> {
        Decoder::from_fn(|value| Ok(value.clone()))
    }

    /// A decoder that accepts only the given literal value.
    ///
    /// Rejects `Null`, then rejects any input not strictly equal (same kind
    /// and same value) to `expected`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::json;
    ///
    /// let decoder = Decoder::literal("on");
    ///
    /// assert_eq!(decoder.decode(&json!("on")).unwrap(), json!("on"));
    /// assert!(decoder.decode(&json!("off")).is_err());
    /// ```
    pub fn literal(expected: impl Into<Value>) -> Decoder<Value> {
        let expected = expected.into();
        Decoder::from_fn(move |value| {
            if value.is_null() {
                return Err(DecodeError::missing_value());
            }
            if *value == expected {
                Ok(value.clone())
            } else {
                Err(DecodeError::new(format!(
                    "This is not the literal {}: {}",
                    expected, value
                )))
            }
        })
    }

    /// A decoder that accepts any one of the given literal values.
    ///
    /// Equivalent to [`one_of`](Decoder::one_of) over a
    /// [`literal`](Decoder::literal) decoder per value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::json;
    ///
    /// let level = Decoder::literal_union(vec![json!("debug"), json!("info")]);
    ///
    /// assert!(level.is(&json!("info")));
    /// assert!(!level.is(&json!("trace")));
    /// ```
    pub fn literal_union(values: Vec<Value>) -> Decoder<Value> {
        Decoder::one_of(values.into_iter().map(Decoder::literal).collect())
    }
}

impl Decoder<String> {
    /// A decoder that accepts strings.
    pub fn string() -> Decoder<String> {
        Decoder::from_fn(|value| match value {
            Value::Null => Err(DecodeError::missing_value()),
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeError::new(format!("This is not a string: {}", other))),
        })
    }
}

impl Decoder<f64> {
    /// A decoder that accepts finite numbers.
    ///
    /// Integers and floats both decode to `f64`. Non-finite values are
    /// rejected; only finite numbers decode successfully.
    pub fn number() -> Decoder<f64> {
        Decoder::from_fn(|value| match value {
            Value::Null => Err(DecodeError::missing_value()),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => Ok(f),
                _ => Err(DecodeError::new(format!(
                    "This is not a finite number: {}",
                    value
                ))),
            },
            other => Err(DecodeError::new(format!("This is not a number: {}", other))),
        })
    }
}

impl Decoder<bool> {
    /// A decoder that accepts booleans.
    pub fn boolean() -> Decoder<bool> {
        Decoder::from_fn(|value| match value {
            Value::Null => Err(DecodeError::missing_value()),
            Value::Bool(b) => Ok(*b),
            other => Err(DecodeError::new(format!(
                "This is not a boolean: {}",
                other
            ))),
        })
    }
}
