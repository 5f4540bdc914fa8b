//! Keyed combinators.
//!
//! This module provides [`record`](Decoder::record) and
//! [`key_value_pairs`](Decoder::key_value_pairs) for homogeneous string-keyed
//! mappings, and [`ObjectDecoder`] for heterogeneous structured objects with
//! required and optional fields.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::DecodeError;

use super::{DecodeResult, Decoder};

impl<T: 'static> Decoder<T> {
    /// A decoder for string-keyed mappings with a single value decoder.
    ///
    /// Rejects `Null` and non-object input (arrays are a distinct kind and
    /// never pass this check). Every value decodes independently; the first
    /// failure fails the whole operation, wrapped with its key. The output
    /// preserves the full key set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::json;
    ///
    /// let decoder = Decoder::record(Decoder::number());
    ///
    /// let scores = decoder.decode(&json!({"a": 1, "b": 2})).unwrap();
    /// assert_eq!(scores["a"], 1.0);
    /// assert_eq!(scores["b"], 2.0);
    /// ```
    pub fn record(value_decoder: Decoder<T>) -> Decoder<IndexMap<String, T>> {
        Decoder::from_fn(move |value| {
            let entries = as_entries(value)?;
            let mut decoded = IndexMap::with_capacity(entries.len());
            for (key, entry) in entries {
                let item = value_decoder
                    .decode(entry)
                    .map_err(|e| e.at(key.as_str()))?;
                decoded.insert(key.clone(), item);
            }
            Ok(decoded)
        })
    }

    /// A decoder for string-keyed mappings, projected into key/value pairs.
    ///
    /// Validates and decodes exactly like [`record`](Decoder::record), then
    /// yields the entries as an ordered sequence of `(key, value)` pairs.
    pub fn key_value_pairs(value_decoder: Decoder<T>) -> Decoder<Vec<(String, T)>> {
        Decoder::record(value_decoder).map(|record| record.into_iter().collect())
    }
}

impl Decoder<Map<String, Value>> {
    /// Starts building a decoder for a structured object with independently
    /// specified required and optional fields.
    ///
    /// With no fields declared, the finished decoder accepts any mapping and
    /// produces an empty result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::json;
    ///
    /// let decoder = Decoder::object()
    ///     .required("a", Decoder::number())
    ///     .optional("b", Decoder::number())
    ///     .finish();
    ///
    /// let decoded = decoder.decode(&json!({"a": 5})).unwrap();
    /// assert_eq!(decoded, json!({"a": 5.0}).as_object().unwrap().clone());
    ///
    /// assert!(decoder.decode(&json!({"b": 10})).is_err());
    /// ```
    pub fn object() -> ObjectDecoder {
        ObjectDecoder::new()
    }
}

/// Builder for a structured-object decoder.
///
/// Fields are declared with [`required`](ObjectDecoder::required) and
/// [`optional`](ObjectDecoder::optional); [`finish`](ObjectDecoder::finish)
/// produces the [`Decoder`]. Field decoders of any output type convertible to
/// [`Value`] can be used; their results are stored type-erased in the output
/// map.
///
/// The finished decoder:
///
/// - rejects `Null` and non-object input up front,
/// - fails with a missing-required-property error (field name as sole path
///   segment) when a required field is absent,
/// - decodes present fields with the field name as wrapping path segment,
/// - omits absent optional fields from the output entirely, and
/// - drops input fields named in neither map (structural cropping, not
///   closed validation).
pub struct ObjectDecoder {
    required: IndexMap<String, Decoder<Value>>,
    optional: IndexMap<String, Decoder<Value>>,
}

impl ObjectDecoder {
    /// Creates a builder with no declared fields.
    pub fn new() -> Self {
        Self {
            required: IndexMap::new(),
            optional: IndexMap::new(),
        }
    }

    /// Declares a field that must be present in the input.
    pub fn required<T: Into<Value> + 'static>(
        mut self,
        name: impl Into<String>,
        decoder: Decoder<T>,
    ) -> Self {
        self.required.insert(name.into(), decoder.erased());
        self
    }

    /// Declares a field that may be absent from the input.
    ///
    /// An absent optional field is omitted from the output; no error, no
    /// placeholder.
    pub fn optional<T: Into<Value> + 'static>(
        mut self,
        name: impl Into<String>,
        decoder: Decoder<T>,
    ) -> Self {
        self.optional.insert(name.into(), decoder.erased());
        self
    }

    /// Builds the object decoder.
    pub fn finish(self) -> Decoder<Map<String, Value>> {
        let ObjectDecoder { required, optional } = self;
        Decoder::from_fn(move |value| {
            let entries = as_entries(value)?;
            let mut decoded = Map::new();

            for (name, decoder) in &required {
                match entries.get(name) {
                    None => {
                        return Err(
                            DecodeError::new("Missing required property").at(name.as_str())
                        );
                    }
                    Some(field) => {
                        let item = decoder.decode(field).map_err(|e| e.at(name.as_str()))?;
                        decoded.insert(name.clone(), item);
                    }
                }
            }

            for (name, decoder) in &optional {
                if let Some(field) = entries.get(name) {
                    let item = decoder.decode(field).map_err(|e| e.at(name.as_str()))?;
                    decoded.insert(name.clone(), item);
                }
            }

            Ok(decoded)
        })
    }
}

impl Default for ObjectDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn as_entries(value: &Value) -> DecodeResult<&Map<String, Value>> {
    match value {
        Value::Null => Err(DecodeError::missing_value()),
        Value::Object(entries) => Ok(entries),
        other => Err(DecodeError::new(format!("This is not an object: {}", other))),
    }
}
