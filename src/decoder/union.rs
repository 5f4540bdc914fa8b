//! Union combinator.
//!
//! This module provides [`one_of`](Decoder::one_of), which tries a sequence
//! of decoders in order and returns the first success.

use crate::error::DecodeError;

use super::Decoder;

impl<T: 'static> Decoder<T> {
    /// A decoder that tries each given decoder in order against the same
    /// input and returns the first success.
    ///
    /// Decoders after the first success are not evaluated. If every decoder
    /// fails, the combinator fails with a single aggregated error listing the
    /// per-decoder failure messages in order. An empty decoder list always
    /// fails.
    ///
    /// Decoders with different output types can participate through
    /// [`erased`](Decoder::erased).
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::json;
    ///
    /// let id = Decoder::one_of(vec![
    ///     Decoder::number().erased(),
    ///     Decoder::string().erased(),
    /// ]);
    ///
    /// assert_eq!(id.decode(&json!("x")).unwrap(), json!("x"));
    /// assert!(id.decode(&json!(true)).is_err());
    /// ```
    pub fn one_of(decoders: Vec<Decoder<T>>) -> Decoder<T> {
        Decoder::from_fn(move |value| {
            let mut messages = Vec::with_capacity(decoders.len());
            for decoder in &decoders {
                match decoder.decode(value) {
                    Ok(decoded) => return Ok(decoded),
                    Err(error) => messages.push(error.message().to_string()),
                }
            }

            if messages.is_empty() {
                Err(DecodeError::new(
                    "None of the decoders matched: no decoders were given",
                ))
            } else {
                Err(DecodeError::new(format!(
                    "None of the decoders matched: {}",
                    messages.join("; ")
                )))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_first_success_wins() {
        let decoder = Decoder::one_of(vec![
            Decoder::literal(json!("a")),
            Decoder::literal(json!("b")),
        ]);
        assert_eq!(decoder.decode(&json!("b")), Ok(json!("b")));
    }

    #[test]
    fn test_aggregated_failure_lists_all_messages() {
        let decoder = Decoder::one_of(vec![
            Decoder::number().erased(),
            Decoder::string().erased(),
        ]);

        let error = decoder.decode(&json!(true)).unwrap_err();
        assert!(error.message().starts_with("None of the decoders matched:"));
        assert!(error.message().contains("This is not a number: true"));
        assert!(error.message().contains("This is not a string: true"));
    }

    #[test]
    fn test_empty_union_always_fails() {
        let decoder: Decoder<Value> = Decoder::one_of(Vec::new());
        assert!(decoder.decode(&json!(1)).is_err());
        assert!(decoder.decode(&json!(null)).is_err());
    }
}
