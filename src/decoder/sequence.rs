//! Sequence combinators.
//!
//! This module provides [`array`](Decoder::array) for homogeneous sequences
//! and [`tuple`](Decoder::tuple) for heterogeneous fixed-width tuples. Both
//! wrap element failures with the element's index as a path segment.

use serde_json::Value;

use crate::error::DecodeError;

use super::{DecodeResult, Decoder};

impl<T: 'static> Decoder<T> {
    /// A decoder for sequences of arbitrary length with a single element
    /// decoder.
    ///
    /// Rejects `Null` and non-array input. Elements decode left to right;
    /// the first failing element fails the whole operation, wrapped with its
    /// index. Order and length of the input are preserved. An empty array
    /// always succeeds with an empty result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::json;
    ///
    /// let decoder = Decoder::array(Decoder::string());
    ///
    /// let names = decoder.decode(&json!(["a", "b"])).unwrap();
    /// assert_eq!(names, vec!["a", "b"]);
    ///
    /// let error = decoder.decode(&json!(["a", 1])).unwrap_err();
    /// assert_eq!(error.to_string(), "1: This is not a string: 1");
    /// ```
    pub fn array(element: Decoder<T>) -> Decoder<Vec<T>> {
        Decoder::from_fn(move |value| {
            let items = as_items(value)?;
            let mut decoded = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                decoded.push(element.decode(item).map_err(|e| e.at(index))?);
            }
            Ok(decoded)
        })
    }

    /// A decoder for fixed-width tuples with one decoder per position.
    ///
    /// Takes a tuple of decoders (arity 1 through 8) and produces a decoder
    /// for the tuple of their outputs. Rejects `Null` and non-array input,
    /// and fails when the input has fewer elements than decoders. Extra
    /// trailing elements are cropped, not decoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::json;
    ///
    /// let decoder = Decoder::tuple((Decoder::number(), Decoder::string()));
    ///
    /// let pair = decoder.decode(&json!([5, "x", true])).unwrap();
    /// assert_eq!(pair, (5.0, "x".to_string()));
    ///
    /// assert!(decoder.decode(&json!([5])).is_err());
    /// ```
    pub fn tuple<D>(decoders: D) -> Decoder<T>
    where
        D: TupleDecoder<Output = T> + Send + Sync + 'static,
    {
        Decoder::from_fn(move |value| {
            let items = as_items(value)?;
            if items.len() < decoders.arity() {
                return Err(DecodeError::new(format!(
                    "This tuple has too few elements: expected {}, got {}",
                    decoders.arity(),
                    items.len()
                )));
            }
            decoders.decode_elements(items)
        })
    }
}

fn as_items(value: &Value) -> DecodeResult<&[Value]> {
    match value {
        Value::Null => Err(DecodeError::missing_value()),
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::new(format!("This is not an array: {}", other))),
    }
}

/// A tuple of decoders usable with [`Decoder::tuple`].
///
/// Implemented for tuples of [`Decoder`]s up to arity 8. Callers normally use
/// this trait only through `Decoder::tuple`.
pub trait TupleDecoder {
    /// The tuple of output types produced by the positional decoders.
    type Output;

    /// The number of positional decoders.
    fn arity(&self) -> usize;

    /// Decodes one element per position, wrapping failures with the index.
    ///
    /// Callers guarantee `items` holds at least [`arity`](TupleDecoder::arity)
    /// elements; trailing extras are ignored.
    fn decode_elements(&self, items: &[Value]) -> DecodeResult<Self::Output>;
}

macro_rules! impl_tuple_decoder {
    ($arity:expr => $(($idx:tt, $t:ident)),+) => {
        impl<$($t: 'static),+> TupleDecoder for ($(Decoder<$t>,)+) {
            type Output = ($($t,)+);

            fn arity(&self) -> usize {
                $arity
            }

            fn decode_elements(&self, items: &[Value]) -> DecodeResult<Self::Output> {
                Ok(($(self.$idx.decode(&items[$idx]).map_err(|e| e.at($idx as usize))?,)+))
            }
        }
    };
}

impl_tuple_decoder!(1 => (0, T0));
impl_tuple_decoder!(2 => (0, T0), (1, T1));
impl_tuple_decoder!(3 => (0, T0), (1, T1), (2, T2));
impl_tuple_decoder!(4 => (0, T0), (1, T1), (2, T2), (3, T3));
impl_tuple_decoder!(5 => (0, T0), (1, T1), (2, T2), (3, T3), (4, T4));
impl_tuple_decoder!(6 => (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5));
impl_tuple_decoder!(7 => (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6));
impl_tuple_decoder!(8 => (0, T0), (1, T1), (2, T2), (3, T3), (4, T4), (5, T5), (6, T6), (7, T7));
