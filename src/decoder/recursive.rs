//! Recursive combinator.
//!
//! This module provides [`recursive`](Decoder::recursive), which defers
//! decoder construction to decode time so that a schema can refer to itself.

use super::Decoder;

impl<T: 'static> Decoder<T> {
    /// A decoder built from a supplier invoked at decode time.
    ///
    /// A self-referential schema cannot name itself while it is still being
    /// constructed; wrapping the reference in a zero-argument supplier breaks
    /// the cycle. Every `decode` call invokes the supplier afresh and
    /// delegates to the decoder it returns, so the supplier runs once per
    /// recursive descent level. It must be cheap and pure; no memoization is
    /// performed across calls.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Decoder;
    /// use serde_json::{json, Value};
    ///
    /// // A tree node: a string leaf, or an array of nodes.
    /// fn node() -> Decoder<Value> {
    ///     Decoder::one_of(vec![
    ///         Decoder::string().erased(),
    ///         Decoder::array(Decoder::recursive(node)).erased(),
    ///     ])
    /// }
    ///
    /// let input = json!(["a", ["b", ["c"]]]);
    /// assert_eq!(node().decode(&input).unwrap(), input);
    /// ```
    pub fn recursive(supplier: impl Fn() -> Decoder<T> + Send + Sync + 'static) -> Decoder<T> {
        Decoder::from_fn(move |value| supplier().decode(value))
    }
}
