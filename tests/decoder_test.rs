//! Tests for the consumption modes and decoder composition.

use std::sync::Arc;
use std::thread;

use decant::{DecodeError, DecodeResult, Decoder};
use serde_json::json;

#[test]
fn test_decode_returns_structured_result() {
    let decoder = Decoder::number();
    assert_eq!(decoder.decode(&json!(5)), Ok(5.0));
    assert!(decoder.decode(&json!("x")).is_err());
}

#[test]
fn test_decode_opt_collapses_failure_to_none() {
    let decoder = Decoder::number();
    assert_eq!(decoder.decode_opt(&json!(5)), Some(5.0));
    assert_eq!(decoder.decode_opt(&json!("x")), None);
    assert_eq!(decoder.decode_opt(&json!(null)), None);
}

#[test]
fn test_validate_preserves_error_detail() {
    let decoder = Decoder::string();

    let success = decoder.validate(&json!("hi"));
    assert!(success.is_success());
    assert_eq!(success.into_result().unwrap(), "hi");

    let failure = decoder.validate(&json!(1));
    assert!(failure.is_failure());
    let error = failure.into_result().unwrap_err();
    assert_eq!(error.message(), "This is not a string: 1");
}

#[test]
fn test_is_narrows_to_boolean() {
    let decoder = Decoder::boolean();
    assert!(decoder.is(&json!(true)));
    assert!(!decoder.is(&json!("true")));
    assert!(!decoder.is(&json!(null)));
}

#[test]
fn test_force_decode_returns_value() {
    assert_eq!(Decoder::number().force_decode(&json!(5)), 5.0);
}

#[test]
#[should_panic(expected = "This is not a number")]
fn test_force_decode_panics_on_mismatch() {
    Decoder::number().force_decode(&json!("x"));
}

#[test]
fn test_and_then_transforms_success() {
    let decoder = Decoder::number().and_then(|n| Ok(n.to_string()));
    assert_eq!(decoder.decode(&json!(5)).unwrap(), "5");
}

#[test]
fn test_and_then_keeps_original_failure() {
    // The transform never runs when the receiver fails; the number
    // decoder's own error surfaces unchanged.
    let decoder = Decoder::number().and_then(|n| Ok(n.to_string()));
    let error = decoder.decode(&json!("x")).unwrap_err();
    assert_eq!(error.message(), "This is not a number: \"x\"");
}

#[test]
fn test_and_then_failure_flows_through_all_modes() {
    let decoder = Decoder::string().and_then(|s| -> DecodeResult<usize> {
        s.parse()
            .map_err(|_| DecodeError::new(format!("This is not a numeric string: \"{}\"", s)))
    });

    assert_eq!(decoder.decode(&json!("42")), Ok(42));
    assert!(decoder.decode(&json!("x")).is_err());
    assert_eq!(decoder.decode_opt(&json!("x")), None);
    assert!(!decoder.is(&json!("x")));
    assert!(decoder.validate(&json!("x")).is_failure());
}

#[test]
fn test_chained_and_then() {
    let decoder = Decoder::number()
        .and_then(|n| Ok(n as i64))
        .and_then(|n| Ok(n + 1));
    assert_eq!(decoder.decode(&json!(5)), Ok(6));
}

#[test]
fn test_map_then_and_then() {
    let decoder = Decoder::string()
        .map(|s| s.to_uppercase())
        .and_then(|s| Ok(s.len()));
    assert_eq!(decoder.decode(&json!("abc")), Ok(3));
}

#[test]
fn test_decoder_shared_across_threads() {
    let decoder = Arc::new(Decoder::array(Decoder::number()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let decoder = Arc::clone(&decoder);
            thread::spawn(move || {
                let input = json!([i, i + 1]);
                decoder.decode(&input).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let decoded = handle.join().unwrap();
        assert_eq!(decoded, vec![i as f64, i as f64 + 1.0]);
    }
}

#[test]
fn test_repeated_calls_are_referentially_stable() {
    let decoder = Decoder::object()
        .required("a", Decoder::number())
        .finish();
    let input = json!({"a": 1});

    let first = decoder.decode(&input).unwrap();
    let second = decoder.decode(&input).unwrap();
    assert_eq!(first, second);
}
