//! Tests for self-referential decoders.

use decant::Decoder;
use serde_json::{json, Value};

// A tree node: a string leaf, or an array of nodes.
fn tree() -> Decoder<Value> {
    Decoder::one_of(vec![
        Decoder::string().erased(),
        Decoder::array(Decoder::recursive(tree)).erased(),
    ])
}

#[test]
fn test_recursive_round_trip_deeply_nested() {
    let input = json!(["a", ["b", ["c", ["d"]]], "e"]);
    assert_eq!(tree().decode(&input).unwrap(), input);
}

#[test]
fn test_recursive_leaf() {
    assert_eq!(tree().decode(&json!("leaf")).unwrap(), json!("leaf"));
}

#[test]
fn test_recursive_rejects_mismatched_leaves() {
    let error = tree().decode(&json!(["a", ["b", 3]])).unwrap_err();
    assert!(error.message().contains("3"));
}

// A comment with optional replies referencing the comment decoder itself.
fn comment() -> Decoder<serde_json::Map<String, Value>> {
    Decoder::object()
        .required("text", Decoder::string())
        .optional(
            "replies",
            Decoder::array(Decoder::recursive(comment)).map(|replies| {
                replies.into_iter().map(Value::Object).collect::<Vec<_>>()
            }),
        )
        .finish()
}

#[test]
fn test_self_referencing_object_schema() {
    let decoded = comment()
        .decode(&json!({
            "text": "Top comment",
            "replies": [
                {"text": "Reply 1"},
                {
                    "text": "Reply 2",
                    "replies": [{"text": "Nested reply"}]
                }
            ]
        }))
        .unwrap();

    assert_eq!(decoded["text"], json!("Top comment"));
    let replies = decoded["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[1]["replies"][0]["text"], json!("Nested reply"));
}

#[test]
fn test_recursive_failure_path_reaches_depth() {
    let error = comment()
        .decode(&json!({
            "text": "Top",
            "replies": [{"text": 1}]
        }))
        .unwrap_err();

    assert_eq!(
        error.message(),
        "replies.0.text: This is not a string: 1"
    );
}

#[test]
fn test_mutually_recursive_decoders() {
    fn branch() -> Decoder<Value> {
        Decoder::object()
            .required("leaves", Decoder::array(Decoder::recursive(leaf)))
            .finish()
            .erased()
    }

    fn leaf() -> Decoder<Value> {
        Decoder::one_of(vec![Decoder::number().erased(), Decoder::recursive(branch)])
    }

    let input = json!({"leaves": [1, {"leaves": [2, 3]}]});
    assert!(branch().is(&input));
    assert!(!branch().is(&json!({"leaves": ["x"]})));
}
