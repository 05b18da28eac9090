use serde_json::{json, Value};

use learnsphere_server::models::domain::{AudioContent, CodeContent, TextContent};
use learnsphere_server::recovery::{recover, recover_record, RecoveryError};

#[test]
fn test_strict_json_decodes_like_serde_json() {
    let inputs = [
        r#"{"a": 1, "b": [true, false, null], "c": {"d": "e"}}"#,
        r#"{"pi": 3.14159, "neg": -2, "exp": 1.5e3, "big": 12345678901234}"#,
        r#"{"escaped": "line\nbreak \"quoted\" \\ slash \u00e9"}"#,
        r#"{}"#,
    ];

    for input in inputs {
        let expected: Value = serde_json::from_str(input).unwrap();
        assert_eq!(recover(input).unwrap(), expected, "input: {}", input);
    }
}

#[test]
fn test_prose_around_object_is_dropped() {
    let raw = "Sure! Here you go:\n{\"a\":1}\nHope that helps!";
    assert_eq!(recover(raw).unwrap(), json!({ "a": 1 }));
}

#[test]
fn test_surrounding_prose_and_fences_are_ignored() {
    let raw = "Sure! Here you go:\n```json\n{\"title\": \"T\", \"script\": \"S\", \"duration\": \"2 minutes\"}\n```\nHope that helps.";
    let audio: AudioContent = recover_record(raw).unwrap();

    assert_eq!(audio.title, "T");
    assert_eq!(audio.duration, "2 minutes");
}

#[test]
fn test_raw_newlines_inside_strings_are_repaired() {
    let raw = "{\"title\": \"Demo\", \"language\": \"python\", \"code\": \"a = 1\nb = 2\", \"explanation\": \"e\", \"executionInstructions\": \"run\"}";
    let code: CodeContent = recover_record(raw).unwrap();

    assert_eq!(code.code, "a = 1\nb = 2");
    assert!(code.dependencies.is_empty());
}

#[test]
fn test_invalid_escapes_keep_their_backslash() {
    let raw = r#"{"title": "Softmax", "sections": [], "summary": "uses \sigma and \alpha"}"#;
    let text: TextContent = recover_record(raw).unwrap();

    assert_eq!(text.summary, "uses \\sigma and \\alpha");
}

#[test]
fn test_theta_escape_depends_on_backslash_count() {
    let doubled = r#"{"a": "\\theta"}"#;
    assert_eq!(recover(doubled).unwrap(), json!({ "a": "\\theta" }));

    let single = r#"{"a": "\theta"}"#;
    assert_eq!(recover(single).unwrap(), json!({ "a": "\theta" }));
}

#[test]
fn test_raw_bell_inside_string_is_deleted() {
    let raw = "{\"a\": \"be\u{7}ll\"}";
    assert_eq!(recover(raw).unwrap(), json!({ "a": "bell" }));
}

#[test]
fn test_lenient_syntax_is_accepted() {
    let raw = "{\n  // model commentary\n  title: 'Trees',\n  \"items\": [1, 2, 3,],\n}";
    assert_eq!(
        recover(raw).unwrap(),
        json!({ "title": "Trees", "items": [1, 2, 3] })
    );
}

#[test]
fn test_output_without_braces_has_no_boundary() {
    for raw in ["", "no json here", "} backwards {"] {
        assert_eq!(recover(raw), Err(RecoveryError::NoJsonBoundaryFound), "input: {:?}", raw);
    }
}

#[test]
fn test_structurally_broken_output_is_unrecoverable() {
    let err = recover("{\"a\": [1, 2}").unwrap_err();
    match err {
        RecoveryError::UnrecoverableJson { message, sanitized } => {
            assert!(!message.is_empty());
            assert_eq!(sanitized, "{\"a\": [1, 2}");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_wrong_shape_is_reported_separately() {
    let err = recover_record::<AudioContent>(r#"{"title": "T"}"#).unwrap_err();
    assert!(matches!(err, RecoveryError::ShapeMismatch(_)));
}

#[test]
fn test_recovery_is_deterministic() {
    let raw = "prefix {\"title\": \"x\ny\", \"note\": \"\\beta\"} suffix";
    let first = recover(raw);
    for _ in 0..5 {
        assert_eq!(recover(raw), first);
    }
}
