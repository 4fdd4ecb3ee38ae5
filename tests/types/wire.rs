use coded_error::{Code, CodedError, ErrorRecord, CODE_BAD_REQUEST, CODE_UNKNOWN};
use std::io;

const DOC: &str = "https://example.com/docs/errors";

#[test]
fn serialize_emits_only_code_and_message() {
    let err = CodedError::wrap(CODE_BAD_REQUEST, io::Error::other("cause"));
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"code":40000000,"message":"request invalid"}"#);
}

#[test]
fn serialize_includes_reference_when_present() {
    let code = Code::with_reference(CODE_BAD_REQUEST.code(), CODE_BAD_REQUEST.message().to_owned(), DOC);
    let json = serde_json::to_string(&CodedError::new(code)).unwrap();
    assert_eq!(
        json,
        r#"{"code":40000000,"message":"request invalid","reference":"https://example.com/docs/errors"}"#
    );
}

#[test]
fn round_trip_preserves_code_and_drops_cause_and_stack() {
    let original = CodedError::wrap(CODE_UNKNOWN, io::Error::other("db down"));
    let json = serde_json::to_string(&original).unwrap();
    let restored: CodedError = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.code(), original.code());
    assert_eq!(restored.code().reference(), CODE_UNKNOWN.reference());
    assert!(restored.cause().is_none());
    assert!(restored.stack().is_none());
}

#[test]
fn deserialize_then_serialize_is_byte_identical() {
    for input in [
        r#"{"code":40000000,"message":"request invalid"}"#,
        r#"{"code":40000000,"message":"request invalid","reference":"https://example.com/docs/errors"}"#,
    ] {
        let err: CodedError = serde_json::from_str(input).unwrap();
        assert_eq!(serde_json::to_string(&err).unwrap(), input);
    }
}

#[test]
fn deserialize_ignores_diagnostic_fields() {
    let err: CodedError = serde_json::from_str(
        r#"{"code":50000000,"message":"internal server error","cause":"boom","stack":"at x"}"#,
    )
    .unwrap();
    assert!(err.cause().is_none());
    assert!(err.stack().is_none());
}

#[test]
fn deserialize_rejects_missing_code() {
    let result: Result<CodedError, _> = serde_json::from_str(r#"{"message":"no code"}"#);
    assert!(result.is_err());
}

#[test]
fn deserialized_error_renders_verbose_without_frames() {
    let err: CodedError = serde_json::from_str(r#"{"code":40400000,"message":"gone"}"#).unwrap();
    assert_eq!(format!("{:#}", err), "[40400000] - gone");
    assert_eq!(format!("{:#?}", err), r#"{"code":40400000,"message":"gone"}"#);
}

#[test]
fn record_from_code_matches_default_serialization() {
    let record = ErrorRecord::from(&CODE_BAD_REQUEST);
    assert_eq!(record.to_code(), Code::new(40000000, "request invalid"));
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        serde_json::to_string(&CodedError::new(CODE_BAD_REQUEST)).unwrap()
    );
}

#[test]
fn code_serializes_with_same_field_names() {
    let json = serde_json::to_string(&CODE_BAD_REQUEST).unwrap();
    assert_eq!(json, r#"{"code":40000000,"message":"request invalid"}"#);
    let back: Code = serde_json::from_str(&json).unwrap();
    assert_eq!(back, CODE_BAD_REQUEST);
}
