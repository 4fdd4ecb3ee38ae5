use coded_error::{Code, CodedError, SharedError, CODE_BAD_REQUEST, CODE_FORBIDDEN, CODE_UNAUTHORIZED};
use std::error::Error;
use std::io;
use std::sync::Arc;

#[test]
fn new_error_has_code_and_no_cause() {
    let err = CodedError::new(CODE_UNAUTHORIZED);
    assert_eq!(err.code(), &CODE_UNAUTHORIZED);
    assert!(err.cause().is_none());
    assert!(err.source().is_none());
    assert!(err.stack().is_some());
}

#[test]
fn wrap_keeps_cause_reachable_through_source() {
    let err = CodedError::wrap(CODE_BAD_REQUEST, io::Error::other("cause"));
    assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("cause"));
    assert_eq!(err.cause().map(|c| c.to_string()).as_deref(), Some("cause"));
}

#[test]
fn short_text_ignores_cause() {
    let bare = CodedError::new(CODE_BAD_REQUEST);
    let wrapped = CodedError::wrap(CODE_BAD_REQUEST, io::Error::other("cause"));
    assert_eq!(bare.short_text(), "[40000000] - request invalid");
    assert_eq!(wrapped.short_text(), bare.short_text());
    assert_eq!(wrapped.to_string(), bare.to_string());
}

#[test]
fn short_text_for_ad_hoc_code() {
    let err = CodedError::new(Code::new(40300000, "forbidden"));
    assert_eq!(err.short_text(), "[40300000] - forbidden");
}

#[test]
fn nested_coded_error_is_the_source() {
    let err = CodedError::wrap(CODE_FORBIDDEN, CodedError::new(CODE_BAD_REQUEST));
    let source = err.source().unwrap();
    let inner = source.downcast_ref::<CodedError>().unwrap();
    assert_eq!(inner.code(), &CODE_BAD_REQUEST);
}

#[test]
fn shared_cause_is_not_copied() {
    let cause: SharedError = Arc::new(io::Error::other("shared"));
    let first = CodedError::wrap_shared(CODE_BAD_REQUEST, Arc::clone(&cause));
    let second = CodedError::wrap_shared(CODE_FORBIDDEN, Arc::clone(&cause));

    assert!(Arc::ptr_eq(first.cause().unwrap(), &cause));
    assert!(Arc::ptr_eq(second.cause().unwrap(), &cause));
    assert_eq!(Arc::strong_count(&cause), 3);
}

#[test]
fn from_code_builds_error_without_cause() {
    let err: CodedError = CODE_FORBIDDEN.into();
    assert_eq!(err.code(), &CODE_FORBIDDEN);
    assert!(err.cause().is_none());
}

#[test]
fn coded_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<CodedError>();
}

#[test]
fn construction_site_is_the_caller() {
    let err = CodedError::new(CODE_BAD_REQUEST);
    let line = line!() - 1;
    let site = err.stack().unwrap().site();
    assert!(site.file().ends_with("coded.rs"));
    assert_eq!(site.line(), line);
}
