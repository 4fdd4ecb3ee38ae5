use coded_error::traits::Coder;
use coded_error::{Code, CodedError, CODE_FORBIDDEN, CODE_UNKNOWN};
use std::sync::Arc;

#[test]
fn coder_returns_stored_code() {
    let err = CodedError::wrap(CODE_FORBIDDEN, CodedError::new(CODE_UNKNOWN));
    assert_eq!(err.coder(), &CODE_FORBIDDEN);
}

#[test]
fn coder_returns_ad_hoc_code() {
    let err = CodedError::new(Code::new(40100000, "Unauthorized"));
    assert_eq!(err.coder(), &Code::new(40100000, "Unauthorized"));
    assert_eq!(err.http_status(), 401);
}

#[test]
fn coder_through_smart_pointers() {
    let boxed = Box::new(CodedError::new(CODE_FORBIDDEN));
    assert_eq!(boxed.coder(), &CODE_FORBIDDEN);

    let shared: Arc<CodedError> = Arc::new(CodedError::new(CODE_UNKNOWN));
    assert_eq!(shared.http_status(), 500);
}
