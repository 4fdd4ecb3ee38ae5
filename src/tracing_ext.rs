//! Tracing integration for coded errors.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! coded-error = { version = "0.3", features = ["tracing"] }
//! ```

use crate::chain::find_coded;
use crate::types::{FormatMode, CODE_UNKNOWN};
use core::error::Error;

/// Logs `err` with its resolved code as structured fields.
///
/// Server errors (status 500 and above) are emitted at `error` level with the
/// detailed record, everything else at `warn` level with the verbose form.
/// Errors without a code are logged under [`CODE_UNKNOWN`] with their plain
/// display text.
pub fn trace_error(err: &(dyn Error + 'static)) {
    let Some(coded) = find_coded(err) else {
        tracing::error!(
            code = CODE_UNKNOWN.code(),
            http_status = CODE_UNKNOWN.http_status(),
            error = %err,
            "unclassified error"
        );
        return;
    };

    let code = coded.code();
    if code.http_status() >= 500 {
        tracing::error!(
            code = code.code(),
            http_status = code.http_status(),
            error = %coded.render(FormatMode::Detailed),
            "server error"
        );
    } else {
        tracing::warn!(
            code = code.code(),
            http_status = code.http_status(),
            error = %coded.render(FormatMode::Verbose),
            "request error"
        );
    }
}

/// Logs the error of a `Result` in passing.
///
/// ```
/// use coded_error::tracing_ext::ResultTraceExt;
/// use coded_error::{CodedError, CODE_NOT_FOUND};
///
/// let r: Result<(), CodedError> = Err(CodedError::new(CODE_NOT_FOUND));
/// assert!(r.trace_err().is_err());
/// ```
pub trait ResultTraceExt {
    /// Calls [`trace_error`] on `Err` and returns `self` unchanged.
    fn trace_err(self) -> Self;
}

impl<T, E> ResultTraceExt for Result<T, E>
where
    E: Error + 'static,
{
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(err) = &self {
            trace_error(err);
        }
        self
    }
}
