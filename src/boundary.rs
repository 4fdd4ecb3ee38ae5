//! Helpers for the edge of a service, where errors become responses.
//!
//! A [`Reply`] is what a transport handler needs from any error: the HTTP
//! status derived from the outermost code and the default wire body. The body
//! never includes cause text or stack frames; log those separately
//! (see `tracing_ext::trace_error` with the `tracing` feature).
//!
//! # Examples
//!
//! ```
//! use coded_error::boundary::Reply;
//! use coded_error::{CodedError, CODE_NOT_FOUND};
//!
//! let err = CodedError::wrap(CODE_NOT_FOUND, std::io::Error::other("row missing"));
//! let reply = Reply::from_error(&err);
//!
//! assert_eq!(reply.status, 404);
//! assert_eq!(
//!     serde_json::to_string(&reply.body).unwrap(),
//!     r#"{"code":40400000,"message":"resource not found"}"#
//! );
//! ```

use crate::chain::resolve_code;
use crate::types::{Code, ErrorRecord};
use core::error::Error;

/// Transport-neutral error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Status derived from the resolved code.
    pub status: u16,
    /// Default serialized body: code, message and reference.
    pub body: ErrorRecord,
}

impl Reply {
    /// Resolves the outermost code of `err` and builds the reply.
    ///
    /// Errors without any code produce a 500 reply with
    /// [`CODE_UNKNOWN`](crate::CODE_UNKNOWN). With the `tracing` feature the
    /// error is also logged.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        #[cfg(feature = "tracing")]
        crate::tracing_ext::trace_error(err);

        Self::from_code(&resolve_code(err))
    }

    /// Builds the reply for a known code.
    #[inline]
    pub fn from_code(code: &Code) -> Self {
        Self { status: code.http_status(), body: ErrorRecord::from_code(code) }
    }

    /// Status 500 and above: worth escalating beyond a log line.
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}
