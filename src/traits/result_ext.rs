//! Extension trait for attaching a code to the error of a `Result`.
//!
//! This is the sanctioned way to reclassify an error as it crosses a layer:
//! the original error becomes the cause and the new code becomes the
//! outermost one.
//!
//! # Examples
//!
//! ```
//! use coded_error::traits::ResultExt;
//! use coded_error::{chain, CodedError, CODE_NOT_FOUND, CODE_UNKNOWN};
//!
//! fn load(path: &str) -> Result<String, CodedError> {
//!     std::fs::read_to_string(path).wrap_code(CODE_NOT_FOUND)
//! }
//!
//! fn handler() -> Result<String, CodedError> {
//!     load("/definitely/missing.toml").wrap_code(CODE_UNKNOWN)
//! }
//!
//! let err = handler().unwrap_err();
//! assert_eq!(chain::resolve_code(&err), CODE_UNKNOWN);
//! assert!(chain::has_code(Some(&err), &CODE_NOT_FOUND));
//! ```

use crate::types::{Code, CodedError};
use core::error::Error;

/// Extension trait for wrapping `Result` errors in a [`CodedError`].
///
/// All methods are `#[track_caller]`, so the captured construction site is the
/// line calling them.
pub trait ResultExt<T, E> {
    /// Wraps the error with `code`, keeping it as the cause.
    fn wrap_code(self, code: Code) -> Result<T, CodedError>;

    /// Like [`wrap_code`](ResultExt::wrap_code), choosing the code from the error.
    ///
    /// ```
    /// use coded_error::traits::ResultExt;
    /// use coded_error::{CODE_BAD_REQUEST, CODE_NOT_FOUND};
    /// use std::io;
    ///
    /// let r: Result<(), io::Error> = Err(io::Error::from(io::ErrorKind::NotFound));
    /// let err = r
    ///     .wrap_code_with(|e| match e.kind() {
    ///         io::ErrorKind::NotFound => CODE_NOT_FOUND,
    ///         _ => CODE_BAD_REQUEST,
    ///     })
    ///     .unwrap_err();
    /// assert_eq!(err.code(), &CODE_NOT_FOUND);
    /// ```
    fn wrap_code_with<F>(self, f: F) -> Result<T, CodedError>
    where
        F: FnOnce(&E) -> Code;

    /// Boxed variant of [`wrap_code`](ResultExt::wrap_code).
    fn wrap_code_boxed(self, code: Code) -> Result<T, Box<CodedError>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn wrap_code(self, code: Code) -> Result<T, CodedError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(CodedError::wrap(code, e)),
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_code_with<F>(self, f: F) -> Result<T, CodedError>
    where
        F: FnOnce(&E) -> Code,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => {
                let code = f(&e);
                Err(CodedError::wrap(code, e))
            },
        }
    }

    #[track_caller]
    #[inline]
    fn wrap_code_boxed(self, code: Code) -> Result<T, Box<CodedError>> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Box::new(CodedError::wrap(code, e))),
        }
    }
}
