//! Structured error carrying a [`Code`], an optional cause and a captured stack.
//!
//! [`CodedError`] is a node in an error chain. Its short text depends only on
//! its code; the cause is reachable through [`core::error::Error::source`] so
//! generic chain walkers (and [`crate::chain`]) can traverse through it.
//!
//! Lower layers wrap with the most specific code, and each layer above may
//! re-wrap with a code that better fits its caller. Boundaries resolve the
//! outermost code.

use crate::types::error_formatter::{FormatMode, Rendered};
use crate::types::{CapturedStack, Code};
use core::error::Error;
use std::sync::Arc;

mod traits;
#[cfg(feature = "serde")]
mod wire;

#[cfg(feature = "serde")]
pub use wire::ErrorRecord;

/// Shared, thread-safe cause reference.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Error value with a stable code, an optional cause and the stack at creation.
///
/// # Examples
///
/// ```
/// use coded_error::{CodedError, CODE_BAD_REQUEST, CODE_NOT_FOUND};
///
/// let parse = "abc".parse::<u32>().unwrap_err();
/// let err = CodedError::wrap(CODE_BAD_REQUEST, parse);
///
/// assert_eq!(err.to_string(), "[40000000] - request invalid");
/// assert_eq!(err.code().http_status(), 400);
/// assert!(err.cause().is_some());
///
/// let plain = CodedError::new(CODE_NOT_FOUND);
/// assert!(plain.cause().is_none());
/// ```
#[must_use]
pub struct CodedError {
    pub(crate) code: Code,
    pub(crate) cause: Option<SharedError>,
    pub(crate) stack: Option<CapturedStack>,
}

impl CodedError {
    /// Creates an error with no cause.
    #[track_caller]
    #[inline]
    pub fn new(code: Code) -> Self {
        Self { code, cause: None, stack: Some(CapturedStack::capture()) }
    }

    /// Creates an error wrapping `cause`.
    #[track_caller]
    #[inline]
    pub fn wrap<E>(code: Code, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { code, cause: Some(Arc::new(cause)), stack: Some(CapturedStack::capture()) }
    }

    /// Creates an error whose cause is shared with other holders.
    #[track_caller]
    #[inline]
    pub fn wrap_shared(code: Code, cause: SharedError) -> Self {
        Self { code, cause: Some(cause), stack: Some(CapturedStack::capture()) }
    }

    /// Rebuilds an error received from elsewhere. No cause, no stack.
    #[cfg(feature = "serde")]
    pub(crate) fn detached(code: Code) -> Self {
        Self { code, cause: None, stack: None }
    }

    /// Returns the code.
    #[inline]
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Returns the cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    /// Returns the stack captured at construction. Deserialized errors have none.
    #[inline]
    pub fn stack(&self) -> Option<&CapturedStack> {
        self.stack.as_ref()
    }

    /// `[<code>] - <message>`.
    #[must_use]
    pub fn short_text(&self) -> String {
        self.code.to_string()
    }

    /// Returns a display adapter for the requested representation.
    ///
    /// ```
    /// use coded_error::{CodedError, FormatMode, CODE_FORBIDDEN};
    ///
    /// let err = CodedError::new(CODE_FORBIDDEN);
    /// assert_eq!(err.render(FormatMode::Plain).to_string(), "[40300000] - authorization failed");
    /// assert_eq!(
    ///     err.render(FormatMode::Quoted).to_string(),
    ///     "\"[40300000] - authorization failed\""
    /// );
    /// ```
    #[inline]
    pub fn render(&self, mode: FormatMode) -> Rendered<'_> {
        Rendered::new(self, mode)
    }
}

impl From<Code> for CodedError {
    #[track_caller]
    #[inline]
    fn from(code: Code) -> Self {
        Self::new(code)
    }
}
