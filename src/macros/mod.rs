//! Shorthand macros for building and returning [`CodedError`](crate::CodedError)s.
//!
//! - [`macro@crate::coded`] - builds a `CodedError`, optionally wrapping a cause.
//! - [`macro@crate::bail_code`] - returns early with a `CodedError`.
//! - [`macro@crate::ensure_code`] - returns early with a `CodedError` unless a condition holds.
//!
//! The construction site recorded in the error's stack is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use coded_error::{bail_code, ensure_code, CodedError, CODE_BAD_REQUEST, CODE_NOT_FOUND};
//!
//! fn find(id: u32) -> Result<&'static str, CodedError> {
//!     ensure_code!(id > 0, CODE_BAD_REQUEST);
//!     match id {
//!         1 => Ok("account_1"),
//!         _ => bail_code!(CODE_NOT_FOUND),
//!     }
//! }
//!
//! assert_eq!(find(1).unwrap(), "account_1");
//! assert_eq!(find(0).unwrap_err().code(), &CODE_BAD_REQUEST);
//! assert_eq!(find(7).unwrap_err().code(), &CODE_NOT_FOUND);
//! ```

/// Builds a [`CodedError`](crate::CodedError).
///
/// - `coded!(code)` - no cause
/// - `coded!(code, cause)` - wraps `cause`
///
/// ```
/// use coded_error::{coded, CODE_FORBIDDEN};
///
/// let err = coded!(CODE_FORBIDDEN, std::io::Error::other("acl denied"));
/// assert_eq!(err.cause().map(|c| c.to_string()).as_deref(), Some("acl denied"));
/// ```
#[macro_export]
macro_rules! coded {
    ($code:expr $(,)?) => {
        $crate::CodedError::new($code)
    };
    ($code:expr, $cause:expr $(,)?) => {
        $crate::CodedError::wrap($code, $cause)
    };
}

/// Returns early with `Err(coded!(...).into())`.
///
/// The conversion through `From` allows functions returning
/// `Result<_, Box<CodedError>>` or any other error type constructible from a
/// `CodedError`.
#[macro_export]
macro_rules! bail_code {
    ($code:expr $(,)?) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::coded!($code)))
    };
    ($code:expr, $cause:expr $(,)?) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::coded!(
            $code, $cause
        )))
    };
}

/// Returns early with a [`CodedError`](crate::CodedError) if `cond` is false.
///
/// ```
/// use coded_error::{ensure_code, CodedError, CODE_UNAUTHORIZED};
///
/// fn check(token: &str) -> Result<(), CodedError> {
///     ensure_code!(!token.is_empty(), CODE_UNAUTHORIZED);
///     Ok(())
/// }
///
/// assert!(check("abc").is_ok());
/// assert_eq!(check("").unwrap_err().code().http_status(), 401);
/// ```
#[macro_export]
macro_rules! ensure_code {
    ($cond:expr, $code:expr $(,)?) => {
        if !$cond {
            $crate::bail_code!($code);
        }
    };
}
