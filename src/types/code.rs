//! Error codes and the predefined code registry.
//!
//! A [`Code`] is an immutable `(numeric code, message, reference)` triple. The
//! numeric code follows a 3+2+3 digit layout:
//!
//! | digits | meaning                        | example (`40401003`) |
//! |--------|--------------------------------|----------------------|
//! | 1-3    | HTTP status class              | `404`                |
//! | 4-5    | owning component               | `01`                 |
//! | 6-8    | component-local error ordinal  | `003`                |
//!
//! The layout is a convention, not a validated invariant: callers choose
//! non-colliding values and [`Code::http_status`] simply keeps the leading
//! three digits.
//!
//! # Examples
//!
//! ```
//! use coded_error::{Code, CODE_NOT_FOUND};
//!
//! const CODE_ACCOUNT_MISSING: Code = Code::from_static(40401003, "account not found", "");
//!
//! assert_eq!(CODE_ACCOUNT_MISSING.http_status(), 404);
//! assert_eq!(CODE_ACCOUNT_MISSING.component(), 1);
//! assert_eq!(CODE_ACCOUNT_MISSING.ordinal(), 3);
//! assert_eq!(CODE_NOT_FOUND.to_string(), "[40400000] - resource not found");
//! ```
use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Request was malformed or failed validation.
pub const CODE_BAD_REQUEST: Code = Code::from_static(40000000, "request invalid", "");
/// Caller could not be authenticated.
pub const CODE_UNAUTHORIZED: Code = Code::from_static(40100000, "authentication failed", "");
/// Caller is authenticated but not allowed to perform the operation.
pub const CODE_FORBIDDEN: Code = Code::from_static(40300000, "authorization failed", "");
/// Requested resource does not exist.
pub const CODE_NOT_FOUND: Code = Code::from_static(40400000, "resource not found", "");
/// Catch-all code, returned whenever no code can be resolved from an error chain.
pub const CODE_UNKNOWN: Code = Code::from_static(
    50000000,
    "internal server error",
    "https://docs.rs/coded-error/latest/coded_error/types/code/index.html",
);

/// Immutable error code carrying a numeric id, a message and an optional reference.
///
/// Derived equality is structural (code, message and reference). Chain lookups
/// compare only the numeric value; see [`Code::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Code {
    code: u32,
    message: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "str::is_empty"))]
    reference: Cow<'static, str>,
}

impl Code {
    /// Creates a code without a reference.
    #[inline]
    pub fn new(code: u32, message: impl Into<Cow<'static, str>>) -> Self {
        Self { code, message: message.into(), reference: Cow::Borrowed("") }
    }

    /// Creates a code pointing at a document or URL with more detail.
    #[inline]
    pub fn with_reference(
        code: u32,
        message: impl Into<Cow<'static, str>>,
        reference: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { code, message: message.into(), reference: reference.into() }
    }

    /// Const constructor for registry entries. Pass `""` for no reference.
    #[inline]
    pub const fn from_static(code: u32, message: &'static str, reference: &'static str) -> Self {
        Self { code, message: Cow::Borrowed(message), reference: Cow::Borrowed(reference) }
    }

    /// Returns the numeric code.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Returns the human readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the reference, or an empty string when none was given.
    #[inline]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Derives the HTTP status by keeping the leading three digits.
    ///
    /// ```
    /// use coded_error::{Code, CODE_UNAUTHORIZED, CODE_UNKNOWN};
    ///
    /// assert_eq!(CODE_UNAUTHORIZED.http_status(), 401);
    /// assert_eq!(CODE_UNKNOWN.http_status(), 500);
    /// assert_eq!(Code::new(404, "short").http_status(), 404);
    /// ```
    #[inline]
    pub const fn http_status(&self) -> u16 {
        let mut v = self.code;
        while v >= 1000 {
            v /= 10;
        }
        v as u16
    }

    /// Component identifier (digits 4-5). Only meaningful for 8-digit codes.
    #[inline]
    pub const fn component(&self) -> u8 {
        ((self.code / 1000) % 100) as u8
    }

    /// Component-local ordinal (digits 6-8). Only meaningful for 8-digit codes.
    #[inline]
    pub const fn ordinal(&self) -> u16 {
        (self.code % 1000) as u16
    }

    /// Identity comparison used by chain lookups: numeric codes only.
    #[inline]
    pub const fn matches(&self, other: &Code) -> bool {
        self.code == other.code
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] - {}", self.code, self.message)
    }
}
