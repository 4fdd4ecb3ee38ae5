//! Coded errors: stable, machine-readable error codes for service boundaries.
//!
//! A [`Code`] is a numeric id (HTTP status class, component, ordinal) with a
//! message and an optional reference. A [`CodedError`] attaches a code to an
//! optional cause and captures the call stack at construction. The [`chain`]
//! module recovers codes from arbitrarily wrapped error chains.
//!
//! # Examples
//!
//! ## Wrapping across layers
//!
//! ```
//! use coded_error::{chain, CodedError, CODE_BAD_REQUEST, CODE_UNKNOWN};
//!
//! let parse = "x".parse::<u32>().unwrap_err();
//! let err = CodedError::wrap(CODE_BAD_REQUEST, parse);
//!
//! assert_eq!(err.to_string(), "[40000000] - request invalid");
//! assert_eq!(chain::resolve_code(&err).http_status(), 400);
//! assert_eq!(chain::resolve_code(&std::io::Error::other("plain")), CODE_UNKNOWN);
//! ```
//!
//! ## Representations
//!
//! ```
//! use coded_error::{CodedError, CODE_NOT_FOUND};
//!
//! let err = CodedError::wrap(CODE_NOT_FOUND, std::io::Error::other("no such row"));
//!
//! assert_eq!(format!("{}", err), "[40400000] - resource not found");
//! assert_eq!(format!("{:?}", err), "\"[40400000] - resource not found\"");
//! assert!(format!("{:#}", err).starts_with("[40400000] - resource not found no such row"));
//! assert!(format!("{:#?}", err).starts_with(r#"{"code":40400000,"message":"resource not found","cause":"no such row""#));
//! ```
//!
//! ## Wire format
//!
//! ```
//! use coded_error::{CodedError, CODE_UNKNOWN};
//!
//! let json = serde_json::to_string(&CodedError::new(CODE_UNKNOWN)).unwrap();
//! let back: CodedError = serde_json::from_str(&json).unwrap();
//!
//! assert_eq!(back.code(), &CODE_UNKNOWN);
//! assert!(back.cause().is_none() && back.stack().is_none());
//! ```

/// Error chain walking and code resolution
pub mod chain;
/// Code, captured stack and coded error
pub mod types;
/// Coder capability and `Result` extensions
pub mod traits;
/// Macros for building and returning coded errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;

/// Status and body for transport boundaries (requires `serde` feature)
#[cfg(feature = "serde")]
pub mod boundary;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{find_coded, has_code, resolve_code, Chain};
pub use traits::*;
pub use types::{
    BoxedCodedResult, CapturedStack, Code, CodedError, CodedResult, ErrorVec, FormatMode,
    Rendered, SharedError, CODE_BAD_REQUEST, CODE_FORBIDDEN, CODE_NOT_FOUND, CODE_UNAUTHORIZED,
    CODE_UNKNOWN,
};

#[cfg(feature = "serde")]
pub use types::ErrorRecord;
