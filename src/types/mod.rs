//! Error types and utilities.
//!
//! This module provides the code value, the captured stack and the coded
//! error that ties them together.
//!
//! # Examples
//!
//! ```
//! use coded_error::{CodedError, FormatMode, CODE_UNAUTHORIZED};
//!
//! let err = CodedError::wrap(CODE_UNAUTHORIZED, std::io::Error::other("token expired"));
//!
//! println!("{}", err.render(FormatMode::Verbose));
//! // [40100000] - authentication failed token expired
//! //     at my_app::login (./src/login.rs:42:15)
//! //     ...
//! ```
use smallvec::SmallVec;

pub mod code;
pub mod coded_error;
pub mod error_formatter;
pub mod stack;

pub use code::*;
pub use coded_error::*;
pub use error_formatter::{FormatMode, Rendered};
pub use stack::{CapturedStack, Frame};

/// SmallVec-backed collection used when gathering codes from a chain.
///
/// Most chains carry one or two codes, so two elements are kept inline.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias that fails with a [`CodedError`].
pub type CodedResult<T> = Result<T, CodedError>;

/// Result alias with a boxed [`CodedError`] for reduced stack size.
pub type BoxedCodedResult<T> = Result<T, Box<CodedError>>;
