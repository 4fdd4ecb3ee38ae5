//! Core traits for coded errors.
//!
//! - [`Coder`]: capability of exposing a [`Code`](crate::Code)
//! - [`ResultExt`]: reclassify the error of a `Result` with a code
//!
//! # Examples
//!
//! ```
//! use coded_error::traits::{Coder, ResultExt};
//! use coded_error::CODE_BAD_REQUEST;
//!
//! let parsed: Result<u32, _> = "forty".parse::<u32>().wrap_code(CODE_BAD_REQUEST);
//! let err = parsed.unwrap_err();
//! assert_eq!(err.coder(), &CODE_BAD_REQUEST);
//! assert_eq!(err.http_status(), 400);
//! ```

pub mod coder;
pub mod result_ext;

pub use coder::Coder;
pub use result_ext::ResultExt;
