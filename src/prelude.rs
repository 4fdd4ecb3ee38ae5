//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use coded_error::prelude::*;
//!
//! fn load(id: u32) -> CodedResult<String> {
//!     ensure_code!(id != 0, CODE_BAD_REQUEST);
//!     std::fs::read_to_string(format!("/accounts/{id}.json")).wrap_code(CODE_NOT_FOUND)
//! }
//!
//! let err = load(9).unwrap_err();
//! assert_eq!(resolve_code(&err).http_status(), 404);
//! ```

// Macros
pub use crate::{bail_code, coded, ensure_code};

// Core types
pub use crate::types::{
    Code, CodedError, CodedResult, FormatMode, CODE_BAD_REQUEST, CODE_FORBIDDEN, CODE_NOT_FOUND,
    CODE_UNAUTHORIZED, CODE_UNKNOWN,
};

// Traits
pub use crate::traits::{Coder, ResultExt};

// Resolution
pub use crate::chain::{has_code, resolve_code};
