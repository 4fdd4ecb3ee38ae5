//! Chain resolution: recovering codes from arbitrarily wrapped errors.
//!
//! Every function here walks the [`source`](core::error::Error::source) links
//! of an error, starting with the error itself, and checks each node for the
//! [`Coder`](crate::traits::Coder) capability by downcasting to
//! [`CodedError`]. Chains may freely mix coded and plain errors.
//!
//! Walking is unbounded. Chains built from [`CodedError`] are acyclic because
//! a cause must exist before the error wrapping it; a foreign error type whose
//! `source` leads back to itself makes these functions loop.
//!
//! # Examples
//!
//! ```
//! use coded_error::{chain, CodedError, CODE_BAD_REQUEST, CODE_NOT_FOUND, CODE_UNKNOWN};
//!
//! let inner = CodedError::new(CODE_BAD_REQUEST);
//! let outer = CodedError::wrap(CODE_NOT_FOUND, inner);
//!
//! assert_eq!(chain::resolve_code(&outer), CODE_NOT_FOUND);
//! assert!(chain::has_code(Some(&outer), &CODE_BAD_REQUEST));
//!
//! let plain = std::io::Error::other("disk on fire");
//! assert_eq!(chain::resolve_code(&plain), CODE_UNKNOWN);
//! ```

use crate::types::{Code, CodedError, ErrorVec, CODE_UNKNOWN};
use core::error::Error;
use core::iter::FusedIterator;
use std::sync::Arc;

/// Iterator over an error and its causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `err`.
    #[inline]
    pub fn new(err: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(err) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Capability check for a single node.
///
/// Boxed and `Arc`ed coded errors forward `source` to the inner error's cause,
/// so they are unwrapped here or the inner code would be skipped.
#[inline]
pub fn as_coded<'a>(node: &'a (dyn Error + 'static)) -> Option<&'a CodedError> {
    if let Some(coded) = node.downcast_ref::<CodedError>() {
        return Some(coded);
    }
    if let Some(boxed) = node.downcast_ref::<Box<CodedError>>() {
        return Some(&**boxed);
    }
    node.downcast_ref::<Arc<CodedError>>().map(|shared| &**shared)
}

/// Returns the outermost [`CodedError`] in the chain.
#[inline]
pub fn find_coded<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a CodedError> {
    Chain::new(err).find_map(as_coded)
}

/// Returns the code of the outermost [`CodedError`] in the chain, or
/// [`CODE_UNKNOWN`] when there is none.
///
/// ```
/// use coded_error::{chain, CodedError, CODE_UNAUTHORIZED};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Handler(CodedError);
///
/// impl fmt::Display for Handler {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "handler failed: {}", self.0)
///     }
/// }
///
/// impl std::error::Error for Handler {
///     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
///         Some(&self.0)
///     }
/// }
///
/// let err = Handler(CodedError::new(CODE_UNAUTHORIZED));
/// assert_eq!(chain::resolve_code(&err), CODE_UNAUTHORIZED);
/// ```
pub fn resolve_code(err: &(dyn Error + 'static)) -> Code {
    match find_coded(err) {
        Some(coded) => coded.code().clone(),
        None => CODE_UNKNOWN,
    }
}

/// Reports whether any node in the chain carries a code numerically equal to
/// `candidate`.
///
/// The walk does not stop at the first [`CodedError`]: a non-matching node is
/// passed through and its cause examined. `None` yields `false`.
pub fn has_code(err: Option<&(dyn Error + 'static)>, candidate: &Code) -> bool {
    let Some(err) = err else {
        return false;
    };
    Chain::new(err)
        .filter_map(as_coded)
        .any(|coded| coded.code().matches(candidate))
}

/// Collects every code in the chain, outermost first.
///
/// ```
/// use coded_error::{chain, CodedError, CODE_BAD_REQUEST, CODE_NOT_FOUND};
///
/// let err = CodedError::wrap(
///     CODE_NOT_FOUND,
///     CodedError::wrap(CODE_BAD_REQUEST, std::io::Error::other("eof")),
/// );
/// let codes = chain::collect_codes(&err);
/// assert_eq!(codes.as_slice(), &[CODE_NOT_FOUND, CODE_BAD_REQUEST]);
/// ```
pub fn collect_codes(err: &(dyn Error + 'static)) -> ErrorVec<Code> {
    Chain::new(err)
        .filter_map(as_coded)
        .map(|coded| coded.code().clone())
        .collect()
}
