use crate::types::Code;

/// Capability of exposing a [`Code`] from an error value.
///
/// Only [`CodedError`](crate::CodedError) implements this. The chain resolver
/// detects the capability by downcasting each node of an error chain.
pub trait Coder {
    /// Returns the code attached to this error.
    fn coder(&self) -> &Code;

    /// HTTP status derived from [`Coder::coder`].
    #[inline]
    fn http_status(&self) -> u16 {
        self.coder().http_status()
    }
}

impl<T: Coder + ?Sized> Coder for Box<T> {
    #[inline]
    fn coder(&self) -> &Code {
        (**self).coder()
    }
}

impl<T: Coder + ?Sized> Coder for std::sync::Arc<T> {
    #[inline]
    fn coder(&self) -> &Code {
        (**self).coder()
    }
}
