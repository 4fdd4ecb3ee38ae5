use super::CodedError;
use crate::traits::Coder;
use crate::types::{Code, FormatMode};
use core::fmt::{Debug, Display};

/// `{}` is the short text, `{:#}` the verbose form with cause and stack.
impl Display for CodedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.render(FormatMode::Plain), f);
        }
        Display::fmt(&self.render(FormatMode::Verbose), f)
    }
}

/// `{:?}` is the quoted short text, `{:#?}` the detailed record.
impl Debug for CodedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.render(FormatMode::Quoted), f);
        }
        Display::fmt(&self.render(FormatMode::Detailed), f)
    }
}

impl core::error::Error for CodedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl Coder for CodedError {
    #[inline]
    fn coder(&self) -> &Code {
        &self.code
    }
}
