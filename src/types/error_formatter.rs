//! Textual representations of a [`CodedError`].

use crate::types::CodedError;
use core::fmt::{self, Display};

/// Representation selected when rendering a [`CodedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatMode {
    /// `[<code>] - <message>`.
    #[default]
    Plain,
    /// The plain text as an escaped, double-quoted string literal.
    Quoted,
    /// Plain text, then ` <cause>` when a cause exists, then one line per stack frame.
    Verbose,
    /// JSON record with code, message, reference, cause and stack.
    ///
    /// Empty fields are omitted. Requires the `serde` feature; without it this
    /// renders like [`FormatMode::Verbose`].
    Detailed,
}

/// Display adapter returned by [`CodedError::render`].
pub struct Rendered<'a> {
    error: &'a CodedError,
    mode: FormatMode,
}

impl<'a> Rendered<'a> {
    #[inline]
    pub(crate) fn new(error: &'a CodedError, mode: FormatMode) -> Self {
        Self { error, mode }
    }

    /// Returns the selected mode.
    #[inline]
    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    fn write_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.error.code(), f)?;
        if let Some(cause) = self.error.cause() {
            write!(f, " {}", cause)?;
        }
        if let Some(stack) = self.error.stack() {
            f.write_str(&stack.render(true))?;
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    fn write_detailed(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = crate::types::ErrorRecord::detailed(self.error);
        let json = serde_json::to_string(&record).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }

    #[cfg(not(feature = "serde"))]
    fn write_detailed(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_verbose(f)
    }
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            FormatMode::Plain => Display::fmt(self.error.code(), f),
            FormatMode::Quoted => write!(f, "{:?}", self.error.short_text()),
            FormatMode::Verbose => self.write_verbose(f),
            FormatMode::Detailed => self.write_detailed(f),
        }
    }
}
