//! Wire representation of a [`CodedError`].
//!
//! The default serialized form carries only `code`, `message` and
//! `reference`. Cause text and stack frames appear only in the detailed
//! record produced by [`ErrorRecord::detailed`], which is meant for internal
//! diagnostics, never for responses.

use super::CodedError;
use crate::types::Code;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized error record. Empty optional fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Numeric code.
    pub code: u32,
    /// Message of the code.
    pub message: String,
    /// Documentation link, empty when the code has none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
    /// Display text of the cause. Empty in the default wire form.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cause: String,
    /// Verbose stack rendering. Empty in the default wire form.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stack: String,
}

impl ErrorRecord {
    /// Record with code, message and reference only.
    pub fn from_code(code: &Code) -> Self {
        Self {
            code: code.code(),
            message: code.message().to_owned(),
            reference: code.reference().to_owned(),
            ..Default::default()
        }
    }

    /// Record including cause text and the verbose stack rendering.
    pub fn detailed(error: &CodedError) -> Self {
        Self {
            cause: error.cause().map(|c| c.to_string()).unwrap_or_default(),
            stack: error.stack().map(|s| s.render(true)).unwrap_or_default(),
            ..Self::from_code(error.code())
        }
    }

    /// Rebuilds the code through the ad hoc constructor.
    pub fn to_code(&self) -> Code {
        Code::with_reference(self.code, self.message.clone(), self.reference.clone())
    }
}

impl From<&Code> for ErrorRecord {
    #[inline]
    fn from(code: &Code) -> Self {
        Self::from_code(code)
    }
}

impl Serialize for CodedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ErrorRecord::from_code(&self.code).serialize(serializer)
    }
}

/// Deserialized errors never carry a cause or a stack.
impl<'de> Deserialize<'de> for CodedError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ErrorRecord::deserialize(deserializer)?;
        Ok(CodedError::detached(record.to_code()))
    }
}
