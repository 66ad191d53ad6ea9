//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use crate::ports::CodecError;

/// Errors raised by document accessors, rendering and parsing.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("No Id associated with this Document")]
    MissingId,

    #[error("No version associated with this Document")]
    MissingVersion,

    #[error("Cannot render document to JSON")]
    Rendering(#[source] CodecError),

    #[error("Cannot parse document from JSON")]
    Malformed(#[source] CodecError),

    #[error("Document JSON must be an object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Value for key '{key}' is not a {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Value for key '{key}' could not be converted: {source}")]
    Conversion {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    /// Creates a type mismatch error for a typed getter.
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        DocumentError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Creates a conversion error for a serde round trip through a value.
    pub fn conversion(key: impl Into<String>, source: serde_json::Error) -> Self {
        DocumentError::Conversion {
            key: key.into(),
            source,
        }
    }

    /// Returns the category of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DocumentError::MissingId | DocumentError::MissingVersion => ErrorCode::IllegalState,
            DocumentError::Rendering(_) => ErrorCode::RenderingFailed,
            DocumentError::Malformed(_) | DocumentError::NotAnObject { .. } => {
                ErrorCode::ParseFailed
            }
            DocumentError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            DocumentError::Conversion { .. } => ErrorCode::ConversionFailed,
        }
    }

    /// True for accessor misuse: reading an id or version that was never set.
    ///
    /// These signal a programming error. Callers are expected to check
    /// `has_id()` / `has_version()` first.
    pub fn is_illegal_state(&self) -> bool {
        self.code() == ErrorCode::IllegalState
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    IllegalState,
    RenderingFailed,
    ParseFailed,
    TypeMismatch,
    ConversionFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::IllegalState => "ILLEGAL_STATE",
            ErrorCode::RenderingFailed => "RENDERING_FAILED",
            ErrorCode::ParseFailed => "PARSE_FAILED",
            ErrorCode::TypeMismatch => "TYPE_MISMATCH",
            ErrorCode::ConversionFailed => "CONVERSION_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Short JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
