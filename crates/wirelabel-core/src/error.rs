//! Error primitives for label mapping.

use std::fmt::{self, Display, Formatter};

use serde_json::Value;
use thiserror::Error;

/// JSON token classification used when a non-string value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any integer or floating point number.
    Number,
    /// A string literal.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
    /// A byte string, produced by binary formats only.
    Bytes,
}

impl TokenKind {
    /// Classify a parsed JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Bytes => "bytes",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Coarse failure category, for callers that branch on the kind of failure
/// rather than its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token being decoded was not a string.
    MalformedInput,
    /// The string matched no label (or fallback identifier).
    UnknownEnumValue,
    /// Mapper configuration could not be parsed.
    Configuration,
    /// The surrounding JSON document was not valid JSON.
    Json,
}

/// Primary error type for label mapping operations.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Decoding was attempted on a token that is not a JSON string.
    #[error("expected string token, found {found}")]
    MalformedInput {
        /// Kind of the offending token.
        found: TokenKind,
    },
    /// No member of the target enum carries the supplied label.
    #[error("unable to parse \"{value}\" to enum \"{enum_name}\"")]
    UnknownEnumValue {
        /// The string read from the wire.
        value: String,
        /// Name of the enum that was being decoded.
        enum_name: &'static str,
    },
    /// Decode policy value was invalid.
    #[error("invalid decode policy")]
    InvalidDecodePolicy {
        /// Policy payload provided by the caller.
        value: String,
    },
    /// Mapper configuration payload could not be deserialised.
    #[error("invalid mapper configuration")]
    InvalidConfig {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// Input text was not a well-formed JSON document.
    #[error("malformed json document")]
    Json {
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
}

impl LabelError {
    /// Category of this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::UnknownEnumValue { .. } => ErrorKind::UnknownEnumValue,
            Self::InvalidDecodePolicy { .. } | Self::InvalidConfig { .. } => {
                ErrorKind::Configuration
            }
            Self::Json { .. } => ErrorKind::Json,
        }
    }

    pub(crate) fn unknown(value: impl Into<String>, enum_name: &'static str) -> Self {
        Self::UnknownEnumValue {
            value: value.into(),
            enum_name,
        }
    }
}

/// Convenience alias for label mapping results.
pub type LabelResult<T> = Result<T, LabelError>;
