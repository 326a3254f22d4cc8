//! Read policy and mapper configuration.

use std::str::FromStr;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LabelError, LabelResult, TokenKind};

/// How strings that match no declared label are treated on decode.
///
/// The default, [`IdentifierFallback`](Self::IdentifierFallback), is more
/// lenient than a label-only converter: it also accepts the identifier of an
/// unlabelled member, so every such member reads back what it writes. Pick
/// [`Strict`](Self::Strict) for label-only behaviour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Only declared labels decode.
    Strict,
    /// Declared labels first, then identifiers of members without a label.
    #[default]
    IdentifierFallback,
}

impl DecodePolicy {
    #[must_use]
    /// Render the policy as its snake case string representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::IdentifierFallback => "identifier_fallback",
        }
    }
}

impl FromStr for DecodePolicy {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "identifier_fallback" => Ok(Self::IdentifierFallback),
            other => Err(LabelError::InvalidDecodePolicy {
                value: other.to_string(),
            }),
        }
    }
}

/// Settings shared by every mapper created from one registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// Policy applied when decoding.
    pub decode_policy: DecodePolicy,
}

impl MapperConfig {
    /// Configuration that accepts declared labels only.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            decode_policy: DecodePolicy::Strict,
        }
    }

    /// Replace the decode policy.
    #[must_use]
    pub const fn with_decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }

    /// Parse configuration from a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidConfig`] when the document is not valid
    /// JSON, has the wrong shape, or names unknown fields.
    pub fn from_json_str(raw: &str) -> LabelResult<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|source| LabelError::InvalidConfig { source })?;
        Self::from_value(value)
    }

    /// Parse configuration from an already decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidConfig`] when the value is not an object,
    /// has the wrong shape, or names unknown fields.
    pub fn from_value(value: Value) -> LabelResult<Self> {
        // The derived impl also accepts the positional array form.
        if !value.is_object() {
            let source = serde_json::Error::invalid_type(
                Unexpected::Other(TokenKind::of(&value).as_str()),
                &"a configuration object",
            );
            return Err(LabelError::InvalidConfig { source });
        }
        serde_json::from_value(value).map_err(|source| LabelError::InvalidConfig { source })
    }
}
