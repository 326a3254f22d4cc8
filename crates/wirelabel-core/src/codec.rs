//! JSON-facing entry point for hosts that (de)serialise labelled enums.

use std::sync::Arc;

use serde_json::Value;

use crate::config::MapperConfig;
use crate::error::{LabelError, LabelResult};
use crate::mapper::LabelMapper;
use crate::member::LabeledEnum;
use crate::registry::LabelRegistry;

/// Serialization configuration binding one mapper per enum type.
#[derive(Debug, Default)]
pub struct LabelCodec {
    registry: LabelRegistry,
}

impl LabelCodec {
    /// Create a codec whose mappers follow `config`.
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self {
            registry: LabelRegistry::new(config),
        }
    }

    /// Create a codec from a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidConfig`] when the document cannot be parsed.
    pub fn from_config_str(raw: &str) -> LabelResult<Self> {
        MapperConfig::from_json_str(raw).map(Self::new)
    }

    /// Registry backing this codec.
    #[must_use]
    pub const fn registry(&self) -> &LabelRegistry {
        &self.registry
    }

    /// Shared mapper for `E`.
    #[must_use]
    pub fn mapper<E: LabeledEnum>(&self) -> Arc<LabelMapper<E>> {
        self.registry.mapper::<E>()
    }

    /// Wire label for `member`.
    #[must_use]
    pub fn encode<E: LabeledEnum>(&self, member: E) -> &'static str {
        self.mapper::<E>().encode(member)
    }

    /// Member for a raw wire string.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::UnknownEnumValue`] when nothing matches `label`.
    pub fn decode<E: LabeledEnum>(&self, label: &str) -> LabelResult<E> {
        self.mapper::<E>().decode(label)
    }

    /// Wire label for `member` as a JSON string value.
    #[must_use]
    pub fn to_value<E: LabeledEnum>(&self, member: E) -> Value {
        self.mapper::<E>().to_value(member)
    }

    /// Member for a parsed JSON token.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::MalformedInput`] for non-string tokens and
    /// [`LabelError::UnknownEnumValue`] for unmatched strings.
    pub fn from_value<E: LabeledEnum>(&self, value: &Value) -> LabelResult<E> {
        self.mapper::<E>().decode_value(value)
    }

    /// Render `member` as a JSON string literal, quotes included.
    #[must_use]
    pub fn to_json<E: LabeledEnum>(&self, member: E) -> String {
        self.to_value(member).to_string()
    }

    /// Parse a JSON document holding exactly one enum token.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Json`] when `raw` is not valid JSON, and otherwise
    /// the errors of [`from_value`](Self::from_value).
    pub fn from_json<E: LabeledEnum>(&self, raw: &str) -> LabelResult<E> {
        let value: Value =
            serde_json::from_str(raw).map_err(|source| LabelError::Json { source })?;
        self.from_value(&value)
    }
}
