//! Lazily initialised label mapper for one enum type.
//!
//! # Design
//! - The tables are built at most once per mapper through an atomic
//!   `OnceCell`; concurrent first callers wait for the single published build.
//! - After initialisation every call is a lock-free read.
//! - Read and write paths are exposed both as plain functions and as serde
//!   adapters (`Serialize` wrapper and `DeserializeSeed`).

use std::fmt::{self, Formatter};

use once_cell::sync::OnceCell;
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::config::DecodePolicy;
use crate::error::{LabelError, LabelResult, TokenKind};
use crate::map::LabelMap;
use crate::member::LabeledEnum;

/// Bidirectional member/label converter for the enum `E`.
#[derive(Debug)]
pub struct LabelMapper<E: LabeledEnum> {
    maps: OnceCell<LabelMap<E>>,
    policy: DecodePolicy,
}

impl<E: LabeledEnum> Default for LabelMapper<E> {
    fn default() -> Self {
        Self::new(DecodePolicy::default())
    }
}

impl<E: LabeledEnum> LabelMapper<E> {
    /// Create a mapper whose tables are built on first use.
    #[must_use]
    pub const fn new(policy: DecodePolicy) -> Self {
        Self {
            maps: OnceCell::new(),
            policy,
        }
    }

    /// Decode policy applied by [`decode`](Self::decode).
    #[must_use]
    pub const fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Whether the tables have been built yet.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.maps.get().is_some()
    }

    /// The label tables, building them on first access.
    #[must_use]
    pub fn maps(&self) -> &LabelMap<E> {
        self.maps.get_or_init(LabelMap::build)
    }

    /// Build the tables now rather than on the first conversion.
    pub fn preload(&self) {
        let _ = self.maps();
    }

    /// Wire label for `member`. Never fails.
    #[must_use]
    pub fn encode(&self, member: E) -> &'static str {
        self.maps().encode(member)
    }

    /// Resolve a wire string to its member.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::UnknownEnumValue`] when `label` matches no declared
    /// label and, under [`DecodePolicy::IdentifierFallback`], no identifier of
    /// an unlabelled member.
    pub fn decode(&self, label: &str) -> LabelResult<E> {
        let maps = self.maps();
        let found = match self.policy {
            DecodePolicy::Strict => maps.lookup_label(label),
            DecodePolicy::IdentifierFallback => maps
                .lookup_label(label)
                .or_else(|| maps.lookup_identifier(label)),
        };
        found.ok_or_else(|| LabelError::unknown(label, E::NAME))
    }

    /// Resolve a parsed JSON token. The token must be a string.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::MalformedInput`] for any non-string token, checked
    /// before lookup, and otherwise the errors of [`decode`](Self::decode).
    pub fn decode_value(&self, value: &Value) -> LabelResult<E> {
        match value {
            Value::String(label) => self.decode(label),
            other => Err(LabelError::MalformedInput {
                found: TokenKind::of(other),
            }),
        }
    }

    /// Wire label of `member` as a JSON string value.
    #[must_use]
    pub fn to_value(&self, member: E) -> Value {
        Value::String(self.encode(member).to_owned())
    }

    /// Serialisable view of `member` that writes its wire label.
    #[must_use]
    pub const fn labeled(&self, member: E) -> Labeled<'_, E> {
        Labeled {
            mapper: self,
            member,
        }
    }
}

/// A member paired with its mapper, serialised as one JSON string.
#[derive(Debug, Clone, Copy)]
pub struct Labeled<'a, E: LabeledEnum> {
    mapper: &'a LabelMapper<E>,
    member: E,
}

impl<E: LabeledEnum> Serialize for Labeled<'_, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.mapper.encode(self.member))
    }
}

impl<'de, E: LabeledEnum> DeserializeSeed<'de> for &LabelMapper<E> {
    type Value = E;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `deserialize_any` so non-string tokens reach the visitor and get the
        // malformed-input diagnostic instead of the format's own type error.
        deserializer.deserialize_any(LabelVisitor { mapper: self })
    }
}

struct LabelVisitor<'m, E: LabeledEnum> {
    mapper: &'m LabelMapper<E>,
}

impl<E: LabeledEnum> LabelVisitor<'_, E> {
    fn reject<DeErr: de::Error>(found: TokenKind) -> DeErr {
        DeErr::custom(LabelError::MalformedInput { found })
    }
}

impl<'de, E: LabeledEnum> Visitor<'de> for LabelVisitor<'_, E> {
    type Value = E;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "a string label of enum {}", E::NAME)
    }

    fn visit_str<DeErr: de::Error>(self, value: &str) -> Result<E, DeErr> {
        self.mapper.decode(value).map_err(DeErr::custom)
    }

    fn visit_bool<DeErr: de::Error>(self, _value: bool) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Boolean))
    }

    fn visit_i64<DeErr: de::Error>(self, _value: i64) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Number))
    }

    fn visit_u64<DeErr: de::Error>(self, _value: u64) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Number))
    }

    fn visit_i128<DeErr: de::Error>(self, _value: i128) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Number))
    }

    fn visit_u128<DeErr: de::Error>(self, _value: u128) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Number))
    }

    fn visit_f64<DeErr: de::Error>(self, _value: f64) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Number))
    }

    fn visit_bytes<DeErr: de::Error>(self, _value: &[u8]) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Bytes))
    }

    fn visit_unit<DeErr: de::Error>(self) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Null))
    }

    fn visit_none<DeErr: de::Error>(self) -> Result<E, DeErr> {
        Err(Self::reject(TokenKind::Null))
    }

    // A present optional is judged by the token it wraps.
    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<E, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<E, A::Error> {
        Err(Self::reject(TokenKind::Array))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<E, A::Error> {
        Err(Self::reject(TokenKind::Object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde::de::IntoDeserializer;
    use serde::de::value::{BytesDeserializer, Error as ValueError};
    use serde_json::json;

    crate::labeled_enum! {
        enum Status {
            Active => "ACTIVE",
            Paused,
            Deleted => "DEL",
        }
    }

    fn seed_decode(mapper: &LabelMapper<Status>, raw: &str) -> Result<Status, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let value = mapper.deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(value)
    }

    #[test]
    fn tables_are_built_lazily() {
        let mapper = LabelMapper::<Status>::default();
        assert!(!mapper.is_initialized());
        assert_eq!(mapper.encode(Status::Active), "ACTIVE");
        assert!(mapper.is_initialized());
    }

    #[test]
    fn preload_builds_tables() {
        let mapper = LabelMapper::<Status>::default();
        mapper.preload();
        assert!(mapper.is_initialized());
        assert_eq!(mapper.maps().forward().len(), 2);
    }

    #[test]
    fn encode_matches_documented_example() {
        let mapper = LabelMapper::<Status>::default();
        assert_eq!(mapper.encode(Status::Paused), "Paused");
        assert_eq!(mapper.encode(Status::Deleted), "DEL");
        assert_eq!(mapper.decode("ACTIVE").unwrap(), Status::Active);
        let err = mapper.decode("Unknown").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownEnumValue);
    }

    #[test]
    fn strict_policy_rejects_identifiers() {
        let mapper = LabelMapper::<Status>::new(DecodePolicy::Strict);
        assert!(matches!(
            mapper.decode("Paused"),
            Err(LabelError::UnknownEnumValue { ref value, enum_name: "Status" }) if value == "Paused"
        ));
        assert_eq!(mapper.decode("DEL").unwrap(), Status::Deleted);
    }

    #[test]
    fn fallback_policy_accepts_unlabelled_identifiers_only() {
        let mapper = LabelMapper::<Status>::new(DecodePolicy::IdentifierFallback);
        assert_eq!(mapper.decode("Paused").unwrap(), Status::Paused);
        assert_eq!(
            mapper.decode("Active").unwrap_err().kind(),
            ErrorKind::UnknownEnumValue
        );
    }

    #[test]
    fn decode_value_checks_token_type_first() {
        let mapper = LabelMapper::<Status>::default();
        for (value, found) in [
            (json!(1), TokenKind::Number),
            (json!(false), TokenKind::Boolean),
            (json!(null), TokenKind::Null),
            (json!(["ACTIVE"]), TokenKind::Array),
            (json!({"ACTIVE": true}), TokenKind::Object),
        ] {
            match mapper.decode_value(&value) {
                Err(LabelError::MalformedInput { found: actual }) => assert_eq!(actual, found),
                other => panic!("expected malformed input for {value}, got {other:?}"),
            }
        }
        assert_eq!(mapper.decode_value(&json!("DEL")).unwrap(), Status::Deleted);
    }

    #[test]
    fn to_value_emits_a_json_string() {
        let mapper = LabelMapper::<Status>::default();
        assert_eq!(mapper.to_value(Status::Active), json!("ACTIVE"));
        assert_eq!(mapper.to_value(Status::Paused), json!("Paused"));
    }

    #[test]
    fn labeled_serializes_as_single_string() {
        let mapper = LabelMapper::<Status>::default();
        let rendered = serde_json::to_string(&mapper.labeled(Status::Deleted)).unwrap();
        assert_eq!(rendered, "\"DEL\"");
        let rendered = serde_json::to_string(&[
            mapper.labeled(Status::Active),
            mapper.labeled(Status::Paused),
        ])
        .unwrap();
        assert_eq!(rendered, r#"["ACTIVE","Paused"]"#);
    }

    #[test]
    fn seed_reads_one_string_token() {
        let mapper = LabelMapper::<Status>::default();
        assert_eq!(seed_decode(&mapper, "\"ACTIVE\"").unwrap(), Status::Active);
        assert_eq!(seed_decode(&mapper, " \"Paused\" ").unwrap(), Status::Paused);
    }

    #[test]
    fn seed_rejects_non_string_tokens() {
        let mapper = LabelMapper::<Status>::default();
        for raw in ["7", "-1", "2.5", "true", "null", "[]", "[\"ACTIVE\"]", "{}"] {
            let err = seed_decode(&mapper, raw).unwrap_err();
            assert!(
                err.to_string().contains("expected string token"),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn seed_reports_unknown_labels_with_enum_name() {
        let mapper = LabelMapper::<Status>::default();
        let err = seed_decode(&mapper, "\"Unknown\"").unwrap_err();
        assert!(err.to_string().contains("unable to parse \"Unknown\" to enum \"Status\""));
    }

    #[test]
    fn wide_integers_and_bytes_are_malformed_input() {
        let mapper = LabelMapper::<Status>::default();
        let wide = (&mapper)
            .deserialize(IntoDeserializer::<'_, ValueError>::into_deserializer(7_i128))
            .unwrap_err();
        assert_eq!(wide.to_string(), "expected string token, found number");

        let unsigned = (&mapper)
            .deserialize(IntoDeserializer::<'_, ValueError>::into_deserializer(7_u128))
            .unwrap_err();
        assert_eq!(unsigned.to_string(), "expected string token, found number");

        let bytes = (&mapper)
            .deserialize(BytesDeserializer::<ValueError>::new(b"ACTIVE"))
            .unwrap_err();
        assert_eq!(bytes.to_string(), "expected string token, found bytes");
    }

    #[test]
    fn present_optional_is_judged_by_its_contents() {
        let mapper = LabelMapper::<Status>::default();
        let visitor = || LabelVisitor { mapper: &mapper };

        let inner = IntoDeserializer::<'_, ValueError>::into_deserializer("DEL");
        assert_eq!(visitor().visit_some(inner).unwrap(), Status::Deleted);

        let inner = IntoDeserializer::<'_, ValueError>::into_deserializer(3_u64);
        let err = visitor().visit_some(inner).unwrap_err();
        assert_eq!(err.to_string(), "expected string token, found number");
    }
}
