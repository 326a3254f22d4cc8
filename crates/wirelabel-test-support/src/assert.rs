//! Assertion helpers for label mapping properties.

use anyhow::{Result, bail, ensure};
use wirelabel_core::{ErrorKind, LabelMapper, LabeledEnum};

/// Check that every member of `E` survives `decode(encode(member))`.
///
/// # Errors
///
/// Returns an error naming the first member whose wire label does not decode
/// back to itself.
pub fn assert_round_trip<E: LabeledEnum>(mapper: &LabelMapper<E>) -> Result<()> {
    for member in E::members() {
        let label = mapper.encode(member.value);
        let decoded = mapper.decode(label)?;
        ensure!(
            decoded == member.value,
            "{}::{} encoded as {label:?} but decoded to {decoded:?}",
            E::NAME,
            member.identifier
        );
    }
    Ok(())
}

/// Check that each member is written as its declared label, or its
/// identifier when it has none.
///
/// # Errors
///
/// Returns an error naming the first member written incorrectly.
pub fn assert_wire_names<E: LabeledEnum>(mapper: &LabelMapper<E>) -> Result<()> {
    for member in E::members() {
        let expected = member.label.unwrap_or(member.identifier);
        let actual = mapper.encode(member.value);
        ensure!(
            actual == expected,
            "{}::{} encoded as {actual:?}, expected {expected:?}",
            E::NAME,
            member.identifier
        );
    }
    Ok(())
}

/// Check that decoding `label` fails with `kind`.
///
/// # Errors
///
/// Returns an error when decoding succeeds or fails with another kind.
pub fn assert_decode_fails<E: LabeledEnum>(
    mapper: &LabelMapper<E>,
    label: &str,
    kind: ErrorKind,
) -> Result<()> {
    match mapper.decode(label) {
        Ok(member) => bail!("{label:?} unexpectedly decoded to {member:?}"),
        Err(err) => {
            ensure!(
                err.kind() == kind,
                "{label:?} failed with {:?}, expected {kind:?}: {err}",
                err.kind()
            );
            Ok(())
        }
    }
}
