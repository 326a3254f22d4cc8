//! Forward and reverse lookup tables for one labelled enum.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::member::LabeledEnum;

/// Immutable label tables built from an enum's registration table.
///
/// Only members that declare a label appear in the forward and reverse maps.
/// Unlabelled members are kept in a separate identifier table consulted by the
/// identifier fallback policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap<E: LabeledEnum> {
    forward: HashMap<E, &'static str>,
    reverse: HashMap<&'static str, E>,
    identifiers: HashMap<&'static str, E>,
}

impl<E: LabeledEnum> LabelMap<E> {
    /// Build the tables by walking `E::members()` in declaration order.
    ///
    /// When two members share a label the later declaration wins the reverse
    /// entry and a warning is emitted.
    #[must_use]
    pub fn build() -> Self {
        let members = E::members();
        let mut forward = HashMap::with_capacity(members.len());
        let mut reverse = HashMap::with_capacity(members.len());
        let mut identifiers = HashMap::new();

        for member in members {
            let Some(label) = member.label else {
                identifiers.insert(member.identifier, member.value);
                continue;
            };
            forward.insert(member.value, label);
            if let Some(previous) = reverse.insert(label, member.value) {
                warn!(
                    enum_name = E::NAME,
                    label,
                    previous = previous.identifier(),
                    current = member.identifier,
                    "duplicate wire label; later member wins"
                );
            }
        }

        debug!(
            enum_name = E::NAME,
            members = members.len(),
            labels = forward.len(),
            "built label maps"
        );

        Self {
            forward,
            reverse,
            identifiers,
        }
    }

    /// Wire string for `member`: its label, or its identifier when unlabelled.
    #[must_use]
    pub fn encode(&self, member: E) -> &'static str {
        self.forward
            .get(&member)
            .copied()
            .unwrap_or_else(|| member.identifier())
    }

    /// Member carrying `label`, consulting only declared labels.
    #[must_use]
    pub fn lookup_label(&self, label: &str) -> Option<E> {
        self.reverse.get(label).copied()
    }

    /// Unlabelled member whose identifier equals `identifier`.
    #[must_use]
    pub fn lookup_identifier(&self, identifier: &str) -> Option<E> {
        self.identifiers.get(identifier).copied()
    }

    /// Member to label table.
    #[must_use]
    pub const fn forward(&self) -> &HashMap<E, &'static str> {
        &self.forward
    }

    /// Label to member table.
    #[must_use]
    pub const fn reverse(&self) -> &HashMap<&'static str, E> {
        &self.reverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::labeled_enum! {
        enum Status {
            Active => "ACTIVE",
            Paused,
            Deleted => "DEL",
        }
    }

    crate::labeled_enum! {
        enum Clash {
            First => "same",
            Second => "same",
            Third,
        }
    }

    crate::labeled_enum! {
        enum Shadow {
            Primary => "Secondary",
            Secondary,
        }
    }

    #[test]
    fn only_labelled_members_enter_the_maps() {
        let map = LabelMap::<Status>::build();
        assert_eq!(map.forward().len(), 2);
        assert_eq!(map.forward().get(&Status::Active), Some(&"ACTIVE"));
        assert_eq!(map.forward().get(&Status::Paused), None);
        assert_eq!(map.reverse().get("DEL"), Some(&Status::Deleted));
        assert!(!map.reverse().contains_key("Paused"));
    }

    #[test]
    fn reverse_is_the_inverse_of_forward() {
        let map = LabelMap::<Status>::build();
        assert_eq!(map.reverse().len(), map.forward().len());
        for (member, label) in map.forward() {
            assert_eq!(map.reverse().get(label), Some(member));
        }
    }

    #[test]
    fn encode_falls_back_to_identifier() {
        let map = LabelMap::<Status>::build();
        assert_eq!(map.encode(Status::Active), "ACTIVE");
        assert_eq!(map.encode(Status::Paused), "Paused");
        assert_eq!(map.encode(Status::Deleted), "DEL");
    }

    #[test]
    fn identifier_table_holds_unlabelled_members_only() {
        let map = LabelMap::<Status>::build();
        assert_eq!(map.lookup_identifier("Paused"), Some(Status::Paused));
        assert_eq!(map.lookup_identifier("Active"), None);
        assert_eq!(map.lookup_label("Paused"), None);
    }

    #[test]
    fn duplicate_labels_resolve_to_last_declared_member() {
        let map = LabelMap::<Clash>::build();
        assert_eq!(map.lookup_label("same"), Some(Clash::Second));
        assert_eq!(map.encode(Clash::First), "same");
        assert_eq!(map.encode(Clash::Second), "same");
        assert_eq!(map.encode(Clash::Third), "Third");
    }

    #[test]
    fn label_and_identifier_tables_are_separate() {
        let map = LabelMap::<Shadow>::build();
        assert_eq!(map.lookup_label("Secondary"), Some(Shadow::Primary));
        assert_eq!(map.lookup_identifier("Secondary"), Some(Shadow::Secondary));
    }

    #[test]
    fn rebuilding_produces_identical_tables() {
        assert_eq!(LabelMap::<Status>::build(), LabelMap::<Status>::build());
    }
}
