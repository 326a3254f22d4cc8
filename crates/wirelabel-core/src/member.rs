//! Static registration tables describing labelled enums.
//!
//! # Design
//! - Each enum supplies a declaration-ordered `Member` table at compile time.
//! - `labeled_enum!` generates the enum, its table, and `identifier()` from a
//!   single declaration so the three cannot drift apart.

use std::fmt::Debug;
use std::hash::Hash;

/// One declared member of a labelled enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<E> {
    /// The enum value this entry describes.
    pub value: E,
    /// Source identifier of the member, e.g. `"Paused"`.
    pub identifier: &'static str,
    /// Optional wire label overriding the identifier.
    pub label: Option<&'static str>,
}

impl<E> Member<E> {
    /// Describe a member with an optional override label.
    #[must_use]
    pub const fn new(value: E, identifier: &'static str, label: Option<&'static str>) -> Self {
        Self {
            value,
            identifier,
            label,
        }
    }

    /// String written to the wire for this member.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self.label {
            Some(label) => label,
            None => self.identifier,
        }
    }
}

/// Enum whose members can be mapped to and from wire labels.
///
/// Implement it by hand or let [`labeled_enum!`](crate::labeled_enum) generate it.
pub trait LabeledEnum: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Type name reported in decode diagnostics.
    const NAME: &'static str;

    /// Every member of the enum, in declaration order.
    fn members() -> &'static [Member<Self>];

    /// Source identifier of this member.
    fn identifier(&self) -> &'static str;
}

/// Declare an enum together with its [`LabeledEnum`] registration table.
///
/// Members followed by `=> "label"` serialise as that label; the others fall
/// back to their identifier. The macro derives `Debug`, `Clone`, `Copy`,
/// `PartialEq`, `Eq` and `Hash`, so those must not be derived again.
///
/// ```
/// wirelabel_core::labeled_enum! {
///     /// Lifecycle of a record.
///     pub enum Status {
///         /// Live record.
///         Active => "ACTIVE",
///         /// Temporarily disabled.
///         Paused,
///         /// Soft-deleted.
///         Deleted => "DEL",
///     }
/// }
///
/// use wirelabel_core::LabeledEnum;
/// assert_eq!(Status::NAME, "Status");
/// assert_eq!(Status::Paused.identifier(), "Paused");
/// ```
#[macro_export]
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident $(=> $label:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$member_meta])*
                $member,
            )+
        }

        impl $crate::LabeledEnum for $name {
            const NAME: &'static str = ::core::stringify!($name);

            fn members() -> &'static [$crate::Member<Self>] {
                const MEMBERS: &[$crate::Member<$name>] = &[
                    $(
                        $crate::Member::new(
                            $name::$member,
                            ::core::stringify!($member),
                            $crate::__optional_label!($($label)?),
                        ),
                    )+
                ];
                MEMBERS
            }

            fn identifier(&self) -> &'static str {
                match self {
                    $( Self::$member => ::core::stringify!($member), )+
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __optional_label {
    () => {
        ::core::option::Option::None
    };
    ($label:literal) => {
        ::core::option::Option::Some($label)
    };
}
