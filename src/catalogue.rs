//! Fixed option catalogues
//!
//! Every option-valued answer is a closed enum whose variants carry a stable
//! string id. The ids are what the configuration, logs and serialized
//! answers use, so they never change once published.

use crate::error::{Error, Result};

/// A closed set of options with stable ids
pub trait EnumOption: Copy + PartialEq + Sized + 'static {
    /// Catalogue name used in error messages
    const CATALOGUE: &'static str;

    /// All options in display order
    fn variants() -> &'static [Self];

    /// Stable id of this option
    fn id(&self) -> &'static str;

    /// Position of this option in [`EnumOption::variants`]
    fn to_index(&self) -> usize {
        Self::variants()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    /// Option at `index`, wrapping around the catalogue
    fn from_index(index: usize) -> Self {
        let variants = Self::variants();
        variants[index % variants.len()]
    }

    /// Parse an option from its stable id
    fn from_id(id: &str) -> Result<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.id() == id)
            .ok_or_else(|| Error::UnknownOption {
                catalogue: Self::CATALOGUE,
                id: id.to_string(),
            })
    }
}

/// Declare an option enum together with its ids.
///
/// Generates the enum, serde renames matching the ids, and the
/// `EnumOption`, `Display` and `FromStr` impls.
macro_rules! option_catalogue {
    (
        $(#[$meta:meta])*
        $name:ident, $catalogue:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $id:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $id)] $variant, )+
        }

        impl $crate::catalogue::EnumOption for $name {
            const CATALOGUE: &'static str = $catalogue;

            fn variants() -> &'static [Self] {
                &[ $( $name::$variant ),+ ]
            }

            fn id(&self) -> &'static str {
                match self {
                    $( $name::$variant => $id, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::catalogue::EnumOption::id(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <$name as $crate::catalogue::EnumOption>::from_id(s)
            }
        }
    };
}

pub(crate) use option_catalogue;
