//! Typed ID wrappers providing compile-time safety for entity identifiers.
//!
//! Each ID type is a newtype over `i64`, matching the identifiers the
//! external configuration store hands us. The newtypes prevent accidental
//! misuse (e.g., passing a `FormatId` where a `ProfileId` is expected).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a newtype ID wrapper over `i64`.
///
/// The macro produces a struct with:
/// - `new(i64)` and `get()` accessors
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`, `Serialize`, `Deserialize`
/// - `Display` delegating to the inner value
/// - `From<i64>` conversion
macro_rules! typed_id {
    ($($(#[doc = $doc:expr])* $name:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(i64);

            impl $name {
                /// Wrap a raw identifier.
                #[must_use]
                pub const fn new(id: i64) -> Self {
                    Self(id)
                }

                /// Return the raw identifier value.
                #[must_use]
                pub const fn get(&self) -> i64 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<i64> for $name {
                fn from(id: i64) -> Self {
                    Self(id)
                }
            }
        )+
    };
}

typed_id!(
    /// Identifier for a wanted media item (episode, movie, album).
    ItemId,
    /// Identifier for a quality profile.
    ProfileId,
    /// Identifier for a custom format.
    FormatId,
    /// Identifier for a quality definition tier.
    QualityId,
    /// Identifier for an indexer.
    IndexerId,
    /// Identifier for a user-defined tag.
    TagId,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_ids_are_distinct_types() {
        let item = ItemId::new(7);
        assert_eq!(item.get(), 7);
        assert_eq!(item.to_string(), "7");
        assert_eq!(ItemId::from(7), item);
    }

    #[test]
    fn serde_transparent() {
        let id = QualityId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let back: QualityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
