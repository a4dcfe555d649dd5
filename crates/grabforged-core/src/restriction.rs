//! Hard include/exclude filters applied before any scoring.

use crate::ids::TagId;
use serde::{Deserialize, Serialize};

/// A hard allow/deny gate on raw release titles.
///
/// Tag scoping happens in the caller: the filter itself never consults
/// `scope_tag_ids`, but the record carries them so callers can resolve
/// which restrictions apply to a wanted item's tag set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Restriction {
    /// At least one of these substrings must appear (when non-empty).
    #[serde(default)]
    pub must_contain: Vec<String>,
    /// Any of these substrings appearing rejects the release.
    #[serde(default)]
    pub must_not_contain: Vec<String>,
    /// Tags scoping this restriction to matching items; empty means it
    /// applies everywhere.
    #[serde(default)]
    pub scope_tag_ids: Vec<TagId>,
}

impl Restriction {
    /// Whether this restriction can never reject anything.
    pub fn is_empty(&self) -> bool {
        self.must_contain.is_empty() && self.must_not_contain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_tags_round_trip_and_default_to_global() {
        let scoped: Restriction =
            serde_json::from_str(r#"{"must_not_contain":["CAM"],"scope_tag_ids":[3,7]}"#)
                .unwrap();
        assert_eq!(scoped.scope_tag_ids, vec![TagId::new(3), TagId::new(7)]);

        let global: Restriction = serde_json::from_str(r#"{"must_not_contain":["CAM"]}"#).unwrap();
        assert!(global.scope_tag_ids.is_empty());
        assert!(!global.is_empty());
    }
}
