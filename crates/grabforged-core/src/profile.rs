//! Quality definitions and quality profiles.
//!
//! Both are owned by the external configuration store and read-only to
//! this core. A [`QualityProfile`] orders [`QualityDefinition`] tiers by
//! preference; the decision engine ranks candidates by their position in
//! that order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::{ProfileId, QualityId};
use crate::quality::{Resolution, Source};

/// One named quality tier (e.g. "WEB-1080p").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityDefinition {
    /// Identifier referenced by profile items.
    pub id: QualityId,
    /// Human-readable tier name.
    pub name: String,
    /// Source this tier describes.
    pub source: Source,
    /// Resolution this tier describes.
    pub resolution: Resolution,
    /// Minimum acceptable size in MB per minute of runtime.
    pub min_size_mb_per_min: f64,
    /// Maximum acceptable size in MB per minute of runtime.
    pub max_size_mb_per_min: f64,
    /// Preferred size in MB per minute of runtime, used for tie-breaks.
    pub preferred_size_mb_per_min: f64,
    /// Relative weight for ordering tiers outside a profile.
    pub weight: i32,
}

impl QualityDefinition {
    /// Whether this definition describes the given (source, resolution) pair.
    pub fn matches(&self, source: Source, resolution: Resolution) -> bool {
        self.source == source && self.resolution == resolution
    }
}

/// One entry in a profile's ordered preference list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileItem {
    /// The quality tier this entry references.
    pub quality_id: QualityId,
    /// Disabled entries are kept for ordering but never grabbed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// An ordered quality preference list with an upgrade cutoff.
///
/// Index 0 is the most preferred tier. The cutoff names the tier beyond
/// which automatic upgrading stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfile {
    /// Profile identifier.
    pub id: ProfileId,
    /// Human-readable profile name.
    pub name: String,
    /// Whether upgrades past an existing file are allowed at all.
    pub upgrade_allowed: bool,
    /// Quality tier beyond which automatic upgrading stops.
    pub cutoff: QualityId,
    /// Ordered preference list, most preferred first.
    pub items: Vec<ProfileItem>,
}

impl QualityProfile {
    /// Validate the profile invariant: the cutoff must appear among the
    /// enabled items.
    pub fn validate(&self) -> Result<()> {
        let cutoff_enabled = self
            .items
            .iter()
            .any(|item| item.enabled && item.quality_id == self.cutoff);
        if cutoff_enabled {
            Ok(())
        } else {
            Err(Error::CutoffNotInProfile {
                profile: self.id,
                cutoff: self.cutoff,
            })
        }
    }

    /// Position of a quality in the preference list, if enabled.
    pub fn position_of(&self, quality_id: QualityId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.enabled && item.quality_id == quality_id)
    }

    /// Preference rank of a quality: `item count - index`, higher is better.
    /// Returns `None` when the quality is not an enabled item.
    pub fn rank_of(&self, quality_id: QualityId) -> Option<u32> {
        self.position_of(quality_id)
            .map(|idx| (self.items.len() - idx) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(cutoff: i64, items: &[(i64, bool)]) -> QualityProfile {
        QualityProfile {
            id: ProfileId::new(1),
            name: "HD".into(),
            upgrade_allowed: true,
            cutoff: QualityId::new(cutoff),
            items: items
                .iter()
                .map(|&(id, enabled)| ProfileItem {
                    quality_id: QualityId::new(id),
                    enabled,
                })
                .collect(),
        }
    }

    #[test]
    fn cutoff_must_be_enabled_item() {
        assert!(profile(2, &[(1, true), (2, true)]).validate().is_ok());
        assert!(profile(3, &[(1, true), (2, true)]).validate().is_err());
        // Present but disabled is still invalid.
        assert!(profile(2, &[(1, true), (2, false)]).validate().is_err());
    }

    #[test]
    fn rank_is_higher_for_earlier_items() {
        let p = profile(1, &[(1, true), (2, true), (3, true)]);
        assert_eq!(p.rank_of(QualityId::new(1)), Some(3));
        assert_eq!(p.rank_of(QualityId::new(3)), Some(1));
        assert_eq!(p.rank_of(QualityId::new(9)), None);
    }

    #[test]
    fn disabled_items_are_not_ranked() {
        let p = profile(1, &[(1, true), (2, false)]);
        assert_eq!(p.rank_of(QualityId::new(2)), None);
    }
}
