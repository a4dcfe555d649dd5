//! Restriction filtering.
//!
//! Restrictions are hard gates checked against the raw release title
//! before any parsing-based scoring: a release failing here is rejected
//! no matter what the profile or formats would say.

use grabforged_core::Restriction;
use tracing::debug;

/// Why a release failed restriction filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictionVerdict {
    /// The release passed every restriction.
    Allowed,
    /// A `must_not_contain` term was found in the title.
    ForbiddenTerm(String),
    /// None of the `must_contain` terms were found.
    MissingRequiredTerm,
}

impl RestrictionVerdict {
    /// Whether the release may proceed to scoring.
    pub fn is_allowed(&self) -> bool {
        matches!(self, RestrictionVerdict::Allowed)
    }
}

/// Check a raw title against a set of restrictions.
///
/// Matching is case-insensitive substring containment. `must_not_contain`
/// terms are checked first and short-circuit; `must_contain` requires at
/// least one hit across all non-empty lists.
pub fn check(raw_title: &str, restrictions: &[Restriction]) -> RestrictionVerdict {
    let lower = raw_title.to_lowercase();

    for restriction in restrictions {
        for term in &restriction.must_not_contain {
            if !term.is_empty() && lower.contains(&term.to_lowercase()) {
                debug!(title = %raw_title, %term, "release rejected by forbidden term");
                return RestrictionVerdict::ForbiddenTerm(term.clone());
            }
        }
    }

    let mut any_required = false;
    for restriction in restrictions {
        for term in &restriction.must_contain {
            if term.is_empty() {
                continue;
            }
            any_required = true;
            if lower.contains(&term.to_lowercase()) {
                return RestrictionVerdict::Allowed;
            }
        }
    }

    if any_required {
        debug!(title = %raw_title, "release missing every required term");
        RestrictionVerdict::MissingRequiredTerm
    } else {
        RestrictionVerdict::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restriction(must: &[&str], must_not: &[&str]) -> Restriction {
        Restriction {
            must_contain: must.iter().map(|s| s.to_string()).collect(),
            must_not_contain: must_not.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_restrictions_allow_everything() {
        assert!(check("Any.Release.1080p", &[]).is_allowed());
        assert!(check("Any.Release.1080p", &[Restriction::default()]).is_allowed());
    }

    #[test]
    fn forbidden_term_rejects_case_insensitively() {
        let rules = [restriction(&[], &["x265"])];
        let verdict = check("Movie.2020.1080p.X265-GRP", &rules);
        assert_eq!(verdict, RestrictionVerdict::ForbiddenTerm("x265".into()));
    }

    #[test]
    fn must_not_wins_over_must() {
        let rules = [restriction(&["1080p"], &["CAM"])];
        let verdict = check("Movie.2020.1080p.CAM-GRP", &rules);
        assert!(!verdict.is_allowed());
        assert!(matches!(verdict, RestrictionVerdict::ForbiddenTerm(_)));
    }

    #[test]
    fn any_required_term_suffices() {
        let rules = [restriction(&["x264", "x265"], &[])];
        assert!(check("Movie.2020.1080p.x265-GRP", &rules).is_allowed());
        assert_eq!(
            check("Movie.2020.1080p.XviD-GRP", &rules),
            RestrictionVerdict::MissingRequiredTerm
        );
    }
}
