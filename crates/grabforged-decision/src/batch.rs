//! Reducing many candidate decisions to one best pick.
//!
//! The reduction is a pure fold over input order, so concurrent
//! evaluation of candidates never changes which one wins.

use grabforged_core::QualityDefinition;

use crate::engine::GrabDecision;

/// One evaluated candidate entering the fold.
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    /// Position in the original input batch.
    pub index: usize,
    /// Reported candidate size in MB.
    pub size_mb: i64,
    /// The engine's decision for this candidate.
    pub decision: &'a GrabDecision,
}

/// Pick the best accepted candidate.
///
/// Ordering: highest `total_score` first; on a tie, the candidate whose
/// size is closest to the matched tier's preferred size for the item's
/// runtime; on a further tie, the earliest in input order. Returns the
/// winning input index, or `None` when nothing was accepted.
pub fn pick_best(
    candidates: &[RankedCandidate<'_>],
    definitions: &[QualityDefinition],
    runtime_min: u32,
) -> Option<usize> {
    let mut best: Option<&RankedCandidate<'_>> = None;

    for candidate in candidates {
        if !candidate.decision.is_accepted() {
            continue;
        }
        match best {
            None => best = Some(candidate),
            Some(current) => {
                if beats(candidate, current, definitions, runtime_min) {
                    best = Some(candidate);
                }
            }
        }
    }

    best.map(|c| c.index)
}

/// Strictly-better comparison; equality keeps the incumbent, which is
/// what makes input order the final tie-break.
fn beats(
    challenger: &RankedCandidate<'_>,
    incumbent: &RankedCandidate<'_>,
    definitions: &[QualityDefinition],
    runtime_min: u32,
) -> bool {
    if challenger.decision.total_score != incumbent.decision.total_score {
        return challenger.decision.total_score > incumbent.decision.total_score;
    }
    let challenger_distance = preferred_distance(challenger, definitions, runtime_min);
    let incumbent_distance = preferred_distance(incumbent, definitions, runtime_min);
    challenger_distance < incumbent_distance
}

/// Absolute distance from the tier's preferred size for this runtime.
/// Candidates without a matched tier sort last.
fn preferred_distance(
    candidate: &RankedCandidate<'_>,
    definitions: &[QualityDefinition],
    runtime_min: u32,
) -> f64 {
    let Some(quality_id) = candidate.decision.quality_id else {
        return f64::INFINITY;
    };
    let Some(definition) = definitions.iter().find(|d| d.id == quality_id) else {
        return f64::INFINITY;
    };
    let preferred = definition.preferred_size_mb_per_min * f64::from(runtime_min);
    (candidate.size_mb as f64 - preferred).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GrabDecision, Outcome, RANK_SCALE};
    use grabforged_core::{QualityId, Resolution, Source};

    fn decision(outcome: Outcome, rank: u32, format_score: i64) -> GrabDecision {
        GrabDecision {
            outcome,
            quality_id: Some(QualityId::new(1)),
            quality_rank: rank,
            matched_formats: Vec::new(),
            format_score,
            total_score: i64::from(rank) * RANK_SCALE + format_score,
            rejection_reasons: Vec::new(),
        }
    }

    fn definitions() -> Vec<QualityDefinition> {
        vec![QualityDefinition {
            id: QualityId::new(1),
            name: "WEB-1080p".into(),
            source: Source::WebDl,
            resolution: Resolution::_1080p,
            min_size_mb_per_min: 5.0,
            max_size_mb_per_min: 100.0,
            preferred_size_mb_per_min: 50.0,
            weight: 1,
        }]
    }

    #[test]
    fn highest_score_wins() {
        let low = decision(Outcome::Grab, 1, 0);
        let high = decision(Outcome::Grab, 2, 0);
        let candidates = [
            RankedCandidate {
                index: 0,
                size_mb: 1000,
                decision: &low,
            },
            RankedCandidate {
                index: 1,
                size_mb: 1000,
                decision: &high,
            },
        ];
        assert_eq!(pick_best(&candidates, &definitions(), 45), Some(1));
    }

    #[test]
    fn size_closest_to_preferred_breaks_score_ties() {
        let a = decision(Outcome::Grab, 2, 0);
        let b = decision(Outcome::Grab, 2, 0);
        // Preferred size for 45 min at 50 MB/min is 2250 MB.
        let candidates = [
            RankedCandidate {
                index: 0,
                size_mb: 900,
                decision: &a,
            },
            RankedCandidate {
                index: 1,
                size_mb: 2200,
                decision: &b,
            },
        ];
        assert_eq!(pick_best(&candidates, &definitions(), 45), Some(1));
    }

    #[test]
    fn exact_ties_keep_input_order() {
        let a = decision(Outcome::Grab, 2, 0);
        let b = decision(Outcome::Grab, 2, 0);
        let candidates = [
            RankedCandidate {
                index: 0,
                size_mb: 2000,
                decision: &a,
            },
            RankedCandidate {
                index: 1,
                size_mb: 2000,
                decision: &b,
            },
        ];
        assert_eq!(pick_best(&candidates, &definitions(), 45), Some(0));
    }

    #[test]
    fn rejected_candidates_never_win() {
        let rejected = decision(Outcome::Reject, 5, 0);
        let accepted = decision(Outcome::Grab, 1, 0);
        let candidates = [
            RankedCandidate {
                index: 0,
                size_mb: 2000,
                decision: &rejected,
            },
            RankedCandidate {
                index: 1,
                size_mb: 2000,
                decision: &accepted,
            },
        ];
        assert_eq!(pick_best(&candidates, &definitions(), 45), Some(1));
    }

    #[test]
    fn all_rejected_yields_none() {
        let rejected = decision(Outcome::Reject, 5, 0);
        let candidates = [RankedCandidate {
            index: 0,
            size_mb: 2000,
            decision: &rejected,
        }];
        assert_eq!(pick_best(&candidates, &definitions(), 45), None);
    }
}
