//! The grab/upgrade/reject decision for a single candidate.

use grabforged_core::{
    FormatId, FormatScore, QualityDefinition, QualityId, QualityProfile, Resolution, Source,
};
use grabforged_formats::CompiledFormatSet;
use grabforged_parser::ParsedRelease;
use tracing::debug;

/// Multiplier applied to the quality rank when combining it with format
/// scores. Chosen so that no achievable sum of per-profile format scores
/// can cross a quality-rank boundary: quality is the primary axis,
/// formats only break ties within a tier.
pub const RANK_SCALE: i64 = 1_000_000;

/// Policy knobs for the decision engine.
#[derive(Debug, Clone, Copy)]
pub struct DecisionOptions {
    /// When the current file already meets the profile cutoff, allow an
    /// upgrade anyway if the candidate's format score exceeds
    /// [`format_upgrade_threshold`](Self::format_upgrade_threshold).
    /// Off by default: once the cutoff is met, upgrading stops.
    pub allow_format_upgrade_past_cutoff: bool,
    /// Format score a candidate must strictly exceed to upgrade past
    /// the cutoff. Only consulted when the knob above is enabled.
    pub format_upgrade_threshold: i64,
}

impl Default for DecisionOptions {
    fn default() -> Self {
        Self {
            allow_format_upgrade_past_cutoff: false,
            format_upgrade_threshold: 0,
        }
    }
}

/// Final verdict for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No current file exists; take this candidate.
    Grab,
    /// A current file exists and this candidate improves on it.
    Upgrade,
    /// Do not take this candidate.
    Reject,
}

/// One custom format that matched a candidate, with the score it
/// contributed under the evaluating profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedFormat {
    pub format_id: FormatId,
    pub score: i64,
}

/// The decision engine's output for one candidate release.
#[derive(Debug, Clone)]
pub struct GrabDecision {
    /// The verdict.
    pub outcome: Outcome,
    /// The quality tier the candidate mapped to, when one was found.
    pub quality_id: Option<QualityId>,
    /// Preference rank of that tier within the profile (higher is better).
    pub quality_rank: u32,
    /// Custom formats that matched the candidate, each with its
    /// per-profile score contribution.
    pub matched_formats: Vec<MatchedFormat>,
    /// Profile-local sum of matched format scores.
    pub format_score: i64,
    /// `quality_rank * RANK_SCALE + format_score`.
    pub total_score: i64,
    /// Human-readable reasons when the outcome is a reject.
    pub rejection_reasons: Vec<String>,
}

impl GrabDecision {
    fn reject(reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Reject,
            quality_id: None,
            quality_rank: 0,
            matched_formats: Vec::new(),
            format_score: 0,
            total_score: 0,
            rejection_reasons: vec![reason.into()],
        }
    }

    /// Whether the candidate should be taken.
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Grab | Outcome::Upgrade)
    }
}

/// Evaluates candidates against one configuration snapshot.
///
/// Everything here is borrowed from the snapshot: the engine itself is
/// cheap to construct per evaluation round and holds no mutable state.
#[derive(Debug, Clone)]
pub struct DecisionEngine<'a> {
    definitions: &'a [QualityDefinition],
    formats: &'a CompiledFormatSet,
    scores: &'a [FormatScore],
    options: DecisionOptions,
}

impl<'a> DecisionEngine<'a> {
    /// Create an engine over a configuration snapshot.
    pub fn new(
        definitions: &'a [QualityDefinition],
        formats: &'a CompiledFormatSet,
        scores: &'a [FormatScore],
        options: DecisionOptions,
    ) -> Self {
        Self {
            definitions,
            formats,
            scores,
            options,
        }
    }

    /// The quality definition matching a (source, resolution) pair.
    pub fn definition_for(
        &self,
        source: Source,
        resolution: Resolution,
    ) -> Option<&'a QualityDefinition> {
        self.definitions.iter().find(|d| d.matches(source, resolution))
    }

    /// Decide grab/upgrade/reject for one parsed candidate.
    ///
    /// `current_file_quality` is the quality tier of the file already on
    /// disk for the wanted item, when one exists.
    pub fn evaluate(
        &self,
        release: &ParsedRelease,
        raw_title: &str,
        size_mb: i64,
        indexer_flags: &[String],
        profile: &QualityProfile,
        current_file_quality: Option<QualityId>,
    ) -> GrabDecision {
        let Some(definition) =
            self.definition_for(release.quality.source, release.quality.resolution)
        else {
            return GrabDecision::reject("quality not permitted by profile");
        };
        let Some(quality_rank) = profile.rank_of(definition.id) else {
            return GrabDecision::reject("quality not permitted by profile");
        };

        let matched = self.formats.matches(release, raw_title, size_mb, indexer_flags);
        let matched_formats: Vec<MatchedFormat> = matched
            .iter()
            .map(|m| MatchedFormat {
                format_id: m.format_id,
                score: self.score_for(profile, m.format_id),
            })
            .collect();
        let format_score: i64 = matched_formats.iter().map(|m| m.score).sum();
        let total_score = i64::from(quality_rank) * RANK_SCALE + format_score;

        let mut decision = GrabDecision {
            outcome: Outcome::Grab,
            quality_id: Some(definition.id),
            quality_rank,
            matched_formats,
            format_score,
            total_score,
            rejection_reasons: Vec::new(),
        };

        let Some(current) = current_file_quality else {
            debug!(title = %raw_title, rank = quality_rank, score = total_score, "grab");
            return decision;
        };

        if !profile.upgrade_allowed {
            decision.outcome = Outcome::Reject;
            decision.rejection_reasons.push("upgrades disabled".into());
            return decision;
        }

        // The current file is scored on rank alone; no format evaluation
        // is available for a file already on disk.
        let current_rank = profile.rank_of(current).unwrap_or(0);
        let cutoff_rank = profile.rank_of(profile.cutoff).unwrap_or(u32::MAX);

        if current_rank >= cutoff_rank {
            let format_override = self.options.allow_format_upgrade_past_cutoff
                && format_score > self.options.format_upgrade_threshold;
            if !format_override {
                decision.outcome = Outcome::Reject;
                decision.rejection_reasons.push("cutoff already met".into());
                return decision;
            }
            decision.outcome = Outcome::Upgrade;
            return decision;
        }

        if quality_rank > current_rank || (quality_rank == current_rank && format_score > 0) {
            decision.outcome = Outcome::Upgrade;
        } else {
            decision.outcome = Outcome::Reject;
            decision.rejection_reasons.push("not an improvement".into());
        }
        decision
    }

    fn score_for(&self, profile: &QualityProfile, format_id: FormatId) -> i64 {
        self.scores
            .iter()
            .find(|s| s.profile_id == profile.id && s.format_id == format_id)
            .map_or(0, |s| s.score)
    }
}
