//! End-to-end candidate evaluation.
//!
//! Wires the crates together: parse the title, apply restrictions, run
//! the decision engine, and fold a batch down to one best pick. The
//! whole pass is pure; a batch of N candidates always produces N
//! outcomes and a single bad candidate never aborts the rest.

use grabforged_core::{
    Candidate, CustomFormat, FormatScore, QualityDefinition, QualityId, QualityProfile,
    Restriction, Result,
};
use grabforged_decision::{
    pick_best, DecisionEngine, DecisionOptions, GrabDecision, Outcome, RankedCandidate,
};
use grabforged_formats::{restriction, CompiledFormatSet};
use grabforged_parser::{config::ParserConfig, ParsedRelease, Parser};
use tracing::{debug, info};

/// One configuration snapshot, compiled and validated for evaluation.
///
/// Built once per evaluation round from the records the configuration
/// store hands over; regex compilation happens here so the per-candidate
/// path stays allocation-light.
#[derive(Debug, Clone)]
pub struct EvaluationSnapshot {
    /// All known quality tiers.
    pub definitions: Vec<QualityDefinition>,
    /// The wanted item's quality profile.
    pub profile: QualityProfile,
    /// Compiled custom formats.
    pub formats: CompiledFormatSet,
    /// Per-profile format scores.
    pub scores: Vec<FormatScore>,
    /// Restrictions already resolved for the item's tag set.
    pub restrictions: Vec<Restriction>,
    /// Decision policy knobs.
    pub options: DecisionOptions,
    /// Parser configuration, including confidence tunables.
    pub parser: ParserConfig,
}

impl EvaluationSnapshot {
    /// Validate the profile and compile the formats.
    pub fn new(
        definitions: Vec<QualityDefinition>,
        profile: QualityProfile,
        formats: &[CustomFormat],
        scores: Vec<FormatScore>,
        restrictions: Vec<Restriction>,
    ) -> Result<Self> {
        profile.validate()?;
        Ok(Self {
            definitions,
            profile,
            formats: CompiledFormatSet::compile(formats),
            scores,
            restrictions,
            options: DecisionOptions::default(),
            parser: ParserConfig::default(),
        })
    }

    /// Override the decision policy knobs.
    pub fn with_options(mut self, options: DecisionOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the parser configuration.
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

/// What happened to one candidate in a batch.
#[derive(Debug, Clone)]
pub enum CandidateOutcome {
    /// The candidate was parsed and scored.
    Evaluated {
        /// The parsed release.
        release: ParsedRelease,
        /// The engine's decision.
        decision: GrabDecision,
    },
    /// The candidate never reached scoring.
    Skipped {
        /// Why it was skipped.
        reason: String,
    },
}

impl CandidateOutcome {
    /// Whether this candidate was accepted (grab or upgrade).
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            CandidateOutcome::Evaluated { decision, .. } if decision.is_accepted()
        )
    }

    fn reject(release: ParsedRelease, mut decision: GrabDecision, reason: String) -> Self {
        decision.outcome = Outcome::Reject;
        decision.rejection_reasons.push(reason);
        CandidateOutcome::Evaluated { release, decision }
    }
}

/// Result of evaluating a whole batch for one wanted item.
#[derive(Debug, Clone)]
pub struct BatchVerdict {
    /// One outcome per input candidate, in input order.
    pub outcomes: Vec<CandidateOutcome>,
    /// Index of the best accepted candidate, when any was accepted.
    pub best: Option<usize>,
}

/// Evaluates candidates against one snapshot.
#[derive(Debug, Clone)]
pub struct Evaluator {
    snapshot: EvaluationSnapshot,
    parser: Parser,
}

impl Evaluator {
    /// Create an evaluator over a snapshot.
    pub fn new(snapshot: EvaluationSnapshot) -> Self {
        let parser = Parser::new(snapshot.parser.clone());
        Self { snapshot, parser }
    }

    /// The snapshot this evaluator runs against.
    pub fn snapshot(&self) -> &EvaluationSnapshot {
        &self.snapshot
    }

    /// Evaluate one candidate.
    pub fn evaluate(
        &self,
        candidate: &Candidate,
        current_file_quality: Option<QualityId>,
    ) -> CandidateOutcome {
        if candidate.size_mb <= 0 {
            return CandidateOutcome::Skipped {
                reason: format!("reported size {} MB is not positive", candidate.size_mb),
            };
        }

        let verdict = restriction::check(&candidate.title, &self.snapshot.restrictions);
        if let Some(reason) = restriction_reason(&verdict) {
            return CandidateOutcome::Skipped { reason };
        }

        let release = self.parser.parse(&candidate.title);
        let engine = DecisionEngine::new(
            &self.snapshot.definitions,
            &self.snapshot.formats,
            &self.snapshot.scores,
            self.snapshot.options,
        );
        let decision = engine.evaluate(
            &release,
            &candidate.title,
            candidate.size_mb,
            &candidate.indexer_flags,
            &self.snapshot.profile,
            current_file_quality,
        );

        // Low-confidence parses are returned, not acted on: an automatic
        // evaluator downgrades them to rejects for manual review.
        let floor = self.snapshot.parser.confidence.review_floor;
        if decision.is_accepted() && release.confidence < floor {
            let reason = format!(
                "parse confidence {} below review floor {}",
                release.confidence, floor
            );
            debug!(title = %candidate.title, %reason, "downgrading to reject");
            return CandidateOutcome::reject(release, decision, reason);
        }

        CandidateOutcome::Evaluated { release, decision }
    }

    /// Evaluate a whole batch and pick the best accepted candidate.
    ///
    /// Always returns one outcome per input candidate. `runtime_min` is
    /// the wanted item's expected runtime, used for the preferred-size
    /// tie-break.
    pub fn evaluate_batch(
        &self,
        candidates: &[Candidate],
        current_file_quality: Option<QualityId>,
        runtime_min: u32,
    ) -> BatchVerdict {
        let outcomes: Vec<CandidateOutcome> = candidates
            .iter()
            .map(|candidate| self.evaluate(candidate, current_file_quality))
            .collect();

        let ranked: Vec<RankedCandidate<'_>> = outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| match outcome {
                CandidateOutcome::Evaluated { decision, .. } => Some(RankedCandidate {
                    index,
                    size_mb: candidates[index].size_mb,
                    decision,
                }),
                CandidateOutcome::Skipped { .. } => None,
            })
            .collect();

        let best = pick_best(&ranked, &self.snapshot.definitions, runtime_min);
        if let Some(index) = best {
            info!(
                title = %candidates[index].title,
                candidates = candidates.len(),
                "selected best candidate"
            );
        } else {
            debug!(candidates = candidates.len(), "no candidate accepted");
        }
        BatchVerdict { outcomes, best }
    }
}

fn restriction_reason(verdict: &restriction::RestrictionVerdict) -> Option<String> {
    use restriction::RestrictionVerdict::*;
    match verdict {
        Allowed => None,
        ForbiddenTerm(term) => Some(format!("title contains forbidden term \"{term}\"")),
        MissingRequiredTerm => Some("title missing every required term".into()),
    }
}
