//! # grabforged-decision
//!
//! The quality decision engine: given a parsed release, a quality
//! profile, and compiled custom formats, decide grab, upgrade, or
//! reject, with human-readable reasons for every rejection.
//!
//! Scoring is two-axis: the quality tier's rank within the profile is
//! the primary axis, scaled by [`RANK_SCALE`] so that format scores can
//! only break ties within a tier, never cross one.
//!
//! Everything here is pure; evaluating N candidates concurrently and
//! folding with [`pick_best`] yields the same winner as a serial pass.

mod batch;
mod engine;

pub use batch::{pick_best, RankedCandidate};
pub use engine::{DecisionEngine, DecisionOptions, GrabDecision, MatchedFormat, Outcome, RANK_SCALE};
