//! Grabforged - release-title parsing and grab-decision core
//!
//! In-process library for media automation: parses scene and fansub
//! release titles, scores candidates against quality profiles and
//! custom formats, and decides grab/upgrade/reject per wanted item.
//! This crate wires the workspace together and adds the one piece of
//! mutable state, the per-item search throttle.
//!
//! ```
//! use grabforged::pipeline::{EvaluationSnapshot, Evaluator};
//! use grabforged_core::{
//!     Candidate, IndexerId, ProfileId, ProfileItem, Protocol, QualityDefinition,
//!     QualityId, QualityProfile, Resolution, Source,
//! };
//!
//! let definitions = vec![QualityDefinition {
//!     id: QualityId::new(1),
//!     name: "WEB-1080p".into(),
//!     source: Source::WebDl,
//!     resolution: Resolution::_1080p,
//!     min_size_mb_per_min: 5.0,
//!     max_size_mb_per_min: 100.0,
//!     preferred_size_mb_per_min: 50.0,
//!     weight: 1,
//! }];
//! let profile = QualityProfile {
//!     id: ProfileId::new(1),
//!     name: "HD".into(),
//!     upgrade_allowed: true,
//!     cutoff: QualityId::new(1),
//!     items: vec![ProfileItem { quality_id: QualityId::new(1), enabled: true }],
//! };
//!
//! let snapshot =
//!     EvaluationSnapshot::new(definitions, profile, &[], vec![], vec![]).unwrap();
//! let evaluator = Evaluator::new(snapshot);
//!
//! let candidate = Candidate {
//!     title: "Show.S01E01.1080p.WEB-DL.x264-GRP".into(),
//!     size_mb: 2000,
//!     protocol: Protocol::Torrent,
//!     indexer_id: IndexerId::new(1),
//!     published_at: chrono::Utc::now(),
//!     indexer_flags: vec![],
//! };
//! let verdict = evaluator.evaluate_batch(&[candidate], None, 45);
//! assert_eq!(verdict.best, Some(0));
//! ```

pub mod cooldown;
pub mod pipeline;

pub use cooldown::{next_allowed_at, CooldownState, SearchThrottle};
pub use pipeline::{BatchVerdict, CandidateOutcome, EvaluationSnapshot, Evaluator};

// Re-export the workspace crates so callers need only one dependency.
pub use grabforged_core as core;
pub use grabforged_decision as decision;
pub use grabforged_formats as formats;
pub use grabforged_parser as parser;
