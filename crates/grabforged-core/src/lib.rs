//! # grabforged-core
//!
//! Shared data model for the grabforged decision core: the configuration
//! snapshot records handed in by the surrounding application (quality
//! definitions, profiles, custom formats, restrictions), the candidate
//! release shape produced by indexer searches, typed entity ids, and the
//! unified error type.
//!
//! Everything in this crate is plain data. Behavior lives in the sibling
//! crates (`grabforged-parser`, `grabforged-formats`,
//! `grabforged-decision`).

pub mod candidate;
pub mod error;
pub mod format;
pub mod ids;
pub mod profile;
pub mod quality;
pub mod restriction;
pub mod status;

pub use candidate::{Candidate, Protocol};
pub use error::{Error, Result};
pub use format::{Condition, ConditionKind, CustomFormat, FormatScore};
pub use ids::{FormatId, IndexerId, ItemId, ProfileId, QualityId, TagId};
pub use profile::{ProfileItem, QualityDefinition, QualityProfile};
pub use quality::{AudioCodec, HdrFormat, QualityModifier, Resolution, Source, VideoCodec};
pub use restriction::Restriction;
pub use status::ItemStatus;
