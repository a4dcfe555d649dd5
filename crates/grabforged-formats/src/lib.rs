//! # grabforged-formats
//!
//! Custom format matching and restriction filtering.
//!
//! - [`CompiledFormatSet`] -- custom formats compiled once per
//!   configuration snapshot and evaluated against each parsed release.
//! - [`restriction::check`] -- hard must-contain / must-not-contain
//!   gates applied to the raw title before any scoring.
//!
//! ```
//! use grabforged_core::{Condition, ConditionKind, CustomFormat, FormatId};
//! use grabforged_formats::CompiledFormatSet;
//! use grabforged_parser::parse;
//!
//! let formats = vec![CustomFormat {
//!     id: FormatId::new(1),
//!     name: "x265".into(),
//!     include_when_renaming: false,
//!     conditions: vec![Condition {
//!         kind: ConditionKind::Codec,
//!         pattern: "x265".into(),
//!         negate: false,
//!         required: false,
//!     }],
//! }];
//!
//! let set = CompiledFormatSet::compile(&formats);
//! let release = parse("Movie.2020.1080p.BluRay.x265-GRP");
//! let matches = set.matches(&release, &release.release_title, 4000, &[]);
//! assert_eq!(matches.len(), 1);
//! ```

mod compiled;
pub mod restriction;
mod size;

pub use compiled::{CompiledFormat, CompiledFormatSet, FormatMatch};
pub use restriction::RestrictionVerdict;
pub use size::SizeRange;
