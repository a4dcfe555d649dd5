//! Data model for parsed release information.

mod release;
mod special;

pub use release::{AudioBlock, ParsedRelease, QualityBlock};
pub use special::SpecialType;
