//! Special-release classification.

/// Kind of special release indicated by markers in the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecialType {
    /// Original video animation.
    Ova,
    /// Original net animation.
    Ona,
    /// Special episode.
    Special,
    /// Recap episode.
    Recap,
    /// Alternate movie edition (extended, director's cut, ...).
    MovieEdition,
}

impl std::fmt::Display for SpecialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialType::Ova => write!(f, "OVA"),
            SpecialType::Ona => write!(f, "ONA"),
            SpecialType::Special => write!(f, "Special"),
            SpecialType::Recap => write!(f, "Recap"),
            SpecialType::MovieEdition => write!(f, "Movie Edition"),
        }
    }
}
