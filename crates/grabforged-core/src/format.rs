//! Custom formats: named, condition-based tags applied to releases for
//! scoring. The raw records here are what the configuration store hands
//! us; `grabforged-formats` compiles them into an evaluatable set.

use serde::{Deserialize, Serialize};

use crate::ids::{FormatId, ProfileId};

/// Which release attribute a [`Condition`] evaluates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// Regex over the raw release title.
    ReleaseName,
    /// Regex over the parsed release group.
    ReleaseGroup,
    /// Regex over the parsed source name.
    Source,
    /// Regex over the parsed resolution name.
    Resolution,
    /// Regex over the parsed video codec name.
    Codec,
    /// Regex over the parsed audio codec name.
    AudioCodec,
    /// Regex over the parsed audio channel layout (e.g. "5.1").
    AudioChannels,
    /// Regex over the parsed ISO-639-1 language codes.
    Language,
    /// Regex over the parsed edition/special markers.
    Edition,
    /// Size range expression (`>N`, `<N`, `N-M`) against the candidate size in MB.
    Size,
    /// Regex over indexer-reported flags (e.g. "freeleech").
    IndexerFlag,
}

/// A single condition within a custom format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// Attribute this condition inspects.
    pub kind: ConditionKind,
    /// Regex or size-range expression, depending on `kind`.
    pub pattern: String,
    /// Invert the raw match result.
    #[serde(default)]
    pub negate: bool,
    /// Required conditions must all hold for the format to match.
    #[serde(default)]
    pub required: bool,
}

/// A named, condition-based tag applied to releases for scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFormat {
    /// Format identifier.
    pub id: FormatId,
    /// Human-readable format name.
    pub name: String,
    /// Whether renaming templates may reference this format.
    #[serde(default)]
    pub include_when_renaming: bool,
    /// Ordered condition list. A format with no conditions never matches.
    pub conditions: Vec<Condition>,
}

/// Per-profile score for a matched format. Pairs absent from
/// configuration contribute zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FormatScore {
    /// The profile this score applies to.
    pub profile_id: ProfileId,
    /// The format being scored.
    pub format_id: FormatId,
    /// Signed score contribution when the format matches.
    pub score: i64,
}
