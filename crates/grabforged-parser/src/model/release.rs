//! Main parsed release structure.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use grabforged_core::{AudioCodec, HdrFormat, QualityModifier, Resolution, Source, VideoCodec};

use super::SpecialType;

/// Quality attributes extracted from a release title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityBlock {
    /// Video resolution; `Unknown` when the title carries no marker.
    pub resolution: Resolution,
    /// Source; `Unknown` when the title carries no marker.
    pub source: Source,
    /// Video codec if named.
    pub codec: Option<VideoCodec>,
    /// HDR format if named.
    pub hdr: Option<HdrFormat>,
    /// Remux or scene revision modifier if named.
    pub modifier: Option<QualityModifier>,
}

/// Audio attributes extracted from a release title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioBlock {
    /// Audio codec if named.
    pub codec: Option<AudioCodec>,
    /// Channel layout as written in the title (e.g. "5.1").
    pub channels: Option<String>,
}

/// Immutable result of parsing one release title.
///
/// Constructed once per raw title by the parse assembler and never
/// mutated afterward; parsing is a pure function of the input, so
/// results are safe to cache keyed by the raw title string.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRelease {
    /// Series/movie/artist title with original casing and articles.
    pub title: String,
    /// Lookup form: lowercased, leading article stripped.
    pub clean_title: String,
    /// Release year if named.
    pub year: Option<u16>,

    /// Season number for standard TV forms.
    pub season: Option<u16>,
    /// Episode numbers: empty, one, or a multi-episode list.
    pub episodes: Vec<u16>,
    /// Absolute episode number (anime numbering).
    pub absolute_episode: Option<u16>,
    /// Air date for daily shows.
    pub air_date: Option<NaiveDate>,
    /// Special-release classification if marked.
    pub special: Option<SpecialType>,
    /// Whether the title describes a batch/complete release.
    pub is_batch: bool,

    /// Quality attributes.
    pub quality: QualityBlock,
    /// Audio attributes.
    pub audio: AudioBlock,
    /// ISO-639-1 codes of languages named in the title; empty means
    /// unknown/default.
    pub languages: BTreeSet<String>,

    /// Release group if detected.
    pub release_group: Option<String>,
    /// Bracketed 8-hex checksum if present.
    pub release_hash: Option<String>,
    /// Version suffix (v2, v3, ...) if present.
    pub version: Option<u16>,

    /// Parse confidence, 0-100.
    pub confidence: u8,
    /// Original release title as provided.
    pub release_title: String,
}

impl ParsedRelease {
    /// Create an empty parse result for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            clean_title: String::new(),
            year: None,
            season: None,
            episodes: Vec::new(),
            absolute_episode: None,
            air_date: None,
            special: None,
            is_batch: false,
            quality: QualityBlock::default(),
            audio: AudioBlock::default(),
            languages: BTreeSet::new(),
            release_group: None,
            release_hash: None,
            version: None,
            confidence: 0,
            release_title: input.into(),
        }
    }

    /// Whether any episode identity was extracted (season/episode pair,
    /// air date, or absolute number).
    pub fn has_episode_identity(&self) -> bool {
        (self.season.is_some() && !self.episodes.is_empty())
            || self.air_date.is_some()
            || self.absolute_episode.is_some()
    }

    /// Whether any quality marker was extracted.
    pub fn has_quality(&self) -> bool {
        self.quality.resolution != Resolution::Unknown || self.quality.source != Source::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_release_is_empty() {
        let release = ParsedRelease::new("Show.S01E01.720p");
        assert_eq!(release.release_title, "Show.S01E01.720p");
        assert!(release.title.is_empty());
        assert!(!release.has_episode_identity());
        assert!(!release.has_quality());
    }

    #[test]
    fn episode_identity_forms() {
        let mut release = ParsedRelease::new("x");
        release.absolute_episode = Some(12);
        assert!(release.has_episode_identity());

        let mut release = ParsedRelease::new("x");
        release.season = Some(1);
        assert!(!release.has_episode_identity());
        release.episodes.push(1);
        assert!(release.has_episode_identity());
    }
}
