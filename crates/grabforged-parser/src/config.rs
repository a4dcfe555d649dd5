//! Parser configuration.

/// Tunable confidence-scoring parameters.
///
/// The direction of each adjustment is fixed (episode identity, quality,
/// and release group raise confidence; short titles and leftover numeric
/// tokens lower it); the magnitudes are policy and can be tuned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceTunables {
    /// Starting score before any adjustment.
    pub base: u8,
    /// Added when an episode identity was extracted.
    pub episode_bonus: u8,
    /// Added when a quality marker was extracted.
    pub quality_bonus: u8,
    /// Added when a release group was extracted.
    pub group_bonus: u8,
    /// Subtracted when the resolved title is shorter than 2 characters.
    pub short_title_penalty: u8,
    /// Subtracted when unresolved numeric tokens remain in the title span.
    pub numeric_ambiguity_penalty: u8,
    /// Scores below this floor should be surfaced for manual confirmation
    /// rather than acted on automatically.
    pub review_floor: u8,
}

impl Default for ConfidenceTunables {
    fn default() -> Self {
        Self {
            base: 50,
            episode_bonus: 15,
            quality_bonus: 15,
            group_bonus: 10,
            short_title_penalty: 20,
            numeric_ambiguity_penalty: 10,
            review_floor: 30,
        }
    }
}

/// Configuration for the parser.
///
/// Use the builder to customize:
///
/// ```
/// use grabforged_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder().detect_anime(false).build();
/// assert!(!config.detect_anime);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Whether to detect anime-specific metadata (absolute episodes,
    /// fansub group brackets, release hashes).
    pub detect_anime: bool,
    /// Confidence-scoring tunables.
    pub confidence: ConfidenceTunables,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            detect_anime: true,
            confidence: ConfidenceTunables::default(),
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for [`ParserConfig`].
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    detect_anime: Option<bool>,
    confidence: Option<ConfidenceTunables>,
}

impl ParserConfigBuilder {
    /// Toggle anime-specific detection.
    pub fn detect_anime(mut self, value: bool) -> Self {
        self.detect_anime = Some(value);
        self
    }

    /// Override the confidence tunables.
    pub fn confidence(mut self, tunables: ConfidenceTunables) -> Self {
        self.confidence = Some(tunables);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        let defaults = ParserConfig::default();
        ParserConfig {
            detect_anime: self.detect_anime.unwrap_or(defaults.detect_anime),
            confidence: self.confidence.unwrap_or(defaults.confidence),
        }
    }
}
