//! Release-name parsing pipeline.
//!
//! Extractors run in a fixed order over the shared token stream, each
//! claiming spans in a [`SpanSet`](crate::lexer::SpanSet); the title
//! resolver takes whatever is left. The whole pipeline is pure: the same
//! input always yields the same [`ParsedRelease`], which is what makes
//! results safe to cache by raw title.

mod audio;
mod episode;
mod metadata;
mod quality;
mod title;

use crate::config::ParserConfig;
use crate::lexer::{Lexer, SpanSet};
use crate::model::ParsedRelease;

/// Parse a release name using default configuration.
pub fn parse(input: &str) -> ParsedRelease {
    parse_with_config(input, &ParserConfig::default())
}

/// Parse a release name with custom configuration.
///
/// Extractors are applied most-specific first so that episode and
/// quality patterns claim their tokens before the title resolver sees
/// the leftovers.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParsedRelease {
    let lexer = Lexer::new(input);
    let mut release = ParsedRelease::new(input);
    let mut consumed = SpanSet::new();

    episode::extract(&lexer, &mut release, &mut consumed, config);
    quality::extract(&lexer, &mut release, &mut consumed);
    audio::extract(&lexer, &mut release, &mut consumed);
    metadata::extract(&lexer, &mut release, &mut consumed, config);
    title::resolve(&lexer, &mut release, &consumed);

    release.confidence = score_confidence(&release, &lexer, &consumed, config);
    release
}

/// Compute the 0-100 confidence score for a finished parse.
fn score_confidence(
    release: &ParsedRelease,
    lexer: &Lexer,
    consumed: &SpanSet,
    config: &ParserConfig,
) -> u8 {
    let t = &config.confidence;
    let mut score = i16::from(t.base);

    if release.has_episode_identity() {
        score += i16::from(t.episode_bonus);
    }
    if release.has_quality() {
        score += i16::from(t.quality_bonus);
    }
    if release.release_group.is_some() {
        score += i16::from(t.group_bonus);
    }
    if release.title.chars().count() < 2 {
        score -= i16::from(t.short_title_penalty);
    }
    if title::unresolved_numbers(lexer, consumed) >= 2 {
        score -= i16::from(t.numeric_ambiguity_penalty);
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use grabforged_core::{Resolution, Source, VideoCodec};

    #[test]
    fn standard_episode_release() {
        let result = parse("The.Expanse.S03E04.720p.WEB-DL.x264-GRP");
        assert_eq!(result.title, "The Expanse");
        assert_eq!(result.season, Some(3));
        assert_eq!(result.episodes, vec![4]);
        assert_eq!(result.quality.resolution, Resolution::_720p);
        assert_eq!(result.quality.source, Source::WebDl);
        assert_eq!(result.quality.codec, Some(VideoCodec::X264));
        assert_eq!(result.release_group.as_deref(), Some("GRP"));
        assert_eq!(result.confidence, 90);
    }

    #[test]
    fn bare_title_gets_base_confidence() {
        let result = parse("Some Random Words");
        assert!(!result.has_episode_identity());
        assert!(!result.has_quality());
        assert_eq!(
            result.confidence,
            ParserConfig::default().confidence.base
        );
    }

    #[test]
    fn hyphenated_title_survives_whole() {
        let result = parse("The.Walking.Dead-Daryl.S01E01.720p.HDTV.x264");
        assert_eq!(result.title, "The Walking Dead Daryl");
        assert_eq!(result.release_group, None);
        assert_eq!(result.season, Some(1));
    }

    #[test]
    fn leftover_numbers_lower_confidence() {
        let with_noise = parse("Show 42 17 S01E01.720p");
        let clean = parse("Show S01E01.720p");
        assert!(with_noise.confidence < clean.confidence);
    }

    #[test]
    fn empty_title_is_penalized_not_rejected() {
        let result = parse("S01E01.720p.WEB-DL");
        assert!(result.title.len() < 2);
        assert!(result.confidence < 90);
        assert!(result.has_episode_identity());
    }

    #[test]
    fn confidence_is_clamped() {
        let tunables = crate::config::ConfidenceTunables {
            base: 90,
            episode_bonus: 50,
            quality_bonus: 50,
            ..Default::default()
        };
        let config = ParserConfig::builder().confidence(tunables).build();
        let result = parse_with_config("Show.S01E01.720p.BluRay.x264-GRP", &config);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn parsing_is_pure() {
        let a = parse("[SubsPlease] Frieren - 08 (1080p) [ABCD1234].mkv");
        let b = parse("[SubsPlease] Frieren - 08 (1080p) [ABCD1234].mkv");
        assert_eq!(a.title, b.title);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.absolute_episode, b.absolute_episode);
    }

    #[test]
    fn empty_input_yields_empty_release() {
        let result = parse("");
        assert!(result.title.is_empty());
        assert!(result.episodes.is_empty());
        assert!(!result.has_quality());
    }
}
