//! Metadata extractor.
//!
//! Year, languages, release group, release hash, edition markers,
//! standalone version tags, and the container extension. Runs after the
//! episode and quality extractors, so a year already claimed as part of
//! an air date never reaches this pass.

use crate::config::ParserConfig;
use crate::lexer::{Lexer, Span, SpanSet, Token};
use crate::model::{ParsedRelease, SpecialType};

/// Language words and their ISO-639-1 codes.
///
/// A word is only treated as a language marker when it appears at or
/// after the first span another extractor claimed; words before that
/// point belong to the title ("The French Connection").
const LANGUAGES: &[(&str, &str)] = &[
    ("english", "en"),
    ("french", "fr"),
    ("german", "de"),
    ("spanish", "es"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("dutch", "nl"),
    ("russian", "ru"),
    ("polish", "pl"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("chinese", "zh"),
    ("swedish", "sv"),
    ("danish", "da"),
    ("norwegian", "no"),
    ("finnish", "fi"),
    ("hungarian", "hu"),
    ("czech", "cs"),
];

const CONTAINERS: &[&str] = &["mkv", "mp4", "avi", "m4v", "ts", "m2ts"];

/// Extract metadata from the token stream.
pub fn extract(
    lexer: &Lexer,
    release: &mut ParsedRelease,
    consumed: &mut SpanSet,
    config: &ParserConfig,
) {
    extract_container(lexer, consumed);
    if config.detect_anime {
        extract_release_hash(lexer, release, consumed);
    }
    extract_release_group(lexer, release, consumed, config);
    extract_year(lexer, release, consumed);

    // First claimed position marks where the structured tail of the
    // title begins; language words left of it stay in the title.
    let marker_start = first_consumed_start(consumed);

    let tokens = lexer.tokens();
    for (i, (token, span)) in tokens.iter().enumerate() {
        if consumed.is_consumed(span.clone()) {
            continue;
        }
        match token {
            Token::Edition(_) => {
                if release.special.is_none() {
                    release.special = Some(SpecialType::MovieEdition);
                }
                consumed.consume(span.clone());
            }
            Token::VersionTag(text) => {
                // Standalone v2 after an episode marker; versions glued
                // to the episode token were handled by the episode pass.
                if release.version.is_none()
                    && release.has_episode_identity()
                    && marker_start.is_some_and(|start| span.start >= start)
                {
                    if let Ok(v) = text[1..].parse::<u16>() {
                        release.version = Some(v);
                        consumed.consume(span.clone());
                    }
                }
            }
            Token::Word(text) => {
                let lower = text.to_lowercase();
                if marker_start.is_some_and(|start| span.start >= start) {
                    if let Some((_, code)) = LANGUAGES.iter().find(|(word, _)| *word == lower) {
                        release.languages.insert((*code).to_string());
                        consumed.consume(span.clone());
                        continue;
                    }
                }
                if lower == "multi"
                    && i > 0
                    && marker_start.is_some_and(|start| span.start >= start)
                {
                    // MULTI means several audio tracks; record nothing
                    // specific but keep it out of the title.
                    consumed.consume(span.clone());
                }
            }
            _ => {}
        }
    }
}

fn first_consumed_start(consumed: &SpanSet) -> Option<usize> {
    // A span at byte 0 is a leading fansub group, which sits before the
    // title rather than after it.
    consumed
        .spans()
        .iter()
        .map(|s| s.start)
        .filter(|&start| start > 0)
        .min()
}

/// Trailing `.ext` container suffix.
fn extract_container(lexer: &Lexer, consumed: &mut SpanSet) {
    let input = lexer.input();
    if let Some(dot) = input.rfind('.') {
        let ext = &input[dot + 1..];
        if CONTAINERS.contains(&ext.to_lowercase().as_str()) {
            consumed.consume(Span::new(dot, input.len()));
        }
    }
}

/// Bracketed 8-hex checksum, e.g. `[ABCD1234]`.
fn extract_release_hash(lexer: &Lexer, release: &mut ParsedRelease, consumed: &mut SpanSet) {
    if release.release_hash.is_some() {
        return;
    }
    let input = lexer.input();
    for group in lexer.bracket_groups() {
        if consumed.is_consumed(group.outer) {
            continue;
        }
        let content = &input[group.inner.start..group.inner.end];
        if content.len() == 8 && content.chars().all(|c| c.is_ascii_hexdigit()) {
            release.release_hash = Some(content.to_uppercase());
            consumed.consume(group.outer);
            return;
        }
    }
}

/// Release group: leading bracket group for fansub-shaped titles,
/// trailing `-GROUP` suffix otherwise.
fn extract_release_group(
    lexer: &Lexer,
    release: &mut ParsedRelease,
    consumed: &mut SpanSet,
    config: &ParserConfig,
) {
    if release.release_group.is_some() {
        return;
    }

    if config.detect_anime && lexer.is_fansub_style() {
        if let Some(group) = lexer.bracket_groups().first() {
            let content = lexer.input()[group.inner.start..group.inner.end].trim();
            // An 8-hex leading bracket is a checksum, not a group.
            let looks_like_hash =
                content.len() == 8 && content.chars().all(|c| c.is_ascii_hexdigit());
            if !content.is_empty() && !looks_like_hash {
                release.release_group = Some(content.to_string());
                consumed.consume(group.outer);
                return;
            }
        }
    }

    extract_trailing_group(lexer, release, consumed);
}

/// `...x264-GROUP` or `...x264-GROUP[uploader]` shapes: a hyphen plus
/// word with nothing significant after it except a container extension
/// or a bracketed uploader tag.
fn extract_trailing_group(lexer: &Lexer, release: &mut ParsedRelease, consumed: &mut SpanSet) {
    let tokens = lexer.tokens();
    for (i, (token, _)) in tokens.iter().enumerate().rev() {
        if !matches!(token, Token::Hyphen) {
            continue;
        }
        let Some((Token::Word(name), name_span)) = tokens.get(i + 1) else {
            continue;
        };
        if consumed.is_consumed(name_span.clone()) {
            continue;
        }
        // Only separators, brackets, bracketed tags, and a container
        // extension may follow a trailing group name. An episode or
        // quality token after the word means the hyphen joins two title
        // words ("The.Walking.Dead-Daryl.S01E01...") instead.
        let trailing_only = tokens.iter().skip(i + 2).all(|(t, s)| match t {
            Token::Dot | Token::Hyphen | Token::Underscore => true,
            Token::BracketOpen | Token::BracketClose => true,
            Token::Word(w) => {
                let lower = w.to_lowercase();
                CONTAINERS.contains(&lower.as_str()) || lexer.in_brackets(s.start)
            }
            Token::Number(_) => lexer.in_brackets(s.start),
            _ => false,
        });
        if trailing_only {
            release.release_group = Some((*name).to_string());
            consumed.consume(name_span.clone());
            // Claim the hyphen and anything after the group (container
            // extension, uploader brackets) so none of it reaches the
            // title resolver.
            consumed.consume(tokens[i].1.clone());
            for (_, s) in tokens.iter().skip(i + 2) {
                if !consumed.is_consumed(s.clone()) {
                    consumed.consume(s.clone());
                }
            }
            return;
        }
    }
}

/// Pick the release year among unclaimed `Year` tokens.
///
/// A year immediately followed by a season/episode marker is part of
/// the title ("1923 S01E01"); otherwise the last candidate wins, which
/// handles titles that themselves contain a year ("2012 2009 1080p").
fn extract_year(lexer: &Lexer, release: &mut ParsedRelease, consumed: &mut SpanSet) {
    if release.year.is_some() {
        return;
    }
    let tokens = lexer.tokens();
    let mut best: Option<(u16, Span)> = None;

    for (i, (token, span)) in tokens.iter().enumerate() {
        let Token::Year(text) = token else { continue };
        if consumed.is_consumed(span.clone()) {
            continue;
        }
        let Ok(year) = text.parse::<u16>() else {
            continue;
        };

        let mut next = i + 1;
        while next < tokens.len()
            && matches!(
                tokens[next].0,
                Token::Dot | Token::Hyphen | Token::Underscore
            )
        {
            next += 1;
        }
        let before_episode = next < tokens.len()
            && matches!(
                tokens[next].0,
                Token::SeasonEpisode(_) | Token::SeasonEpisodeX(_) | Token::SeasonOnly(_)
            );
        if before_episode {
            continue;
        }
        best = Some((year, span.clone().into()));
    }

    if let Some((year, span)) = best {
        release.year = Some(year);
        consumed.consume(span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{audio, episode, quality};

    fn parse_into(input: &str) -> ParsedRelease {
        let config = ParserConfig::default();
        let lexer = Lexer::new(input);
        let mut release = ParsedRelease::new(input);
        let mut consumed = SpanSet::new();
        episode::extract(&lexer, &mut release, &mut consumed, &config);
        quality::extract(&lexer, &mut release, &mut consumed);
        audio::extract(&lexer, &mut release, &mut consumed);
        extract(&lexer, &mut release, &mut consumed, &config);
        release
    }

    #[test]
    fn year_and_trailing_group() {
        let release = parse_into("Movie.Title.2024.1080p.BluRay.x264-SPARKS");
        assert_eq!(release.year, Some(2024));
        assert_eq!(release.release_group.as_deref(), Some("SPARKS"));
    }

    #[test]
    fn year_before_episode_stays_in_title() {
        let release = parse_into("1923.S01E01.720p.WEB-DL.x264-NTb");
        assert_eq!(release.year, None);
        assert_eq!(release.release_group.as_deref(), Some("NTb"));
    }

    #[test]
    fn fansub_group_and_hash() {
        let release = parse_into("[SubsPlease] Frieren - 08 (1080p) [F0A34B12].mkv");
        assert_eq!(release.release_group.as_deref(), Some("SubsPlease"));
        assert_eq!(release.release_hash.as_deref(), Some("F0A34B12"));
    }

    #[test]
    fn trailing_group_with_uploader_brackets() {
        let release = parse_into("Show.S01E01.720p.HDTV.x264-KILLERS[rartv]");
        assert_eq!(release.release_group.as_deref(), Some("KILLERS"));
    }

    #[test]
    fn language_words_after_markers() {
        let release = parse_into("Show.S01E01.FRENCH.720p.WEB-DL.x264-GRP");
        assert!(release.languages.contains("fr"));
    }

    #[test]
    fn language_word_in_title_is_kept() {
        let release = parse_into("The.French.Connection.1971.1080p.BluRay.x264-GRP");
        assert!(release.languages.is_empty());
        assert_eq!(release.year, Some(1971));
    }

    #[test]
    fn edition_marks_movie_edition() {
        let release = parse_into("Movie.2020.EXTENDED.1080p.BluRay.x264-GRP");
        assert_eq!(release.special, Some(SpecialType::MovieEdition));
    }

    #[test]
    fn hyphen_inside_title_is_not_a_group() {
        let release = parse_into("Spider-Man.2002.1080p.BluRay.x264");
        assert_eq!(release.release_group, None);
    }

    #[test]
    fn hyphenated_title_before_episode_marker_is_not_a_group() {
        let release = parse_into("The.Walking.Dead-Daryl.S01E01.720p.HDTV.x264");
        assert_eq!(release.release_group, None);
    }
}
