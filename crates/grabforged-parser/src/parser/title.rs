//! Title resolver.
//!
//! Runs last: whatever spans no extractor claimed are the title. Spans
//! are taken from the original-cased input and joined in original
//! order, so the display title keeps its casing while `clean_title`
//! provides the lookup form.

use crate::lexer::{is_delimiter, Lexer, SpanSet, Token};
use crate::model::ParsedRelease;

/// Resolve the title from the spans no extractor consumed.
pub fn resolve(lexer: &Lexer, release: &mut ParsedRelease, consumed: &SpanSet) {
    let input = lexer.input();
    let mut parts: Vec<&str> = Vec::new();

    for (token, span) in lexer.tokens() {
        if is_delimiter(token) || consumed.is_consumed(span.clone()) {
            continue;
        }
        parts.push(&input[span.clone()]);
    }

    let title = parts.join(" ").trim().to_string();
    release.clean_title = clean(&title);
    release.title = title;
}

/// Lowercase and strip a leading article for lookup purposes.
fn clean(title: &str) -> String {
    let lower = title.to_lowercase();
    for article in ["the ", "a ", "an "] {
        if let Some(rest) = lower.strip_prefix(article) {
            if !rest.is_empty() {
                return rest.to_string();
            }
        }
    }
    lower
}

/// Count of numeric tokens left unclaimed after all extractors ran.
///
/// Leftover numbers are the main ambiguity signal for confidence
/// scoring: they usually mean an episode or year pattern failed to
/// claim something it should have.
pub fn unresolved_numbers(lexer: &Lexer, consumed: &SpanSet) -> usize {
    lexer
        .tokens()
        .iter()
        .filter(|(token, span)| {
            matches!(token, Token::Number(_)) && !consumed.is_consumed(span.clone())
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::parser::{audio, episode, metadata, quality};

    fn parse_into(input: &str) -> ParsedRelease {
        let config = ParserConfig::default();
        let lexer = Lexer::new(input);
        let mut release = ParsedRelease::new(input);
        let mut consumed = SpanSet::new();
        episode::extract(&lexer, &mut release, &mut consumed, &config);
        quality::extract(&lexer, &mut release, &mut consumed);
        audio::extract(&lexer, &mut release, &mut consumed);
        metadata::extract(&lexer, &mut release, &mut consumed, &config);
        resolve(&lexer, &mut release, &consumed);
        release
    }

    #[test]
    fn title_keeps_original_casing() {
        let release = parse_into("The.Expanse.S03E04.720p.WEB-DL.x264-GRP");
        assert_eq!(release.title, "The Expanse");
        assert_eq!(release.clean_title, "expanse");
    }

    #[test]
    fn fansub_group_excluded_from_title() {
        let release = parse_into("[SubsPlease] Sousou no Frieren - 08 (1080p) [ABCD1234].mkv");
        assert_eq!(release.title, "Sousou no Frieren");
        assert_eq!(release.clean_title, "sousou no frieren");
    }

    #[test]
    fn year_left_in_title_when_it_is_the_title() {
        let release = parse_into("1923.S01E01.720p.WEB-DL.x264-NTb");
        assert_eq!(release.title, "1923");
    }

    #[test]
    fn article_only_title_is_not_stripped_to_empty() {
        assert_eq!(clean("The"), "the");
        assert_eq!(clean("The Office"), "office");
        assert_eq!(clean("A Team"), "team");
    }

    #[test]
    fn unresolved_number_counting() {
        let lexer = Lexer::new("Show 42 extra 7");
        let consumed = SpanSet::new();
        assert_eq!(unresolved_numbers(&lexer, &consumed), 2);
    }
}
