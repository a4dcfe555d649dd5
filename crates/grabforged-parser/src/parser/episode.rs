//! Episode/date extractor.
//!
//! Applies the episode grammar most-specific-first: explicit
//! season/episode forms, validated calendar dates, then anime absolute
//! numbers. Each successful match consumes its span so later extractors
//! and the title resolver never see the matched text again.

use chrono::NaiveDate;

use crate::config::ParserConfig;
use crate::lexer::{Lexer, SpanSet, Token};
use crate::model::{ParsedRelease, SpecialType};

/// Extract episode identity from the token stream.
pub fn extract(
    lexer: &Lexer,
    release: &mut ParsedRelease,
    consumed: &mut SpanSet,
    config: &ParserConfig,
) {
    let tokens = lexer.tokens();

    // Pass 1: explicit season/episode tokens, specials, batch markers.
    for (token, span) in tokens {
        if consumed.is_consumed(span.clone()) {
            continue;
        }
        match token {
            Token::SeasonEpisode(text) => {
                if let Some(parsed) = parse_season_episode(text) {
                    if release.season.is_none() && release.episodes.is_empty() {
                        release.season = Some(parsed.season);
                        release.episodes = parsed.episodes;
                        if release.version.is_none() {
                            release.version = parsed.version;
                        }
                    }
                    // Later duplicates are still consumed so they never
                    // leak into the title.
                    consumed.consume(span.clone());
                }
            }
            Token::SeasonEpisodeX(text) => {
                if release.season.is_none() && release.episodes.is_empty() {
                    if let Some((season, episode)) = parse_season_x_episode(text) {
                        release.season = Some(season);
                        release.episodes = vec![episode];
                        consumed.consume(span.clone());
                    }
                } else {
                    consumed.consume(span.clone());
                }
            }
            Token::SeasonRange(text) => {
                // Season range with no episode number is a batch release.
                if let Some(start) = parse_season_range_start(text) {
                    release.is_batch = true;
                    if release.season.is_none() {
                        release.season = Some(start);
                    }
                    consumed.consume(span.clone());
                }
            }
            Token::SeasonOnly(text) => {
                if release.season.is_none() {
                    if let Some(season) = parse_season_only(text) {
                        release.season = Some(season);
                        consumed.consume(span.clone());
                    }
                }
            }
            Token::SpecialMarker(text) => {
                // Marks the release kind without consuming any numeric
                // token; an OVA can still carry its own episode number.
                if release.special.is_none() {
                    release.special = Some(parse_special(text));
                }
                consumed.consume(span.clone());
            }
            Token::BatchMarker(_) => {
                release.is_batch = true;
                consumed.consume(span.clone());
            }
            _ => {}
        }
    }

    // Pass 2: daily/date form, only when no explicit episode was found.
    if release.season.is_none() && release.episodes.is_empty() {
        extract_air_date(lexer, release, consumed);
    }

    // Pass 3: anime absolute numbering, only when nothing above matched.
    if config.detect_anime
        && !release.is_batch
        && release.season.is_none()
        && release.episodes.is_empty()
        && release.air_date.is_none()
    {
        extract_absolute_episode(lexer, release, consumed);
    }
}

/// Result of parsing one `SxxEyy...` token.
struct SeasonEpisodes {
    season: u16,
    episodes: Vec<u16>,
    version: Option<u16>,
}

/// Parse a season/episode token.
///
/// Supports enumerated lists (`S01E01E02` keeps the given values) and
/// ranges (`S01E01-E03` expands inclusively), plus a trailing version
/// suffix (`S01E12v2`).
fn parse_season_episode(text: &str) -> Option<SeasonEpisodes> {
    let upper = text.to_uppercase();
    let bytes = upper.as_bytes();
    if bytes.first() != Some(&b'S') {
        return None;
    }

    let mut pos = 1;
    let season = read_number(&upper, &mut pos)?;

    let mut episodes: Vec<u16> = Vec::new();
    let mut version = None;

    while pos < upper.len() {
        let is_range = upper[pos..].starts_with('-');
        if is_range {
            pos += 1;
        }
        if upper[pos..].starts_with('E') {
            pos += 1;
        } else if !is_range {
            // Version suffix terminates the episode list.
            if upper[pos..].starts_with('V') {
                pos += 1;
                version = read_number(&upper, &mut pos);
            }
            break;
        }
        let value = read_number(&upper, &mut pos)?;
        if is_range {
            // Inclusive expansion from the last enumerated episode.
            let start = *episodes.last()?;
            if value >= start && value - start <= 100 {
                for ep in start + 1..=value {
                    if !episodes.contains(&ep) {
                        episodes.push(ep);
                    }
                }
            }
        } else if !episodes.contains(&value) {
            episodes.push(value);
        }
    }

    if episodes.is_empty() {
        return None;
    }
    Some(SeasonEpisodes {
        season,
        episodes,
        version,
    })
}

/// Parse the `1x05` form.
fn parse_season_x_episode(text: &str) -> Option<(u16, u16)> {
    let x_pos = text.find(['x', 'X'])?;
    let season = text[..x_pos].parse::<u16>().ok()?;
    let episode = text[x_pos + 1..].parse::<u16>().ok()?;
    if (1..=99).contains(&season) {
        Some((season, episode))
    } else {
        None
    }
}

/// Starting season of a `S01-S03` range.
fn parse_season_range_start(text: &str) -> Option<u16> {
    let upper = text.to_uppercase();
    let mut pos = 1;
    read_number(&upper, &mut pos)
}

/// Season number of a bare `S01` token.
fn parse_season_only(text: &str) -> Option<u16> {
    let upper = text.to_uppercase();
    upper.strip_prefix('S')?.parse::<u16>().ok()
}

fn parse_special(text: &str) -> SpecialType {
    match text.to_uppercase().as_str() {
        "OVA" => SpecialType::Ova,
        "ONA" => SpecialType::Ona,
        "RECAP" => SpecialType::Recap,
        _ => SpecialType::Special,
    }
}

/// Read a run of ASCII digits starting at `pos`, advancing it.
fn read_number(text: &str, pos: &mut usize) -> Option<u16> {
    let start = *pos;
    let bytes = text.as_bytes();
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    if *pos == start {
        return None;
    }
    text[start..*pos].parse::<u16>().ok()
}

/// Date form: four-digit year plus two two-digit groups separated by the
/// same delimiter, validated as a real calendar date.
fn extract_air_date(lexer: &Lexer, release: &mut ParsedRelease, consumed: &mut SpanSet) {
    let tokens = lexer.tokens();

    for (i, (token, span)) in tokens.iter().enumerate() {
        let Token::Year(year_text) = token else {
            continue;
        };
        if consumed.is_consumed(span.clone()) {
            continue;
        }

        // Expect: Year D Num2 D Num2 with identical delimiters, or the
        // space-separated shape where no delimiter tokens appear at all.
        let (month_idx, day_idx) = if i + 4 < tokens.len()
            && is_same_delimiter(&tokens[i + 1].0, &tokens[i + 3].0)
        {
            (i + 2, i + 4)
        } else if i + 2 < tokens.len()
            && matches!(tokens[i + 1].0, Token::Number(_))
            && matches!(tokens[i + 2].0, Token::Number(_))
        {
            (i + 1, i + 2)
        } else {
            continue;
        };

        let (Token::Number(month_text), Token::Number(day_text)) =
            (&tokens[month_idx].0, &tokens[day_idx].0)
        else {
            continue;
        };
        if month_text.len() != 2 || day_text.len() != 2 {
            continue;
        }

        let (Ok(year), Ok(month), Ok(day)) = (
            year_text.parse::<i32>(),
            month_text.parse::<u32>(),
            day_text.parse::<u32>(),
        ) else {
            continue;
        };

        // from_ymd_opt rejects false positives like "13.45".
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            release.air_date = Some(date);
            consumed.consume(span.start..tokens[day_idx].1.end);
            return;
        }
    }
}

fn is_same_delimiter(a: &Token<'_>, b: &Token<'_>) -> bool {
    matches!(
        (a, b),
        (Token::Dot, Token::Dot)
            | (Token::Hyphen, Token::Hyphen)
            | (Token::Underscore, Token::Underscore)
    )
}

/// Anime absolute form: a standalone 2-4 digit number bounded by
/// separators or brackets near the end of the remaining text, optionally
/// followed by a version suffix.
fn extract_absolute_episode(lexer: &Lexer, release: &mut ParsedRelease, consumed: &mut SpanSet) {
    let tokens = lexer.tokens();

    // Last candidate wins ("near the end").
    let mut best: Option<(usize, u16)> = None;
    for (i, (token, span)) in tokens.iter().enumerate() {
        let Token::Number(text) = token else {
            continue;
        };
        if consumed.is_consumed(span.clone()) {
            continue;
        }
        if !(2..=4).contains(&text.len()) {
            continue;
        }
        let Ok(value) = text.parse::<u16>() else {
            continue;
        };
        if has_episode_context(lexer, tokens, i) {
            best = Some((i, value));
        }
    }

    if let Some((idx, value)) = best {
        release.absolute_episode = Some(value);
        consumed.consume(tokens[idx].1.clone());

        // Optional version suffix directly after the number.
        if let Some((Token::VersionTag(v), span)) = tokens.get(idx + 1) {
            if release.version.is_none() {
                release.version = v.to_uppercase().strip_prefix('V').and_then(|n| n.parse().ok());
            }
            consumed.consume(span.clone());
        }
    }
}

/// Context that makes a bare number an episode: preceded by a hyphen
/// ("Title - 01"), bounded by brackets ("[01]"), or dot-bounded between
/// the title words and the quality block ("Naruto.Shippuuden.455.720p").
fn has_episode_context(
    lexer: &Lexer,
    tokens: &[(Token<'_>, std::ops::Range<usize>)],
    idx: usize,
) -> bool {
    if idx > 0 && matches!(tokens[idx - 1].0, Token::Hyphen) {
        return true;
    }
    let bracket_before = idx > 0 && matches!(tokens[idx - 1].0, Token::BracketOpen);
    let bracket_after =
        idx + 1 < tokens.len() && matches!(tokens[idx + 1].0, Token::BracketClose);
    if bracket_before || bracket_after {
        return true;
    }
    if idx >= 2
        && matches!(tokens[idx - 1].0, Token::Dot)
        && matches!(tokens[idx - 2].0, Token::Word(_))
        && idx + 2 < tokens.len()
        && matches!(tokens[idx + 1].0, Token::Dot)
        && starts_quality_block(&tokens[idx + 2].0)
    {
        return true;
    }
    // Fansub-shaped titles put the episode number after the title words.
    lexer.is_fansub_style() && idx > 0 && matches!(tokens[idx - 1].0, Token::Word(_))
}

/// Whether a token opens the quality block of a release name.
fn starts_quality_block(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::Resolution(_)
            | Token::SourceBdRip(_)
            | Token::SourceBluray(_)
            | Token::SourceWebDl(_)
            | Token::SourceWebRip(_)
            | Token::SourceHdtv(_)
            | Token::SourceSdtv(_)
            | Token::SourceDvd(_)
            | Token::SourceCam(_)
            | Token::SourceWeb(_)
    )
}
