//! Logos-based lexer for release names.
//!
//! Tokenization doubles as normalization: `.`/`_`/whitespace become
//! delimiter tokens, patterns match case-insensitively, and every token
//! carries a byte span into the *original* input string. Extractors that
//! claim a token record its span in a [`SpanSet`]; the title resolver
//! later reassembles whatever spans were never claimed, in original
//! casing and original order. Tokenization never fails - unrecognizable
//! bytes are simply skipped and end up neither claimed nor in any token.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this span overlaps with another.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Spans consumed by extractors.
///
/// Each extractor checks a token against the set before matching and
/// records the token's span on success, so later extractors never
/// re-match consumed text and the title resolver knows what is left.
#[derive(Debug, Default, Clone)]
pub struct SpanSet {
    spans: Vec<Span>,
}

impl SpanSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a consumed span.
    pub fn consume(&mut self, span: impl Into<Span>) {
        self.spans.push(span.into());
    }

    /// Whether any consumed span overlaps the given range.
    pub fn is_consumed(&self, span: impl Into<Span>) -> bool {
        let span = span.into();
        self.spans.iter().any(|s| s.overlaps(&span))
    }

    /// All recorded spans, in consumption order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

/// A detected bracket group in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketGroup {
    /// The span of the entire group including brackets.
    pub outer: Span,
    /// The span of the content inside the brackets.
    pub inner: Span,
}

/// Find all `[...]` groups in the input.
///
/// Parenthesized groups are left to token-level handling; square
/// brackets are what fansub titles use for groups, hashes, and quality
/// tags.
pub fn find_bracket_groups(input: &str) -> Vec<BracketGroup> {
    let mut groups = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    for (i, ch) in input.char_indices() {
        match ch {
            '[' => stack.push(i),
            ']' => {
                if let Some(start) = stack.pop() {
                    groups.push(BracketGroup {
                        outer: Span::new(start, i + 1),
                        inner: Span::new(start + 1, i),
                    });
                }
            }
            _ => {}
        }
    }

    groups.sort_by_key(|g| g.outer.start);
    groups
}

/// A lexer that tokenizes release names using Logos.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    brackets: Vec<BracketGroup>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Tokenize the entire input immediately.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
            .collect();
        let brackets = find_bracket_groups(input);
        Self {
            tokens,
            brackets,
            input,
        }
    }

    /// All tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }

    /// The original input string.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// All `[...]` groups found in the input.
    pub fn bracket_groups(&self) -> &[BracketGroup] {
        &self.brackets
    }

    /// Whether a byte position falls inside any bracket group.
    pub fn in_brackets(&self, pos: usize) -> bool {
        self.brackets
            .iter()
            .any(|g| g.outer.start < pos && pos < g.outer.end)
    }

    /// Whether the very first non-whitespace byte opens a bracket group,
    /// i.e. the title uses fansub-style `[Group] Title ...` shape.
    pub fn is_fansub_style(&self) -> bool {
        self.input.trim_start().starts_with('[')
    }
}

/// Whether a token is a pure delimiter (never part of a title span).
pub fn is_delimiter(token: &Token<'_>) -> bool {
    matches!(
        token,
        Token::Dot
            | Token::Hyphen
            | Token::Underscore
            | Token::BracketOpen
            | Token::BracketClose
            | Token::ParenOpen
            | Token::ParenClose
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_standard_episode_title() {
        let lexer = Lexer::new("Show.S01E05.720p.WEB-DL.x264-GROUP");
        let tokens = lexer.tokens();
        assert!(tokens
            .iter()
            .any(|(t, _)| matches!(t, Token::SeasonEpisode(s) if *s == "S01E05")));
        assert!(tokens
            .iter()
            .any(|(t, _)| matches!(t, Token::Resolution(s) if *s == "720p")));
        assert!(tokens
            .iter()
            .any(|(t, _)| matches!(t, Token::SourceWebDl(_))));
        assert!(tokens.iter().any(|(t, _)| matches!(t, Token::CodecH264(_))));
    }

    #[test]
    fn spans_index_original_casing() {
        let input = "Attack on Titan - 01 [1080p]";
        let lexer = Lexer::new(input);
        for (_, span) in lexer.tokens() {
            assert!(span.end <= input.len());
        }
        let attack = lexer
            .tokens()
            .iter()
            .find(|(t, _)| matches!(t, Token::Word(w) if w.eq_ignore_ascii_case("attack")))
            .unwrap();
        assert_eq!(&input[attack.1.clone()], "Attack");
    }

    #[test]
    fn multi_episode_is_one_token() {
        let lexer = Lexer::new("Show.S01E01-E03.720p");
        assert!(lexer
            .tokens()
            .iter()
            .any(|(t, _)| matches!(t, Token::SeasonEpisode(s) if *s == "S01E01-E03")));
    }

    #[test]
    fn season_range_token() {
        let lexer = Lexer::new("Show.S01-S03.1080p");
        assert!(lexer
            .tokens()
            .iter()
            .any(|(t, _)| matches!(t, Token::SeasonRange(s) if *s == "S01-S03")));
    }

    #[test]
    fn bracket_groups_and_fansub_shape() {
        let lexer = Lexer::new("[SubsPlease] Attack on Titan - 01 [1080p]");
        assert!(lexer.is_fansub_style());
        assert_eq!(lexer.bracket_groups().len(), 2);
        let first = &lexer.bracket_groups()[0];
        assert_eq!(
            &lexer.input()[first.inner.start..first.inner.end],
            "SubsPlease"
        );
    }

    #[test]
    fn span_set_overlap() {
        let mut consumed = SpanSet::new();
        consumed.consume(Span::new(5, 11));
        assert!(consumed.is_consumed(Span::new(8, 9)));
        assert!(consumed.is_consumed(Span::new(10, 20)));
        assert!(!consumed.is_consumed(Span::new(11, 15)));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let lexer = Lexer::new("");
        assert!(lexer.tokens().is_empty());
        assert!(!lexer.is_fansub_style());
    }
}
