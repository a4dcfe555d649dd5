//! # grabforged-parser
//!
//! Parser for scene and fansub release names.
//!
//! Turns a raw release title into a [`ParsedRelease`] holding the
//! series/movie title, episode identity, quality attributes, audio
//! attributes, languages, release group, and a 0-100 confidence score.
//! Parsing is pure and never fails: any input produces a valid result,
//! low-quality inputs just score low confidence.
//!
//! ## Quick Start
//!
//! ```
//! use grabforged_parser::parse;
//!
//! let result = parse("The.Expanse.S03E04.720p.WEB-DL.x264-GRP");
//!
//! assert_eq!(result.title, "The Expanse");
//! assert_eq!(result.season, Some(3));
//! assert_eq!(result.episodes, vec![4]);
//! assert_eq!(result.release_group.as_deref(), Some("GRP"));
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use grabforged_parser::{Parser, config::ParserConfig};
//!
//! let config = ParserConfig::builder().detect_anime(false).build();
//! let parser = Parser::new(config);
//! let result = parser.parse("Attack on Titan - 03 [720p]");
//! assert_eq!(result.absolute_episode, None);
//! ```

pub mod config;
pub mod lexer;
pub mod model;
mod parser;

pub use model::{AudioBlock, ParsedRelease, QualityBlock, SpecialType};
pub use parser::parse;

use config::ParserConfig;

/// A configurable release name parser.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a release name into structured metadata.
    pub fn parse(&self, input: &str) -> ParsedRelease {
        parser::parse_with_config(input, &self.config)
    }
}
