//! Audio extractor: codec and channel layout.
//!
//! Same position rule as the quality extractor: the earliest token of a
//! category sets the value, every recognized token is consumed.

use grabforged_core::AudioCodec;

use crate::lexer::{Lexer, SpanSet, Token};
use crate::model::ParsedRelease;

/// Extract audio information from the token stream.
pub fn extract(lexer: &Lexer, release: &mut ParsedRelease, consumed: &mut SpanSet) {
    for (token, span) in lexer.tokens() {
        if consumed.is_consumed(span.clone()) {
            continue;
        }
        match token {
            Token::AudioTrueHd(_) => {
                set_codec(release, AudioCodec::TrueHd);
                consumed.consume(span.clone());
            }
            Token::AudioDtsHd(_) => {
                set_codec(release, AudioCodec::DtsHd);
                consumed.consume(span.clone());
            }
            Token::AudioDts(_) => {
                set_codec(release, AudioCodec::Dts);
                consumed.consume(span.clone());
            }
            Token::AudioEac3(text) => {
                set_codec(release, AudioCodec::Eac3);
                set_embedded_channels(release, text);
                consumed.consume(span.clone());
            }
            Token::AudioAc3(text) => {
                set_codec(release, AudioCodec::Ac3);
                set_embedded_channels(release, text);
                consumed.consume(span.clone());
            }
            Token::AudioFormat(text) => {
                set_codec(release, parse_format(text));
                consumed.consume(span.clone());
            }
            Token::AudioChannels(text) => {
                if release.audio.channels.is_none() {
                    release.audio.channels = Some((*text).to_string());
                }
                consumed.consume(span.clone());
            }
            _ => {}
        }
    }
}

/// Tokens like `DDP5.1` carry the channel layout in their tail.
fn set_embedded_channels(release: &mut ParsedRelease, text: &str) {
    if release.audio.channels.is_some() {
        return;
    }
    let tail: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .collect();
    if tail.len() == 3 && tail.as_bytes()[1] == b'.' {
        release.audio.channels = Some(tail);
    }
}

fn set_codec(release: &mut ParsedRelease, codec: AudioCodec) {
    if release.audio.codec.is_none() {
        release.audio.codec = Some(codec);
    }
}

fn parse_format(text: &str) -> AudioCodec {
    match text.to_uppercase().as_str() {
        "FLAC" => AudioCodec::Flac,
        "MP3" => AudioCodec::Mp3,
        "OPUS" => AudioCodec::Opus,
        _ => AudioCodec::Aac,
    }
}
