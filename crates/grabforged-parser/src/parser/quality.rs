//! Quality extractor: resolution, source, video codec, HDR, and the
//! remux/proper/repack modifiers.
//!
//! Conflicting tokens of the same category resolve by position: the
//! earliest occurrence in the original text wins. Later duplicates are
//! still consumed so they cannot leak into the title.

use grabforged_core::{HdrFormat, QualityModifier, Resolution, Source, VideoCodec};

use crate::lexer::{Lexer, SpanSet, Token};
use crate::model::ParsedRelease;

/// Extract quality information from the token stream.
pub fn extract(lexer: &Lexer, release: &mut ParsedRelease, consumed: &mut SpanSet) {
    for (token, span) in lexer.tokens() {
        if consumed.is_consumed(span.clone()) {
            continue;
        }
        match token {
            Token::Resolution(text) => {
                if release.quality.resolution == Resolution::Unknown {
                    release.quality.resolution = parse_resolution(text);
                }
                consumed.consume(span.clone());
            }
            Token::SourceBdRip(_) => {
                set_source(release, Source::BdRip);
                consumed.consume(span.clone());
            }
            Token::SourceBluray(_) => {
                set_source(release, Source::BluRay);
                consumed.consume(span.clone());
            }
            Token::SourceWebDl(_) | Token::SourceWeb(_) => {
                set_source(release, Source::WebDl);
                consumed.consume(span.clone());
            }
            Token::SourceWebRip(_) => {
                set_source(release, Source::WebRip);
                consumed.consume(span.clone());
            }
            Token::SourceHdtv(_) => {
                set_source(release, Source::Hdtv);
                consumed.consume(span.clone());
            }
            Token::SourceSdtv(_) => {
                set_source(release, Source::Sdtv);
                consumed.consume(span.clone());
            }
            Token::SourceDvd(_) => {
                set_source(release, Source::Dvd);
                consumed.consume(span.clone());
            }
            Token::SourceCam(_) => {
                set_source(release, Source::Cam);
                consumed.consume(span.clone());
            }
            Token::CodecH264(_) => {
                if release.quality.codec.is_none() {
                    release.quality.codec = Some(VideoCodec::X264);
                }
                consumed.consume(span.clone());
            }
            Token::CodecH265(_) => {
                if release.quality.codec.is_none() {
                    release.quality.codec = Some(VideoCodec::X265);
                }
                consumed.consume(span.clone());
            }
            Token::CodecAv1(_) => {
                if release.quality.codec.is_none() {
                    release.quality.codec = Some(VideoCodec::Av1);
                }
                consumed.consume(span.clone());
            }
            Token::CodecXvid(_) => {
                if release.quality.codec.is_none() {
                    release.quality.codec = Some(VideoCodec::Xvid);
                }
                consumed.consume(span.clone());
            }
            Token::HdrDolbyVision(_) => {
                if release.quality.hdr.is_none() {
                    release.quality.hdr = Some(HdrFormat::DolbyVision);
                }
                consumed.consume(span.clone());
            }
            Token::HdrHdr10Plus(_) => {
                if release.quality.hdr.is_none() {
                    release.quality.hdr = Some(HdrFormat::Hdr10Plus);
                }
                consumed.consume(span.clone());
            }
            Token::HdrHdr10(_) => {
                if release.quality.hdr.is_none() {
                    release.quality.hdr = Some(HdrFormat::Hdr10);
                }
                consumed.consume(span.clone());
            }
            Token::HdrGeneric(text) => {
                if release.quality.hdr.is_none() {
                    release.quality.hdr = Some(if text.eq_ignore_ascii_case("hlg") {
                        HdrFormat::Hlg
                    } else {
                        HdrFormat::Hdr
                    });
                }
                consumed.consume(span.clone());
            }
            Token::Remux(_) => {
                if release.quality.modifier.is_none() {
                    release.quality.modifier = Some(QualityModifier::Remux);
                }
                consumed.consume(span.clone());
            }
            Token::ReleaseModifier(text) => {
                if release.quality.modifier.is_none() {
                    release.quality.modifier = Some(parse_modifier(text));
                }
                consumed.consume(span.clone());
            }
            _ => {}
        }
    }
}

fn set_source(release: &mut ParsedRelease, source: Source) {
    if release.quality.source == Source::Unknown {
        release.quality.source = source;
    }
}

fn parse_resolution(text: &str) -> Resolution {
    let lower = text.to_lowercase();
    if lower.contains("2160") || lower == "4k" || lower == "uhd" {
        Resolution::_2160p
    } else if lower.contains("1080") {
        Resolution::_1080p
    } else if lower.contains("720") {
        Resolution::_720p
    } else if lower.contains("576") {
        Resolution::_576p
    } else {
        Resolution::_480p
    }
}

fn parse_modifier(text: &str) -> QualityModifier {
    match text.to_uppercase().as_str() {
        "PROPER" => QualityModifier::Proper,
        "REAL" => QualityModifier::Real,
        _ => QualityModifier::Repack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_into(input: &str) -> ParsedRelease {
        let lexer = Lexer::new(input);
        let mut release = ParsedRelease::new(input);
        let mut consumed = SpanSet::new();
        extract(&lexer, &mut release, &mut consumed);
        release
    }

    #[test]
    fn full_quality_block() {
        let release = parse_into("Movie.2160p.BluRay.REMUX.DV.x265");
        assert_eq!(release.quality.resolution, Resolution::_2160p);
        assert_eq!(release.quality.source, Source::BluRay);
        assert_eq!(release.quality.modifier, Some(QualityModifier::Remux));
        assert_eq!(release.quality.hdr, Some(HdrFormat::DolbyVision));
        assert_eq!(release.quality.codec, Some(VideoCodec::X265));
    }

    #[test]
    fn earliest_source_wins() {
        // Deterministic position tie-break, every run.
        for _ in 0..3 {
            let release = parse_into("Show.WEB-DL.HDTV.720p");
            assert_eq!(release.quality.source, Source::WebDl);
        }
        let release = parse_into("Show.HDTV.WEB-DL.720p");
        assert_eq!(release.quality.source, Source::Hdtv);
    }

    #[test]
    fn bare_web_is_webdl() {
        let release = parse_into("Show.S01E01.720p.WEB.x264");
        assert_eq!(release.quality.source, Source::WebDl);
    }

    #[test]
    fn proper_modifier() {
        let release = parse_into("Show.S01E01.PROPER.720p.HDTV");
        assert_eq!(release.quality.modifier, Some(QualityModifier::Proper));
    }

    #[test]
    fn missing_markers_stay_unknown() {
        let release = parse_into("Just A Title");
        assert_eq!(release.quality.resolution, Resolution::Unknown);
        assert_eq!(release.quality.source, Source::Unknown);
        assert_eq!(release.quality.codec, None);
    }
}
