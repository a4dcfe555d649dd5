//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// Each variant represents a specific pattern in release names, ordered by
/// priority where needed. Patterns match case-insensitively while spans
/// always address the original-cased input, which is what lets the title
/// resolver return original casing.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Season and episode identifier, including multi-episode lists and
    /// ranges and an optional version suffix
    /// (e.g. S01E05, S01E01E02, S01E01-E03, S01E12v2).
    #[regex(
        r"(?i)S[0-9]{1,2}E[0-9]{1,4}((E|-E?)[0-9]{1,4})*(v[0-9]{1,2})?",
        priority = 10
    )]
    SeasonEpisode(&'src str),

    /// Season x episode format (e.g. 1x05, 01x05).
    /// Lower priority than Resolution to avoid matching "1920x1080".
    #[regex(r"[0-9]{1,2}x[0-9]{1,3}", priority = 9)]
    SeasonEpisodeX(&'src str),

    /// Explicit season range with no episode (e.g. S01-S03) - batch marker.
    #[regex(r"(?i)S[0-9]{1,2}-S[0-9]{1,2}", priority = 9)]
    SeasonRange(&'src str),

    /// Season-only identifier (e.g. S01) - full season releases.
    #[regex(r"(?i)S[0-9]{1,2}", priority = 8)]
    SeasonOnly(&'src str),

    /// Special episode markers (case-insensitive whole words).
    #[regex(r"(?i)(OVA|ONA|SPECIAL|RECAP)", priority = 8)]
    SpecialMarker(&'src str),

    /// Batch release markers.
    #[regex(r"(?i)(BATCH|COMPLETE)", priority = 7)]
    BatchMarker(&'src str),

    /// Standalone version suffix (e.g. v2) following an absolute episode.
    #[regex(r"(?i)v[0-9]{1,2}", priority = 6)]
    VersionTag(&'src str),

    /// Video resolution (e.g. 2160p, 1080p, 720p, 1920x1080).
    #[regex(
        r"(?i)((2160|1080|720|480|576)[pi]|1920x1080|3840x2160|1280x720|4K|UHD)",
        priority = 10
    )]
    Resolution(&'src str),

    /// H.265/HEVC codec variants.
    #[regex(r"(?i)(x265|H\.?265|HEVC)", priority = 8)]
    CodecH265(&'src str),

    /// H.264/AVC codec variants.
    #[regex(r"(?i)(x264|H\.?264|AVC)", priority = 8)]
    CodecH264(&'src str),

    /// AV1 codec.
    #[regex(r"(?i)AV1", priority = 8)]
    CodecAv1(&'src str),

    /// MPEG-4 Part 2 codecs (XviD, DivX).
    #[regex(r"(?i)(Xvi[Dd]|DivX)", priority = 8)]
    CodecXvid(&'src str),

    /// BDRip source (re-encoded disc rip).
    #[regex(r"(?i)BDRip", priority = 8)]
    SourceBdRip(&'src str),

    /// BluRay source variants.
    #[regex(r"(?i)(BluRay|Blu-Ray|BRRip)", priority = 7)]
    SourceBluray(&'src str),

    /// Web download source.
    #[regex(r"(?i)WEB-?DL", priority = 7)]
    SourceWebDl(&'src str),

    /// Web rip source.
    #[regex(r"(?i)WEB-?Rip", priority = 7)]
    SourceWebRip(&'src str),

    /// HDTV broadcast source.
    #[regex(r"(?i)HDTV", priority = 7)]
    SourceHdtv(&'src str),

    /// SD TV broadcast sources.
    #[regex(r"(?i)(SDTV|PDTV)", priority = 7)]
    SourceSdtv(&'src str),

    /// DVD source.
    #[regex(r"(?i)(DVDRip|DVD-?R|DVD)", priority = 7)]
    SourceDvd(&'src str),

    /// Theater camera recordings.
    #[regex(r"(?i)(HDCAM|CAMRIP|CAM)", priority = 7)]
    SourceCam(&'src str),

    /// Bare WEB source (WEB-DL and WEBRip match first).
    #[regex(r"(?i)WEB", priority = 5)]
    SourceWeb(&'src str),

    /// REMUX quality modifier.
    #[regex(r"(?i)REMUX", priority = 7)]
    Remux(&'src str),

    /// Scene revision markers (PROPER, REPACK, REAL).
    #[regex(r"(?i)(PROPER|REPACK|RERIP|REAL)", priority = 6)]
    ReleaseModifier(&'src str),

    /// Edition markers treated as movie-edition specials.
    #[regex(
        r"(?i)(EXTENDED|UNCUT|UNRATED|REMASTERED|DIRECTORS.?CUT|THEATRICAL|IMAX)",
        priority = 6
    )]
    Edition(&'src str),

    /// TrueHD/Atmos audio.
    #[regex(r"(?i)(TrueHD|Atmos)", priority = 9)]
    AudioTrueHd(&'src str),

    /// DTS-HD family (DTS-HD MA, DTS:X).
    #[regex(r"(?i)(DTS-?HD(\.?MA)?|DTS[:-]X)", priority = 9)]
    AudioDtsHd(&'src str),

    /// Plain DTS audio.
    #[regex(r"(?i)DTS", priority = 6)]
    AudioDts(&'src str),

    /// Dolby Digital Plus (E-AC-3) - may embed a channel config (DDP5.1).
    #[regex(r"(?i)(DD\+|DDP|E-?AC-?3)([0-9]\.[0-9])?", priority = 8)]
    AudioEac3(&'src str),

    /// Dolby Digital (AC-3) - may embed a channel config (DD5.1).
    #[regex(r"(?i)(DD|AC-?3)([0-9]\.[0-9])?", priority = 7)]
    AudioAc3(&'src str),

    /// Other audio formats.
    #[regex(r"(?i)(AAC|FLAC|MP3|OPUS)", priority = 6)]
    AudioFormat(&'src str),

    /// Audio channel configuration (e.g. 5.1, 7.1).
    #[regex(r"(7\.1|5\.1|2\.1|2\.0|1\.0)", priority = 8)]
    AudioChannels(&'src str),

    /// Dolby Vision HDR.
    #[regex(r"(?i)(Dolby.?Vision|DoVi|DV)", priority = 9)]
    HdrDolbyVision(&'src str),

    /// HDR10+ format.
    #[regex(r"(?i)(HDR10\+|HDR10Plus)", priority = 9)]
    HdrHdr10Plus(&'src str),

    /// HDR10 format.
    #[regex(r"(?i)HDR10", priority = 8)]
    HdrHdr10(&'src str),

    /// Generic HDR markers.
    #[regex(r"(?i)(HDR|HLG)", priority = 7)]
    HdrGeneric(&'src str),

    /// Year (1900-2099).
    #[regex(r"(19|20)[0-9]{2}", priority = 5)]
    Year(&'src str),

    /// Dot delimiter.
    #[token(".")]
    Dot,

    /// Hyphen delimiter.
    #[token("-")]
    Hyphen,

    /// Underscore delimiter.
    #[token("_")]
    Underscore,

    /// Ampersand character (preserved in titles).
    #[token("&")]
    Ampersand,

    /// Opening square bracket.
    #[token("[")]
    BracketOpen,

    /// Closing square bracket.
    #[token("]")]
    BracketClose,

    /// Opening parenthesis.
    #[token("(")]
    ParenOpen,

    /// Closing parenthesis.
    #[token(")")]
    ParenClose,

    /// Generic word token (lower priority than specific patterns).
    #[regex(r"[a-zA-Z][a-zA-Z0-9'&!]*", priority = 1)]
    Word(&'src str),

    /// Numeric token.
    #[regex(r"[0-9]+", priority = 2)]
    Number(&'src str),
}
