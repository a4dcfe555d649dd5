//! Quality vocabulary shared across the parser, format matcher, and
//! decision engine: resolution, source, video codec, HDR format, audio
//! codec, and the proper/repack release modifiers.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Video resolution of a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// 480p SD
    _480p,
    /// 576p PAL SD
    _576p,
    /// 720p HD
    _720p,
    /// 1080p Full HD
    _1080p,
    /// 2160p Ultra HD (4K)
    _2160p,
    /// Resolution could not be determined from the title.
    #[default]
    Unknown,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::_480p => write!(f, "480p"),
            Resolution::_576p => write!(f, "576p"),
            Resolution::_720p => write!(f, "720p"),
            Resolution::_1080p => write!(f, "1080p"),
            Resolution::_2160p => write!(f, "2160p"),
            Resolution::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "480p" | "480i" | "480" => Ok(Resolution::_480p),
            "576p" | "576i" | "576" => Ok(Resolution::_576p),
            "720p" | "720" | "1280x720" => Ok(Resolution::_720p),
            "1080p" | "1080i" | "1080" | "1920x1080" => Ok(Resolution::_1080p),
            "2160p" | "2160" | "4k" | "uhd" | "3840x2160" => Ok(Resolution::_2160p),
            _ => Err(Error::Validation(format!("invalid resolution: {s}"))),
        }
    }
}

/// Source/origin of a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Blu-ray disc rip
    BluRay,
    /// Blu-ray disc rip (re-encoded, lower quality)
    BdRip,
    /// Web download (lossless from streaming service)
    WebDl,
    /// Web rip (capture from streaming service)
    WebRip,
    /// HDTV broadcast capture
    Hdtv,
    /// Standard definition TV broadcast
    Sdtv,
    /// DVD rip
    Dvd,
    /// Camera recording from theater
    Cam,
    /// Source could not be determined from the title.
    #[default]
    Unknown,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::BluRay => write!(f, "BluRay"),
            Source::BdRip => write!(f, "BDRip"),
            Source::WebDl => write!(f, "WEB-DL"),
            Source::WebRip => write!(f, "WEBRip"),
            Source::Hdtv => write!(f, "HDTV"),
            Source::Sdtv => write!(f, "SDTV"),
            Source::Dvd => write!(f, "DVD"),
            Source::Cam => write!(f, "CAM"),
            Source::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "").as_str() {
            "bluray" | "brrip" => Ok(Source::BluRay),
            "bdrip" => Ok(Source::BdRip),
            "webdl" | "web" => Ok(Source::WebDl),
            "webrip" => Ok(Source::WebRip),
            "hdtv" => Ok(Source::Hdtv),
            "sdtv" | "pdtv" => Ok(Source::Sdtv),
            "dvd" | "dvdrip" => Ok(Source::Dvd),
            "cam" | "hdcam" | "camrip" => Ok(Source::Cam),
            _ => Err(Error::Validation(format!("invalid source: {s}"))),
        }
    }
}

/// Video codec named in a release title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    /// H.264/AVC (x264)
    X264,
    /// H.265/HEVC (x265)
    X265,
    /// AV1
    Av1,
    /// MPEG-4 Part 2 (XviD/DivX)
    Xvid,
}

impl std::fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoCodec::X264 => write!(f, "x264"),
            VideoCodec::X265 => write!(f, "x265"),
            VideoCodec::Av1 => write!(f, "AV1"),
            VideoCodec::Xvid => write!(f, "XviD"),
        }
    }
}

/// HDR format named in a release title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HdrFormat {
    /// Dolby Vision
    DolbyVision,
    /// HDR10+
    Hdr10Plus,
    /// HDR10
    Hdr10,
    /// Generic HDR marker
    Hdr,
    /// Hybrid log-gamma
    Hlg,
}

impl std::fmt::Display for HdrFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HdrFormat::DolbyVision => write!(f, "DV"),
            HdrFormat::Hdr10Plus => write!(f, "HDR10+"),
            HdrFormat::Hdr10 => write!(f, "HDR10"),
            HdrFormat::Hdr => write!(f, "HDR"),
            HdrFormat::Hlg => write!(f, "HLG"),
        }
    }
}

/// Release-quality modifier (remux or scene revision markers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityModifier {
    /// Untouched disc remux.
    Remux,
    /// Fixed release replacing a broken original.
    Proper,
    /// Re-packed release from the same group.
    Repack,
    /// REAL marker (re-release of a fake/mislabeled original).
    Real,
}

impl std::fmt::Display for QualityModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityModifier::Remux => write!(f, "REMUX"),
            QualityModifier::Proper => write!(f, "PROPER"),
            QualityModifier::Repack => write!(f, "REPACK"),
            QualityModifier::Real => write!(f, "REAL"),
        }
    }
}

/// Audio codec named in a release title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCodec {
    /// Dolby TrueHD (incl. Atmos)
    TrueHd,
    /// DTS-HD MA / DTS:X
    DtsHd,
    /// Plain DTS
    Dts,
    /// Dolby Digital Plus (E-AC-3)
    Eac3,
    /// Dolby Digital (AC-3)
    Ac3,
    /// AAC
    Aac,
    /// FLAC
    Flac,
    /// MP3
    Mp3,
    /// Opus
    Opus,
}

impl std::fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioCodec::TrueHd => write!(f, "TrueHD"),
            AudioCodec::DtsHd => write!(f, "DTS-HD"),
            AudioCodec::Dts => write!(f, "DTS"),
            AudioCodec::Eac3 => write!(f, "EAC3"),
            AudioCodec::Ac3 => write!(f, "AC3"),
            AudioCodec::Aac => write!(f, "AAC"),
            AudioCodec::Flac => write!(f, "FLAC"),
            AudioCodec::Mp3 => write!(f, "MP3"),
            AudioCodec::Opus => write!(f, "Opus"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn resolution_round_trip() {
        assert_eq!(Resolution::from_str("1080p").unwrap(), Resolution::_1080p);
        assert_eq!(Resolution::from_str("4K").unwrap(), Resolution::_2160p);
        assert!(Resolution::from_str("900p").is_err());
        assert_eq!(Resolution::_720p.to_string(), "720p");
    }

    #[test]
    fn source_aliases() {
        assert_eq!(Source::from_str("WEB-DL").unwrap(), Source::WebDl);
        assert_eq!(Source::from_str("webdl").unwrap(), Source::WebDl);
        assert_eq!(Source::from_str("BluRay").unwrap(), Source::BluRay);
        assert!(Source::from_str("vhs").is_err());
    }
}
