//! Wanted-item status, as reported by the media-library collaborator.
//!
//! The cooldown tracker maps each status to a next-allowed-search rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a wanted item at the time a search is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemStatus {
    /// Episode has aired and is missing.
    AiredMissing,
    /// Episode has a known future air date.
    Upcoming {
        /// The announced air date.
        air_date: NaiveDate,
    },
    /// Continuing series, missing episode aired less than 30 days ago.
    ContinuingRecent,
    /// Ended series, missing an old episode.
    EndedOld,
    /// Movie already released.
    MovieReleased,
    /// Movie with a known future release date.
    MoviePreRelease {
        /// The announced release date.
        release_date: NaiveDate,
    },
    /// Music album after its release date.
    AlbumPostRelease,
    /// Anime airing as a simulcast.
    AnimeSimulcast,
}
