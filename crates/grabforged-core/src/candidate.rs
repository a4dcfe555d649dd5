//! Candidate releases as reported by the indexer-search collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::IndexerId;

/// Delivery protocol for a candidate release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Usenet (NZB) release.
    Usenet,
    /// BitTorrent release.
    Torrent,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Usenet => write!(f, "usenet"),
            Protocol::Torrent => write!(f, "torrent"),
        }
    }
}

/// A single candidate release from an indexer search.
///
/// This is raw input: the title has not been parsed and the size has not
/// been validated. The pipeline skips candidates with a non-positive size
/// rather than failing the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Raw release title as reported by the indexer.
    pub title: String,
    /// Reported size in megabytes.
    pub size_mb: i64,
    /// Delivery protocol.
    pub protocol: Protocol,
    /// The indexer that reported this release.
    pub indexer_id: IndexerId,
    /// When the indexer first published this release.
    pub published_at: DateTime<Utc>,
    /// Flags reported by the indexer (e.g. "freeleech", "internal").
    #[serde(default)]
    pub indexer_flags: Vec<String>,
}
