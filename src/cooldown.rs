//! Per-item search throttling.
//!
//! Automatic searches for the same wanted item are spaced out by a
//! status-dependent interval. Each item's state moves
//! `idle -> cooling -> ready`: any attempt (allowed or forced) arms the
//! cooldown, and the item becomes ready again once `now` passes
//! `next_allowed_at`.
//!
//! Concurrency discipline: two callers racing on the same item (the RSS
//! loop and a manual search) must not both observe "ready" and both
//! proceed. The per-key entry guard of the map gives each transition
//! atomic read-modify-write semantics without any cross-item locking.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use grabforged_core::{ItemId, ItemStatus};
use tracing::debug;

/// Throttle state for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownState {
    /// When the last search attempt happened.
    pub last_search_at: DateTime<Utc>,
    /// When the next automatic search becomes allowed.
    pub next_allowed_at: DateTime<Utc>,
    /// The item status the interval was computed from. `None` until the
    /// first recorded attempt.
    pub status_at_last_search: Option<ItemStatus>,
}

/// Compute when the next search is allowed for an item in the given
/// status, searched at `now`.
///
/// | status | next allowed |
/// |---|---|
/// | aired episode, missing | now + 7 days |
/// | upcoming episode, known air date | air date + 1 day |
/// | continuing series, missing recent | now + 3 days |
/// | ended series, missing old episode | now + 14 days |
/// | movie, released | now + 7 days |
/// | movie, pre-release | release date + 1 day |
/// | music album, post-release | now + 7 days |
/// | anime simulcast | now + 1 day |
pub fn next_allowed_at(status: ItemStatus, now: DateTime<Utc>) -> DateTime<Utc> {
    match status {
        ItemStatus::AiredMissing => now + Duration::days(7),
        ItemStatus::Upcoming { air_date } => date_plus_one_day(air_date),
        ItemStatus::ContinuingRecent => now + Duration::days(3),
        ItemStatus::EndedOld => now + Duration::days(14),
        ItemStatus::MovieReleased => now + Duration::days(7),
        ItemStatus::MoviePreRelease { release_date } => date_plus_one_day(release_date),
        ItemStatus::AlbumPostRelease => now + Duration::days(7),
        ItemStatus::AnimeSimulcast => now + Duration::days(1),
    }
}

fn date_plus_one_day(date: chrono::NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    midnight.and_utc() + Duration::days(1)
}

/// Thread-safe per-item search throttle.
///
/// Cloning shares the underlying state, like the map it wraps.
#[derive(Debug, Clone, Default)]
pub struct SearchThrottle {
    items: std::sync::Arc<DashMap<ItemId, CooldownState>>,
}

impl SearchThrottle {
    /// Create an empty throttle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a search may run for `item`, and record the
    /// attempt when it may.
    ///
    /// Returns `true` when the item was idle or its cooldown elapsed.
    /// `forced` always returns `true` but still records the attempt and
    /// re-arms the cooldown from the current status: forcing a search
    /// does not exempt the item from future throttling.
    pub fn check_and_search(
        &self,
        item: ItemId,
        status: ItemStatus,
        forced: bool,
        now: DateTime<Utc>,
    ) -> bool {
        // The entry guard holds the shard lock for this key, making the
        // read-decide-write below atomic with respect to other callers.
        let mut entry = self.items.entry(item).or_insert(CooldownState {
            last_search_at: DateTime::<Utc>::MIN_UTC,
            next_allowed_at: DateTime::<Utc>::MIN_UTC,
            status_at_last_search: None,
        });

        let ready = now >= entry.next_allowed_at;
        if !ready && !forced {
            debug!(%item, next_allowed_at = %entry.next_allowed_at, "search throttled");
            return false;
        }

        entry.last_search_at = now;
        entry.next_allowed_at = next_allowed_at(status, now);
        entry.status_at_last_search = Some(status);
        true
    }

    /// Current throttle state for an item, if it was ever searched.
    pub fn state(&self, item: ItemId) -> Option<CooldownState> {
        self.items.get(&item).map(|entry| *entry)
    }

    /// Drop the recorded state for an item (e.g. when it is no longer
    /// wanted).
    pub fn forget(&self, item: ItemId) {
        self.items.remove(&item);
    }
}
