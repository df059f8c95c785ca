use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::day::DayDate;

/// Key-value persistence for sync progress.
///
/// Holds two things: a per-bucket `published_until` watermark map and the single
/// last-synced checkpoint. Both survive process restarts; ownership of durability
/// lies with the implementation, not the synchronizer.
///
/// # Atomicity
///
/// [`commit`](Self::commit) is part of the contract, not an implementation
/// detail: every watermark entry and the new checkpoint become visible together,
/// or none do. A half-applied commit could advance a watermark past data the
/// matching engine never ingested, which would permanently skip exposures.
#[async_trait]
pub trait WatermarkStore: Send + Sync {
    /// Snapshot of all committed per-bucket watermarks.
    async fn watermarks(&self) -> HashMap<DayDate, DateTime<Utc>>;

    /// The most recent release checkpoint fully satisfied, if any cycle has ever
    /// committed.
    async fn last_synced_checkpoint(&self) -> Option<DateTime<Utc>>;

    /// Atomically apply a successful cycle: merge `updates` into the watermark
    /// map and replace the last-synced checkpoint.
    ///
    /// Implementations may drop buckets older than the oldest updated entry —
    /// every plan covers a contiguous window ending at the current day, so the
    /// planner never revisits them and pruning keeps the snapshot bounded.
    async fn commit(&self, updates: HashMap<DayDate, DateTime<Utc>>, checkpoint: DateTime<Utc>);
}
