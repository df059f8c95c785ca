use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::traits::WatermarkStore;
use crate::day::DayDate;

#[derive(Default)]
struct State {
    watermarks: HashMap<DayDate, DateTime<Utc>>,
    last_synced_checkpoint: Option<DateTime<Utc>>,
}

/// Process-local [`WatermarkStore`].
///
/// Both the watermark map and the checkpoint live under one lock, so a commit is
/// a single critical section and readers never observe a half-applied cycle.
#[derive(Default)]
pub struct InMemoryWatermarkStore {
    state: RwLock<State>,
}

impl InMemoryWatermarkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buckets with a committed watermark.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().watermarks.len()
    }

    /// Check if no cycle has ever committed a watermark.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().watermarks.is_empty()
    }

    /// Drop all sync progress.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.watermarks.clear();
        state.last_synced_checkpoint = None;
    }
}

#[async_trait]
impl WatermarkStore for InMemoryWatermarkStore {
    async fn watermarks(&self) -> HashMap<DayDate, DateTime<Utc>> {
        self.state.read().watermarks.clone()
    }

    async fn last_synced_checkpoint(&self) -> Option<DateTime<Utc>> {
        self.state.read().last_synced_checkpoint
    }

    async fn commit(&self, updates: HashMap<DayDate, DateTime<Utc>>, checkpoint: DateTime<Utc>) {
        let window_start = updates.keys().min().copied();
        let mut state = self.state.write();
        state.watermarks.extend(updates);
        // buckets that aged out of the retention window are never planned again
        if let Some(window_start) = window_start {
            state.watermarks.retain(|day, _| *day >= window_start);
        }
        state.last_synced_checkpoint = Some(checkpoint);
    }
}
