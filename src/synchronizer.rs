// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Sync cycle orchestration.
//!
//! [`CaseSynchronizer`] is the crate's single public entry point. One call to
//! [`sync`](CaseSynchronizer::sync) runs one cycle:
//!
//! ```text
//! plan → fetch each bucket → ingest → finalize → commit watermarks + checkpoint
//! ```
//!
//! The commit is whole-cycle atomic: any networking or matching failure, at any
//! point, leaves the watermark store exactly as the previous successful cycle
//! left it. Retry is the caller's job; the next cycle re-plans from the
//! last-committed state and re-requests whatever failed.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use exposure_sync::{
//!     ApplicationDescriptor, CaseSynchronizer, InMemoryWatermarkStore, SyncConfig,
//! };
//! # use exposure_sync::{ExposeeService, Matcher};
//! # async fn example(matcher: Arc<dyn Matcher>, service: Arc<dyn ExposeeService>) {
//! let descriptor = ApplicationDescriptor {
//!     app_id: "ch.example.tracing".into(),
//!     bucket_base_url: "https://cases.example.org".into(),
//!     report_base_url: "https://report.example.org".into(),
//! };
//! let store = Arc::new(InMemoryWatermarkStore::new());
//! let sync = CaseSynchronizer::new(descriptor, SyncConfig::default(), matcher, service, store);
//!
//! sync.sync().await.expect("sync cycle failed");
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::checkpoint::last_desired_sync_time;
use crate::config::{ApplicationDescriptor, SyncConfig};
use crate::day::DayDate;
use crate::matcher::{Matcher, MatchingError};
use crate::metrics;
use crate::planner;
use crate::service::{ExposeeService, NetworkingError};
use crate::storage::traits::WatermarkStore;

/// Failure of one sync cycle.
///
/// Both classes abort the remainder of the cycle, skip the store commit, and are
/// surfaced verbatim. Every failure is cycle-local and recoverable by calling
/// [`CaseSynchronizer::sync`] again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error(transparent)]
    Networking(#[from] NetworkingError),
    #[error(transparent)]
    Matching(#[from] MatchingError),
}

/// Orchestrates incremental synchronization of daily exposure-case batches.
///
/// # Thread Safety
///
/// `Send + Sync`; overlapping [`sync`](Self::sync) calls serialize on an internal
/// lock, so a second cycle never plans against a first cycle's uncommitted state
/// and never double-fetches.
///
/// # Cancellation
///
/// Dropping an in-flight cycle's future leaves no partial state: the store
/// commit is the final step, so an abandoned cycle behaves like a failed one.
pub struct CaseSynchronizer {
    descriptor: ApplicationDescriptor,
    config: SyncConfig,
    matcher: Arc<dyn Matcher>,
    service: Arc<dyn ExposeeService>,
    store: Arc<dyn WatermarkStore>,
    /// Serializes whole cycles, including the commit.
    cycle_lock: Mutex<()>,
}

impl CaseSynchronizer {
    #[must_use]
    pub fn new(
        descriptor: ApplicationDescriptor,
        config: SyncConfig,
        matcher: Arc<dyn Matcher>,
        service: Arc<dyn ExposeeService>,
        store: Arc<dyn WatermarkStore>,
    ) -> Self {
        Self {
            descriptor,
            config,
            matcher,
            service,
            store,
            cycle_lock: Mutex::new(()),
        }
    }

    /// Run one sync cycle at the current wall-clock instant.
    ///
    /// Resolves exactly once, with `Ok(())` or the originating error.
    pub async fn sync(&self) -> Result<(), SyncError> {
        self.sync_at(Utc::now()).await
    }

    /// Run one sync cycle as if the current instant were `now`.
    ///
    /// The injectable instant exists primarily for deterministic testing of
    /// day-boundary and checkpoint behavior.
    pub async fn sync_at(&self, now: DateTime<Utc>) -> Result<(), SyncError> {
        let _cycle = self.cycle_lock.lock().await;
        let started = Instant::now();

        let last_synced = self.store.last_synced_checkpoint().await;
        let watermarks = self.store.watermarks().await;
        let plan = planner::plan(now, last_synced, &watermarks, self.config.days_to_check);

        if plan.is_empty() {
            debug!(
                app_id = %self.descriptor.app_id,
                ?last_synced,
                "checkpoint window already satisfied, skipping cycle"
            );
            metrics::record_cycle("skipped", started.elapsed());
            return Ok(());
        }

        debug!(
            app_id = %self.descriptor.app_id,
            batches = plan.len(),
            first = %plan[0].day,
            last = %plan[plan.len() - 1].day,
            "starting sync cycle"
        );

        let mut fetched = 0usize;
        let result = self.run_cycle(&plan, &mut fetched).await;
        metrics::record_batches_fetched(fetched);

        match result {
            Ok(updates) => {
                let checkpoint = last_desired_sync_time(now);
                self.store.commit(updates, checkpoint).await;
                info!(
                    app_id = %self.descriptor.app_id,
                    batches = plan.len(),
                    %checkpoint,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "sync cycle committed"
                );
                metrics::record_cycle("success", started.elapsed());
                Ok(())
            }
            Err(err) => {
                warn!(
                    app_id = %self.descriptor.app_id,
                    fetched,
                    planned = plan.len(),
                    error = %err,
                    "sync cycle aborted, no watermarks written"
                );
                let status = match err {
                    SyncError::Networking(_) => "networking_error",
                    SyncError::Matching(_) => "matching_error",
                };
                metrics::record_cycle(status, started.elapsed());
                Err(err)
            }
        }
    }

    /// Fetch, ingest, and finalize the plan. Returns the watermark updates to
    /// commit; any error leaves the store untouched.
    async fn run_cycle(
        &self,
        plan: &[planner::PlannedBatch],
        fetched: &mut usize,
    ) -> Result<HashMap<DayDate, DateTime<Utc>>, SyncError> {
        let mut updates = HashMap::with_capacity(plan.len());

        for batch in plan {
            let case_batch = self
                .service
                .fetch_batch(batch.day.day_min(), batch.published_after)
                .await?;
            *fetched += 1;

            if let Some(payload) = &case_batch.payload {
                self.matcher.ingest_case_data(payload, batch.day).await?;
            } else {
                debug!(day = %batch.day, "no new publications for bucket");
            }

            updates.insert(batch.day, case_batch.published_until);
        }

        self.matcher.finalize_session().await?;
        Ok(updates)
    }
}
