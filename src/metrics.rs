// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Metrics instrumentation for exposure-sync.
//!
//! Uses the `metrics` crate for backend-agnostic collection; the host app picks
//! the exporter.
//!
//! # Metric Naming Convention
//! - `exposure_sync_` prefix for all metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Labels
//! - `status`: skipped, success, networking_error, matching_error

use std::time::Duration;

use metrics::{counter, histogram};

/// Record the outcome of one sync cycle.
pub fn record_cycle(status: &'static str, elapsed: Duration) {
    counter!("exposure_sync_cycles_total", "status" => status).increment(1);
    histogram!("exposure_sync_cycle_seconds", "status" => status).record(elapsed.as_secs_f64());
}

/// Record day-bucket fetches completed before the cycle ended.
pub fn record_batches_fetched(count: usize) {
    counter!("exposure_sync_batches_fetched_total").increment(count as u64);
}
