// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Batch planning.
//!
//! Given the current instant and the committed sync state, decide which
//! day-buckets need a remote fetch this cycle. The planner is a pure function so
//! day-boundary behavior stays deterministic and testable; the orchestrator in
//! [`crate::synchronizer`] executes the plan it produces.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::checkpoint::last_desired_sync_time;
use crate::day::DayDate;

/// One fetch the synchronizer must perform this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedBatch {
    /// Day-bucket to request.
    pub day: DayDate,
    /// Watermark from the last committed cycle, if any: only data published after
    /// this instant is requested for the bucket.
    pub published_after: Option<DateTime<Utc>>,
}

/// Compute the ordered fetch plan for a cycle starting at `now`.
///
/// Returns an empty plan when `last_synced_checkpoint` already equals the most
/// recent release checkpoint — the dedup guarantee: a satisfied checkpoint window
/// costs zero remote calls.
///
/// Otherwise the plan covers the `days_to_check` most recent buckets ending at
/// `now`'s day, oldest first. Late reports can still be published into any bucket
/// inside that window, so a stale checkpoint always re-plans the whole window and
/// per-bucket incrementality comes from the `published_after` watermarks instead.
/// Catch-up after any idle gap is therefore capped at `days_to_check` entries.
#[must_use]
pub fn plan(
    now: DateTime<Utc>,
    last_synced_checkpoint: Option<DateTime<Utc>>,
    watermarks: &HashMap<DayDate, DateTime<Utc>>,
    days_to_check: u32,
) -> Vec<PlannedBatch> {
    if last_synced_checkpoint == Some(last_desired_sync_time(now)) {
        return Vec::new();
    }

    let mut days = Vec::with_capacity(days_to_check as usize);
    let mut day = DayDate::containing(now);
    for _ in 0..days_to_check {
        days.push(day);
        match day.pred() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    days.reverse();

    days.into_iter()
        .map(|day| PlannedBatch {
            day,
            published_after: watermarks.get(&day).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 5, 19, 12, 12, 0).unwrap()
    }

    #[test]
    fn test_fresh_state_plans_full_window_oldest_first() {
        let batches = plan(noon(), None, &HashMap::new(), 10);

        assert_eq!(batches.len(), 10);
        assert!(batches.windows(2).all(|w| w[0].day < w[1].day));
        assert_eq!(batches[9].day, DayDate::containing(noon()));
        assert!(batches.iter().all(|b| b.published_after.is_none()));
    }

    #[test]
    fn test_satisfied_checkpoint_plans_nothing() {
        let checkpoint = last_desired_sync_time(noon());
        let batches = plan(noon(), Some(checkpoint), &HashMap::new(), 10);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_stale_checkpoint_replans_full_window() {
        let earlier = last_desired_sync_time(noon() - Duration::days(1));
        let batches = plan(noon(), Some(earlier), &HashMap::new(), 10);
        assert_eq!(batches.len(), 10);
    }

    #[test]
    fn test_long_gap_is_capped_at_window() {
        let later = noon() + Duration::days(15);
        let batches = plan(later, None, &HashMap::new(), 10);
        assert_eq!(batches.len(), 10);
        assert_eq!(batches[9].day, DayDate::containing(later));
    }

    #[test]
    fn test_watermarks_carry_into_plan() {
        let today = DayDate::containing(noon());
        let mut watermarks = HashMap::new();
        watermarks.insert(today, noon() - Duration::hours(7));

        let batches = plan(noon(), None, &watermarks, 10);
        let todays = batches.iter().find(|b| b.day == today).unwrap();
        assert_eq!(todays.published_after, Some(noon() - Duration::hours(7)));
        assert!(batches[0].published_after.is_none());
    }

    #[test]
    fn test_zero_window_plans_nothing() {
        assert!(plan(noon(), None, &HashMap::new(), 0).is_empty());
    }
}
