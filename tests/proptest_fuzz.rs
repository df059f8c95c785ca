//! Property-based tests for the pure scheduling math.
//!
//! Day bucketing, checkpoint arithmetic, and batch planning are total functions
//! over arbitrary instants; proptest hammers them across a wide timestamp range
//! and verifies the invariants the synchronizer relies on.
//!
//! Run with: `cargo test --test proptest_fuzz`

use std::collections::HashMap;

use chrono::{DateTime, Duration, Timelike, Utc};
use proptest::prelude::*;

use exposure_sync::{last_desired_sync_time, planner, DayDate};

// =============================================================================
// Strategies
// =============================================================================

/// Arbitrary instant between 1970 and 2100, second precision.
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| {
        DateTime::<Utc>::from_timestamp(secs, 0).expect("timestamp in range")
    })
}

proptest! {
    // =========================================================================
    // Day bucketing
    // =========================================================================

    #[test]
    fn day_min_bounds_the_instant(now in instant_strategy()) {
        let day = DayDate::containing(now);
        prop_assert!(day.day_min() <= now);
        prop_assert!(now < day.day_min() + Duration::days(1));
    }

    #[test]
    fn bucketing_is_idempotent(now in instant_strategy()) {
        let day = DayDate::containing(now);
        prop_assert_eq!(DayDate::containing(day.day_min()), day);
    }

    #[test]
    fn pred_and_succ_are_inverse(now in instant_strategy()) {
        let day = DayDate::containing(now);
        prop_assert_eq!(day.pred().and_then(DayDate::succ), Some(day));
        prop_assert_eq!(day.succ().and_then(DayDate::pred), Some(day));
    }

    // =========================================================================
    // Checkpoint calculator
    // =========================================================================

    #[test]
    fn checkpoint_is_recent_and_on_schedule(now in instant_strategy()) {
        let checkpoint = last_desired_sync_time(now);
        prop_assert!(checkpoint <= now);
        prop_assert!(now - checkpoint < Duration::days(1));
        prop_assert!(checkpoint.hour() == 6 || checkpoint.hour() == 20);
        prop_assert_eq!(checkpoint.minute(), 0);
        prop_assert_eq!(checkpoint.second(), 0);
    }

    #[test]
    fn checkpoint_is_a_fixed_point(now in instant_strategy()) {
        let checkpoint = last_desired_sync_time(now);
        prop_assert_eq!(last_desired_sync_time(checkpoint), checkpoint);
    }

    // =========================================================================
    // Batch planner
    // =========================================================================

    #[test]
    fn plan_is_bounded_ordered_and_ends_today(
        now in instant_strategy(),
        days_to_check in 1u32..=30,
    ) {
        let plan = planner::plan(now, None, &HashMap::new(), days_to_check);

        prop_assert!(plan.len() <= days_to_check as usize);
        prop_assert!(!plan.is_empty());
        prop_assert_eq!(plan[plan.len() - 1].day, DayDate::containing(now));
        // contiguous, oldest first
        for pair in plan.windows(2) {
            prop_assert_eq!(pair[0].day.succ(), Some(pair[1].day));
        }
    }

    #[test]
    fn plan_is_empty_iff_checkpoint_satisfied(
        now in instant_strategy(),
        stale_hours in 0i64..200,
    ) {
        let satisfied = last_desired_sync_time(now);
        prop_assert!(planner::plan(now, Some(satisfied), &HashMap::new(), 10).is_empty());

        let stale = satisfied - Duration::hours(stale_hours + 1);
        prop_assert!(!planner::plan(now, Some(stale), &HashMap::new(), 10).is_empty());
    }

    #[test]
    fn plan_carries_watermarks_for_planned_days_only(
        now in instant_strategy(),
        watermark_offset_secs in 0i64..86_400,
    ) {
        let today = DayDate::containing(now);
        let mut watermarks = HashMap::new();
        watermarks.insert(today, today.day_min() + Duration::seconds(watermark_offset_secs));

        let plan = planner::plan(now, None, &watermarks, 10);
        for batch in &plan {
            prop_assert_eq!(batch.published_after, watermarks.get(&batch.day).copied());
        }
    }
}
