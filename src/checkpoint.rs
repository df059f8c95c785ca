// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Publication checkpoint arithmetic.
//!
//! The authority releases new case batches twice a day, at 06:00 and 20:00 UTC.
//! [`last_desired_sync_time`] maps an instant to the most recent of those release
//! checkpoints; the synchronizer compares it against the stored checkpoint to
//! decide whether a fresh cycle is due at all.

use chrono::{DateTime, Duration, Utc};

use crate::day::DayDate;

/// Hour of the morning release checkpoint (UTC).
pub const MORNING_RELEASE_HOUR: i64 = 6;

/// Hour of the evening release checkpoint (UTC).
pub const EVENING_RELEASE_HOUR: i64 = 20;

/// The most recent release checkpoint at or before `now`.
///
/// - at or after 20:00 → today 20:00
/// - at or after 06:00 → today 06:00
/// - before 06:00 → yesterday 20:00
///
/// Pure function of the UTC time of day; the result is the newest instant whose
/// publications should already be visible on the backend.
#[must_use]
pub fn last_desired_sync_time(now: DateTime<Utc>) -> DateTime<Utc> {
    let midnight = DayDate::containing(now).day_min();
    let morning = midnight + Duration::hours(MORNING_RELEASE_HOUR);
    let evening = midnight + Duration::hours(EVENING_RELEASE_HOUR);

    if now >= evening {
        evening
    } else if now >= morning {
        morning
    } else {
        evening - Duration::days(1)
    }
}
