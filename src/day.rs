// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! UTC day bucketing.
//!
//! Remote case data is published in day-granularity batches. [`DayDate`] maps any
//! instant to its UTC calendar day, so two timestamps on the same day always
//! address the same remote bucket. All arithmetic is explicit UTC; no ambient
//! locale or timezone state is consulted.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// One calendar day's worth of remotely published case data.
///
/// Identified by its UTC date. Totally ordered by the calendar, hashable, and
/// cheap to copy, so it can key the watermark map directly.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use exposure_sync::DayDate;
///
/// let noon = Utc.with_ymd_and_hms(2020, 5, 19, 12, 12, 0).unwrap();
/// let night = Utc.with_ymd_and_hms(2020, 5, 19, 23, 55, 0).unwrap();
/// assert_eq!(DayDate::containing(noon), DayDate::containing(night));
/// assert_eq!(
///     DayDate::containing(noon).day_min(),
///     Utc.with_ymd_and_hms(2020, 5, 19, 0, 0, 0).unwrap(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayDate(NaiveDate);

impl DayDate {
    /// The bucket containing `instant`, i.e. its UTC calendar day.
    #[must_use]
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    /// UTC midnight opening this bucket; the lower fetch boundary.
    #[must_use]
    pub fn day_min(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// The previous calendar day, or `None` at the calendar's lower bound.
    #[must_use]
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// The next calendar day, or `None` at the calendar's upper bound.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
