//! Elapsed clean-time breakdown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the default goal cycle used for percent-complete.
pub const GOAL_CYCLE_DAYS: u64 = 30;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time since the streak began, split into days and remainder components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Elapsed {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Progress through the goal cycle, 0..=100.
    pub percent: u8,
}

impl Elapsed {
    /// Total whole seconds represented by the breakdown.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }
}

/// Break `now - start_date` into days/hours/minutes/seconds.
///
/// A start date in the future clamps to zero instead of failing.
pub fn compute_elapsed(start_date: DateTime<Utc>, now: DateTime<Utc>) -> Elapsed {
    let ms = (now - start_date).num_milliseconds().max(0);

    let days = (ms / MS_PER_DAY) as u64;
    let hours = ((ms % MS_PER_DAY) / MS_PER_HOUR) as u32;
    let minutes = ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32;
    let seconds = ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u32;

    Elapsed {
        days,
        hours,
        minutes,
        seconds,
        percent: goal_percent(days),
    }
}

/// `round(min(days / 30, 1) * 100)`.
pub fn goal_percent(days: u64) -> u8 {
    let ratio = (days as f64 / GOAL_CYCLE_DAYS as f64).min(1.0);
    (ratio * 100.0).round() as u8
}
