//! Calendar-day classification for the month view.
//!
//! Days are compared as calendar dates in a caller-chosen time zone, never
//! by exact timestamp. Relapses are not assumed to be sorted or to fall
//! inside the streak window.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Whether `date` matches the calendar day of any relapse.
pub fn is_relapse_day<Tz: TimeZone>(date: NaiveDate, relapses: &[DateTime<Utc>], tz: &Tz) -> bool {
    relapses
        .iter()
        .any(|r| r.with_timezone(tz).date_naive() == date)
}

/// Whether `date` lies in `[start_date, now]` by calendar day and is not a
/// relapse day.
pub fn is_success_day<Tz: TimeZone>(
    date: NaiveDate,
    start_date: DateTime<Utc>,
    relapses: &[DateTime<Utc>],
    now: DateTime<Utc>,
    tz: &Tz,
) -> bool {
    in_streak_window(date, start_date, now, tz) && !is_relapse_day(date, relapses, tz)
}

fn in_streak_window<Tz: TimeZone>(
    date: NaiveDate,
    start_date: DateTime<Utc>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> bool {
    let first = start_date.with_timezone(tz).date_naive();
    let last = now.with_timezone(tz).date_naive();
    date >= first && date <= last
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Relapse,
    Success,
    /// Before the streak started or after today.
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub is_today: bool,
}

/// Relapse days indexed once per render.
pub struct RelapseCalendar {
    relapse_days: HashSet<NaiveDate>,
    first_day: NaiveDate,
    today: NaiveDate,
}

impl RelapseCalendar {
    /// Index `relapses` by calendar day in `tz`.
    pub fn new<Tz: TimeZone>(
        start_date: DateTime<Utc>,
        relapses: &[DateTime<Utc>],
        now: DateTime<Utc>,
        tz: Tz,
    ) -> Self {
        let relapse_days = relapses
            .iter()
            .map(|r| r.with_timezone(&tz).date_naive())
            .collect();
        Self {
            relapse_days,
            first_day: start_date.with_timezone(&tz).date_naive(),
            today: now.with_timezone(&tz).date_naive(),
        }
    }

    pub fn is_relapse_day(&self, date: NaiveDate) -> bool {
        self.relapse_days.contains(&date)
    }

    pub fn is_success_day(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.today && !self.is_relapse_day(date)
    }

    pub fn status(&self, date: NaiveDate) -> DayStatus {
        if self.is_relapse_day(date) {
            DayStatus::Relapse
        } else if self.is_success_day(date) {
            DayStatus::Success
        } else {
            DayStatus::Outside
        }
    }

    /// One entry per day of `month` in `year`. Empty for an invalid month.
    pub fn month_grid(&self, year: i32, month: u32) -> Vec<CalendarDay> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        let Some(next_month) = first.checked_add_months(Months::new(1)) else {
            return Vec::new();
        };

        first
            .iter_days()
            .take_while(|d| *d < next_month)
            .map(|date| CalendarDay {
                date,
                status: self.status(date),
                is_today: date == self.today,
            })
            .collect()
    }

    /// Grid for the month containing "now".
    pub fn current_month_grid(&self) -> Vec<CalendarDay> {
        self.month_grid(self.today.year(), self.today.month())
    }
}
