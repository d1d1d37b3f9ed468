//! Summary statistics for the report tab.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::elapsed::compute_elapsed;
use crate::addiction::Addiction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub elapsed_days: u64,
    pub total_relapses: usize,
    /// Percentage rounded to one decimal.
    pub success_rate: f64,
    /// `elapsed_days - total_relapses`. This is a rough figure, not the
    /// longest consecutive clean run.
    pub longest_streak_approx: u64,
}

pub fn compute_report_stats(addiction: &Addiction, now: DateTime<Utc>) -> ReportStats {
    let elapsed_days = compute_elapsed(addiction.start_date, now).days;
    stats_for(elapsed_days, addiction.total_relapses())
}

pub(crate) fn stats_for(elapsed_days: u64, total_relapses: usize) -> ReportStats {
    let clean_days = elapsed_days.saturating_sub(total_relapses as u64);
    let success_rate = if elapsed_days > 0 {
        round1(clean_days as f64 / elapsed_days as f64 * 100.0)
    } else {
        100.0
    };
    ReportStats {
        elapsed_days,
        total_relapses,
        success_rate,
        longest_streak_approx: clean_days,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addiction::NewAddiction;
    use chrono::Duration;

    fn addiction(days_ago: i64, relapses: usize, now: DateTime<Utc>) -> Addiction {
        let mut a = Addiction::new(NewAddiction {
            category: "social media".into(),
            start_date: now - Duration::days(days_ago),
            ..Default::default()
        })
        .unwrap();
        for i in 0..relapses {
            a.record_relapse(now - Duration::hours(i as i64 + 1));
        }
        a
    }

    #[test]
    fn zero_days_is_full_success() {
        let now = Utc::now();
        let stats = compute_report_stats(&addiction(0, 1, now), now);
        assert_eq!(stats.elapsed_days, 0);
        assert_eq!(stats.success_rate, 100.0);
    }

    #[test]
    fn success_rate_rounds_to_one_decimal() {
        let now = Utc::now();
        let stats = compute_report_stats(&addiction(3, 1, now), now);
        assert_eq!(stats.total_relapses, 1);
        assert_eq!(stats.success_rate, 66.7);
    }

    // Documented approximation: relapses are subtracted from the elapsed
    // days, so a single relapse mid-streak still reports 19 here.
    #[test]
    fn longest_streak_is_elapsed_minus_relapses() {
        let now = Utc::now();
        let stats = compute_report_stats(&addiction(20, 1, now), now);
        assert_eq!(stats.longest_streak_approx, 19);
    }

    #[test]
    fn more_relapses_than_days_clamps_at_zero() {
        let stats = stats_for(2, 5);
        assert_eq!(stats.longest_streak_approx, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.total_relapses, 5);
    }
}
