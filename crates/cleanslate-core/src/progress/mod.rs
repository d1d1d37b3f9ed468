//! Progress and gamification engine.
//!
//! Every function here is pure: it takes an addiction snapshot and an
//! explicit `now`, reads no clock and keeps no state between calls, so it is
//! safe to call on every one-second UI tick.

mod calendar;
mod elapsed;
mod level;
mod milestones;
mod report;
mod savings;

pub use calendar::{is_relapse_day, is_success_day, CalendarDay, DayStatus, RelapseCalendar};
pub use elapsed::{compute_elapsed, goal_percent, Elapsed, GOAL_CYCLE_DAYS};
pub use level::{classify_level, LevelInfo};
pub use milestones::{milestones, next_milestone, Milestone};
pub use report::{compute_report_stats, ReportStats};
pub use savings::{compute_savings, round2, Savings};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::addiction::Addiction;

/// Everything the detail view shows for one addiction at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub elapsed: Elapsed,
    pub level: LevelInfo,
    pub days_to_next_level: u64,
    pub milestones: Vec<Milestone>,
    pub savings: Savings,
    pub report: ReportStats,
}

impl ProgressSnapshot {
    pub fn compute(addiction: &Addiction, now: DateTime<Utc>) -> Self {
        let elapsed = compute_elapsed(addiction.start_date, now);
        let level = classify_level(elapsed.days);
        Self {
            id: addiction.id.clone(),
            name: addiction.name.clone(),
            emoji: addiction.emoji.clone(),
            days_to_next_level: level.days_to_next_level(elapsed.days),
            level,
            milestones: milestones(elapsed.days),
            savings: compute_savings(&addiction.losses, elapsed.days),
            report: report::stats_for(elapsed.days, addiction.total_relapses()),
            elapsed,
        }
    }

    /// Message offered by the share action.
    pub fn share_text(&self) -> String {
        format!(
            "I've been free from {} for {} days! 💪",
            self.name, self.elapsed.days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addiction::{Losses, NewAddiction};
    use chrono::Duration;

    #[test]
    fn ten_days_in() {
        let now = Utc::now();
        let addiction = Addiction::new(NewAddiction {
            name: Some("Smoking".into()),
            category: "tobacco".into(),
            losses: Losses {
                money: Some(500.0),
                ..Default::default()
            },
            start_date: now - Duration::days(10),
            ..Default::default()
        })
        .unwrap();

        let snap = ProgressSnapshot::compute(&addiction, now);
        assert_eq!(snap.elapsed.days, 10);
        assert_eq!(snap.elapsed.percent, 33);
        assert_eq!(snap.level.level, 3);
        assert_eq!(snap.level.title, "Warrior");
        assert_eq!(snap.days_to_next_level, 4);
        assert_eq!(round2(snap.savings.saved.unwrap()), 166.67);
        assert_eq!(snap.report.success_rate, 100.0);
        assert_eq!(snap.share_text(), "I've been free from Smoking for 10 days! 💪");
    }
}
