//! Gamified level ladder keyed by clean days.
//!
//! Ten fixed tiers cover the first year; after that every full year adds a
//! level, so the ladder never saturates.

use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: u64 = 365;
const FIRST_OPEN_LEVEL: u32 = 10;

struct Tier {
    /// First day of the tier (inclusive).
    min_days: u64,
    /// First day of the next tier.
    next: u64,
    /// Day from which `progress_percent` is measured.
    progress_base: u64,
    title: &'static str,
    emoji: &'static str,
}

// "First Step" measures progress from day 0 rather than from its own floor.
const TIERS: [Tier; 10] = [
    Tier { min_days: 0, next: 1, progress_base: 0, title: "Beginner", emoji: "🌱" },
    Tier { min_days: 1, next: 3, progress_base: 0, title: "First Step", emoji: "👣" },
    Tier { min_days: 3, next: 7, progress_base: 3, title: "Determined", emoji: "💪" },
    Tier { min_days: 7, next: 14, progress_base: 7, title: "Warrior", emoji: "⚔️" },
    Tier { min_days: 14, next: 21, progress_base: 14, title: "Champion", emoji: "🏆" },
    Tier { min_days: 21, next: 30, progress_base: 21, title: "Master", emoji: "🎖️" },
    Tier { min_days: 30, next: 60, progress_base: 30, title: "Legend", emoji: "⭐" },
    Tier { min_days: 60, next: 90, progress_base: 60, title: "Titan", emoji: "💎" },
    Tier { min_days: 90, next: 180, progress_base: 90, title: "Immortal", emoji: "👑" },
    Tier { min_days: 180, next: 365, progress_base: 180, title: "Divine", emoji: "✨" },
];

/// Where a streak sits on the level ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    pub title: String,
    pub emoji: String,
    /// Position inside the current tier, 0.0..100.0.
    pub progress_percent: f64,
    /// Day count at which the next level starts.
    pub next_level_day_threshold: u64,
}

impl LevelInfo {
    pub fn days_to_next_level(&self, days: u64) -> u64 {
        self.next_level_day_threshold.saturating_sub(days)
    }
}

/// Classify a clean-day count into its tier.
pub fn classify_level(days: u64) -> LevelInfo {
    if let Some((level, tier)) = TIERS
        .iter()
        .enumerate()
        .find(|(_, t)| days >= t.min_days && days < t.next)
    {
        return LevelInfo {
            level: level as u32,
            title: tier.title.to_string(),
            emoji: tier.emoji.to_string(),
            progress_percent: percent_between(days, tier.progress_base, tier.next),
            next_level_day_threshold: tier.next,
        };
    }

    let years = days / DAYS_PER_YEAR;
    let lower = years * DAYS_PER_YEAR;
    let upper = lower.saturating_add(DAYS_PER_YEAR);
    LevelInfo {
        level: FIRST_OPEN_LEVEL.saturating_add(u32::try_from(years).unwrap_or(u32::MAX)),
        title: format!("Transcendent Year {}", years + 1),
        emoji: "🌟".to_string(),
        progress_percent: percent_between(days, lower, upper),
        next_level_day_threshold: upper,
    }
}

fn percent_between(days: u64, lower: u64, upper: u64) -> f64 {
    (days - lower) as f64 / (upper - lower) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn day_zero_is_beginner() {
        let info = classify_level(0);
        assert_eq!(info.level, 0);
        assert_eq!(info.title, "Beginner");
        assert_eq!(info.progress_percent, 0.0);
        assert_eq!(info.next_level_day_threshold, 1);
    }

    #[test]
    fn first_step_measures_from_day_zero() {
        let info = classify_level(2);
        assert_eq!(info.level, 1);
        assert_eq!(info.title, "First Step");
        assert!((info.progress_percent - 66.666).abs() < 0.01);
        assert_eq!(info.next_level_day_threshold, 3);
    }

    #[test]
    fn crossing_a_threshold_resets_progress() {
        let info = classify_level(7);
        assert_eq!(info.level, 3);
        assert_eq!(info.title, "Warrior");
        assert_eq!(info.progress_percent, 0.0);
        assert_eq!(info.next_level_day_threshold, 14);
    }

    #[test]
    fn divine_tier_spans_185_days() {
        let info = classify_level(272);
        assert_eq!(info.level, 9);
        assert!((info.progress_percent - (92.0 / 185.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn open_ended_years() {
        let first_year = classify_level(365);
        assert_eq!(first_year.level, 11);
        assert_eq!(first_year.title, "Transcendent Year 2");
        assert_eq!(first_year.progress_percent, 0.0);
        assert_eq!(first_year.next_level_day_threshold, 730);

        let info = classify_level(400);
        assert_eq!(info.level, 11);
        assert!(info.title.contains("Year 2"));
        assert!((info.progress_percent - 35.0 / 365.0 * 100.0).abs() < 1e-9);

        let far = classify_level(3650);
        assert_eq!(far.level, 20);
        assert_eq!(far.next_level_day_threshold, 4015);
    }

    #[test]
    fn every_threshold_is_lower_inclusive_upper_exclusive() {
        let mut days = 0;
        while days < 2000 {
            let info = classify_level(days);
            let next = info.next_level_day_threshold;
            assert!(next > days);
            assert_eq!(classify_level(next - 1).level, info.level);
            assert_eq!(classify_level(next).level, info.level + 1);
            days = next;
        }
    }

    #[test]
    fn extreme_day_counts_saturate() {
        let wide = classify_level(DAYS_PER_YEAR << 32);
        assert_eq!(wide.level, u32::MAX);
        assert!(wide.level >= classify_level(DAYS_PER_YEAR << 31).level);

        let max = classify_level(u64::MAX);
        assert_eq!(max.level, u32::MAX);
        assert_eq!(max.next_level_day_threshold, u64::MAX);
        assert!(max.progress_percent.is_finite());
        assert!(max.progress_percent <= 100.0);
    }

    proptest! {
        #[test]
        fn level_is_monotonic(a in 0u64..5000, b in 0u64..5000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_level(lo).level <= classify_level(hi).level);
        }

        #[test]
        fn progress_stays_in_range(days in 0u64..10_000) {
            let info = classify_level(days);
            prop_assert!(info.progress_percent >= 0.0);
            prop_assert!(info.progress_percent < 100.0);
        }
    }
}
