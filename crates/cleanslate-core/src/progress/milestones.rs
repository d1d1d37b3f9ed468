//! Badge ladder shown alongside the level.

use serde::Serialize;

struct Badge {
    days: u64,
    label: &'static str,
    emoji: &'static str,
}

const BADGES: [Badge; 8] = [
    Badge { days: 1, label: "1 Day", emoji: "👣" },
    Badge { days: 7, label: "7 Days", emoji: "⚔️" },
    Badge { days: 30, label: "30 Days", emoji: "🎖️" },
    Badge { days: 90, label: "90 Days", emoji: "💎" },
    Badge { days: 180, label: "180 Days", emoji: "👑" },
    Badge { days: 365, label: "1 Year", emoji: "✨" },
    Badge { days: 730, label: "2 Years", emoji: "🌟" },
    Badge { days: 1095, label: "3 Years", emoji: "🏆" },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub days: u64,
    pub label: &'static str,
    pub emoji: &'static str,
    pub unlocked: bool,
}

/// Badge state for a clean-day count.
pub fn milestones(days: u64) -> Vec<Milestone> {
    BADGES
        .iter()
        .map(|b| Milestone {
            days: b.days,
            label: b.label,
            emoji: b.emoji,
            unlocked: days >= b.days,
        })
        .collect()
}

/// The first badge not yet unlocked, if any remain.
pub fn next_milestone(days: u64) -> Option<Milestone> {
    milestones(days).into_iter().find(|m| !m.unlocked)
}
