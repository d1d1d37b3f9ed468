//! Money and time recovered since the streak began.

use serde::{Deserialize, Serialize};

use super::elapsed::GOAL_CYCLE_DAYS;
use crate::addiction::Losses;

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    /// Monthly spend the user reported.
    pub monthly: Option<f64>,
    /// Monthly spend extrapolated linearly over the elapsed days.
    pub saved: Option<f64>,
    /// Twelve months of the reported spend.
    pub annual_projection: Option<f64>,
    /// Free-text per-day time loss, passed through untouched.
    pub time_per_day: Option<String>,
    pub event: Option<String>,
    pub days: u64,
}

impl Savings {
    /// `"<time> × <days> days"`, or `None` when no time loss was given.
    pub fn time_display(&self) -> Option<String> {
        self.time_per_day
            .as_ref()
            .map(|t| format!("{t} × {} days", self.days))
    }
}

/// Project the reported losses over `elapsed_days`.
pub fn compute_savings(losses: &Losses, elapsed_days: u64) -> Savings {
    let saved = losses
        .money
        .map(|m| m * (elapsed_days as f64 / GOAL_CYCLE_DAYS as f64));
    Savings {
        monthly: losses.money,
        saved,
        annual_projection: losses.money.map(|m| m * MONTHS_PER_YEAR),
        time_per_day: losses.time.clone(),
        event: losses.event.clone(),
        days: elapsed_days,
    }
}

/// Two-decimal rounding used for display and summaries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
