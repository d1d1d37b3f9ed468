//! The tracked entity and its lifecycle.
//!
//! An [`Addiction`] is created once with an empty relapse log, mutated in
//! place by recording relapses, editing cosmetic fields, or restarting the
//! streak, and destroyed by explicit deletion.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Whether the target is something to quit or a habit to break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddictionKind {
    #[default]
    Vice,
    Habit,
}

impl FromStr for AddictionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vice" => Ok(Self::Vice),
            "habit" => Ok(Self::Habit),
            other => Err(ValidationError::InvalidValue {
                field: "kind".into(),
                message: format!("expected 'vice' or 'habit', got '{other}'"),
            }),
        }
    }
}

/// Color tag chosen at setup. Resolved to a [`ColorStyle`] at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Blue,
    Purple,
    Pink,
    Green,
    Orange,
    Red,
}

/// Presentation descriptor for a [`ColorTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorStyle {
    pub hex: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
}

impl ColorTag {
    pub const ALL: [ColorTag; 6] = [
        ColorTag::Blue,
        ColorTag::Purple,
        ColorTag::Pink,
        ColorTag::Green,
        ColorTag::Orange,
        ColorTag::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
            ColorTag::Green => "green",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
        }
    }

    pub fn style(&self) -> ColorStyle {
        let (hex, gradient_from, gradient_to) = match self {
            ColorTag::Blue => ("#3b82f6", "blue-400", "blue-600"),
            ColorTag::Purple => ("#a855f7", "purple-400", "purple-600"),
            ColorTag::Pink => ("#ec4899", "pink-400", "pink-600"),
            ColorTag::Green => ("#10b981", "green-400", "green-600"),
            ColorTag::Orange => ("#f97316", "orange-400", "orange-600"),
            ColorTag::Red => ("#ef4444", "red-400", "red-600"),
        };
        ColorStyle {
            hex,
            gradient_from,
            gradient_to,
        }
    }

    /// Parse a stored tag; anything unrecognised renders as blue.
    pub fn parse_lossy(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the addiction costs the user.
///
/// `money` is a monthly amount; `time` is free text per day ("3 hours") and is
/// never parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Losses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

impl Losses {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(money) = self.money {
            if !money.is_finite() || money < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: "losses.money".into(),
                    message: format!("must be a non-negative amount, got {money}"),
                });
            }
        }
        Ok(())
    }
}

/// A tracked recovery target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addiction {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: AddictionKind,
    pub category: String,
    pub emoji: String,
    #[serde(default)]
    pub color: ColorTag,
    #[serde(default)]
    pub losses: Losses,
    pub start_date: DateTime<Utc>,
    /// Append-only. Not guaranteed to be sorted.
    #[serde(default)]
    pub relapses: Vec<DateTime<Utc>>,
}

/// Input for creating an [`Addiction`].
#[derive(Debug, Clone, Default)]
pub struct NewAddiction {
    pub name: Option<String>,
    pub kind: AddictionKind,
    pub category: String,
    pub emoji: Option<String>,
    pub color: ColorTag,
    pub losses: Losses,
    pub start_date: DateTime<Utc>,
}

/// Cosmetic edits. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct AddictionPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub emoji: Option<String>,
    pub color: Option<ColorTag>,
    pub losses: Option<Losses>,
}

pub const DEFAULT_EMOJI: &str = "🚭";

impl Addiction {
    /// Create a new record with a fresh id and an empty relapse log.
    ///
    /// # Errors
    /// Returns an error if the category is blank or the monthly amount is
    /// negative or not finite.
    pub fn new(input: NewAddiction) -> Result<Self, ValidationError> {
        let category = input.category.trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::Empty("category".into()));
        }
        input.losses.validate()?;

        let name = input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| category.clone());

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            kind: input.kind,
            category,
            emoji: input
                .emoji
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
            color: input.color,
            losses: input.losses,
            start_date: input.start_date,
            relapses: Vec::new(),
        })
    }

    /// Append a relapse timestamp. Does not reset the streak.
    pub fn record_relapse(&mut self, at: DateTime<Utc>) {
        self.relapses.push(at);
    }

    /// Start a new streak at `now`, clearing the relapse log.
    pub fn restart(&mut self, now: DateTime<Utc>) {
        self.start_date = now;
        self.relapses.clear();
    }

    /// Apply cosmetic edits.
    ///
    /// # Errors
    /// Returns an error if the edit would blank the category or carries an
    /// invalid monthly amount. The record is left untouched on error.
    pub fn apply(&mut self, patch: AddictionPatch) -> Result<(), ValidationError> {
        let category = match patch.category {
            Some(c) if c.trim().is_empty() => {
                return Err(ValidationError::Empty("category".into()));
            }
            Some(c) => Some(c.trim().to_string()),
            None => None,
        };
        if let Some(losses) = &patch.losses {
            losses.validate()?;
        }

        if let Some(name) = patch.name.filter(|n| !n.trim().is_empty()) {
            self.name = name.trim().to_string();
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(emoji) = patch.emoji.filter(|e| !e.trim().is_empty()) {
            self.emoji = emoji;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(losses) = patch.losses {
            self.losses = losses;
        }
        Ok(())
    }

    pub fn total_relapses(&self) -> usize {
        self.relapses.len()
    }
}
