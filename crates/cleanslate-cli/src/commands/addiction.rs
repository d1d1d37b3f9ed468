use chrono::Utc;
use clap::{Args, Subcommand};
use cleanslate_core::{
    Addiction, AddictionKind, AddictionPatch, ColorStyle, ColorTag, Losses, NewAddiction,
};
use serde::Serialize;
use serde_json::json;

use super::{open_state, parse_local_timestamp, print_json};

#[derive(Args)]
pub struct LossArgs {
    /// Money spent per month
    #[arg(long)]
    money: Option<f64>,
    /// Time lost per day, free text (e.g. "3 hours")
    #[arg(long)]
    time: Option<String>,
    /// Something the addiction cost you
    #[arg(long)]
    event: Option<String>,
}

impl LossArgs {
    fn is_empty(&self) -> bool {
        self.money.is_none() && self.time.is_none() && self.event.is_none()
    }

    fn merge_into(self, mut losses: Losses) -> Losses {
        if self.money.is_some() {
            losses.money = self.money;
        }
        if self.time.is_some() {
            losses.time = self.time;
        }
        if self.event.is_some() {
            losses.event = self.event;
        }
        losses
    }
}

#[derive(Subcommand)]
pub enum AddictionAction {
    /// Start tracking a new addiction
    Add {
        /// Category (e.g. alcohol, tobacco, gaming)
        #[arg(long)]
        category: String,
        /// Display name (defaults to the category)
        #[arg(long)]
        name: Option<String>,
        /// vice or habit
        #[arg(long, default_value = "vice")]
        kind: AddictionKind,
        #[arg(long)]
        emoji: Option<String>,
        /// blue, purple, pink, green, orange or red
        #[arg(long, default_value = "blue")]
        color: String,
        /// Streak start (defaults to now)
        #[arg(long)]
        start: Option<String>,
        #[command(flatten)]
        losses: LossArgs,
    },
    /// List tracked addictions with current progress
    List,
    /// Print one record
    Show { id: String },
    /// Edit cosmetic fields and losses
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        emoji: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[command(flatten)]
        losses: LossArgs,
    },
    /// Record a relapse (does not reset the streak)
    Relapse {
        id: String,
        /// When it happened (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Start the streak over and clear relapses
    Restart { id: String },
    /// Stop tracking an addiction
    Delete { id: String },
}

/// A stored record with its colour resolved for display.
#[derive(Serialize)]
struct RecordView<'a> {
    #[serde(flatten)]
    addiction: &'a Addiction,
    style: ColorStyle,
}

impl<'a> From<&'a Addiction> for RecordView<'a> {
    fn from(addiction: &'a Addiction) -> Self {
        Self {
            addiction,
            style: addiction.color.style(),
        }
    }
}

#[derive(Serialize)]
struct ListEntry<'a> {
    id: &'a str,
    name: &'a str,
    emoji: &'a str,
    color: ColorTag,
    style: ColorStyle,
    days: u64,
    hours: u32,
    minutes: u32,
    seconds: u32,
    percent: u8,
}

pub fn run(action: AddictionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = open_state()?;
    let now = Utc::now();

    match action {
        AddictionAction::Add {
            category,
            name,
            kind,
            emoji,
            color,
            start,
            losses,
        } => {
            let start_date = match start {
                Some(raw) => parse_local_timestamp(&raw)?,
                None => now,
            };
            let added = state.add(NewAddiction {
                name,
                kind,
                category,
                emoji,
                color: ColorTag::parse_lossy(&color),
                losses: losses.merge_into(Losses::default()),
                start_date,
            })?;
            print_json(&RecordView::from(added))?;
        }
        AddictionAction::List => {
            let entries: Vec<ListEntry<'_>> = state
                .addictions()
                .iter()
                .map(|a| {
                    let e = cleanslate_core::compute_elapsed(a.start_date, now);
                    ListEntry {
                        id: &a.id,
                        name: &a.name,
                        emoji: &a.emoji,
                        color: a.color,
                        style: a.color.style(),
                        days: e.days,
                        hours: e.hours,
                        minutes: e.minutes,
                        seconds: e.seconds,
                        percent: e.percent,
                    }
                })
                .collect();
            print_json(&entries)?;
        }
        AddictionAction::Show { id } => {
            print_json(&RecordView::from(state.find(&id)?))?;
        }
        AddictionAction::Edit {
            id,
            name,
            category,
            emoji,
            color,
            losses,
        } => {
            let merged = if losses.is_empty() {
                None
            } else {
                Some(losses.merge_into(state.find(&id)?.losses.clone()))
            };
            let updated = state.edit(
                &id,
                AddictionPatch {
                    name,
                    category,
                    emoji,
                    color: color.as_deref().map(ColorTag::parse_lossy),
                    losses: merged,
                },
            )?;
            print_json(&RecordView::from(updated))?;
        }
        AddictionAction::Relapse { id, at } => {
            let at = match at {
                Some(raw) => parse_local_timestamp(&raw)?,
                None => now,
            };
            let updated = state.record_relapse(&id, at)?;
            print_json(&RecordView::from(updated))?;
        }
        AddictionAction::Restart { id } => {
            let updated = state.restart(&id, now)?;
            print_json(&RecordView::from(updated))?;
        }
        AddictionAction::Delete { id } => {
            let removed = state.delete(&id)?;
            print_json(&json!({ "type": "addiction_deleted", "id": removed.id }))?;
        }
    }
    Ok(())
}
