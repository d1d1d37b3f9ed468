use chrono::Utc;
use clap::Args;
use cleanslate_core::progress::next_milestone;
use cleanslate_core::{classify_level, compute_report_stats, ProgressSnapshot};
use serde_json::json;

use super::{open_state, print_json};

#[derive(Args)]
pub struct ProgressArgs {
    /// Addiction id (or unique prefix)
    id: String,
    /// Print the share message instead of the snapshot
    #[arg(long)]
    share: bool,
}

pub fn run(args: ProgressArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = open_state()?;
    let snapshot = ProgressSnapshot::compute(state.find(&args.id)?, Utc::now());
    if args.share {
        println!("{}", snapshot.share_text());
        return Ok(());
    }
    print_json(&snapshot)
}

pub fn run_level(days: u64) -> Result<(), Box<dyn std::error::Error>> {
    let level = classify_level(days);
    let to_next = level.days_to_next_level(days);
    print_json(&json!({
        "days": days,
        "level": level,
        "days_to_next_level": to_next,
        "next_milestone": next_milestone(days),
    }))
}

pub fn run_report(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = open_state()?;
    let stats = compute_report_stats(state.find(id)?, Utc::now());
    print_json(&stats)
}
