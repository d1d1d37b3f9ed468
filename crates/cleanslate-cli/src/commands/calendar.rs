use chrono::{Datelike, Local, NaiveDate, Utc};
use clap::Args;
use cleanslate_core::progress::DayStatus;
use cleanslate_core::{RelapseCalendar, ValidationError};

use super::{open_state, print_json};

#[derive(Args)]
pub struct CalendarArgs {
    /// Addiction id (or unique prefix)
    id: String,
    /// Month to show as YYYY-MM (defaults to the current month)
    #[arg(long)]
    month: Option<String>,
    /// Print a text grid instead of JSON
    #[arg(long)]
    text: bool,
}

fn parse_month(raw: &str) -> Result<(i32, u32), ValidationError> {
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| ValidationError::InvalidValue {
            field: "month".into(),
            message: format!("expected YYYY-MM, got '{raw}'"),
        })
}

pub fn run(args: CalendarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = open_state()?;
    let addiction = state.find(&args.id)?;
    let calendar =
        RelapseCalendar::new(addiction.start_date, &addiction.relapses, Utc::now(), Local);

    let grid = match args.month.as_deref() {
        Some(raw) => {
            let (year, month) = parse_month(raw)?;
            calendar.month_grid(year, month)
        }
        None => calendar.current_month_grid(),
    };

    if !args.text {
        return print_json(&grid);
    }

    // Monday-first rows; x = relapse, o = success, . = outside the streak.
    let Some(first) = grid.first() else {
        return Ok(());
    };
    println!("{}", first.date.format("%B %Y"));
    println!("Mo Tu We Th Fr Sa Su");
    let mut line = "   ".repeat(first.date.weekday().num_days_from_monday() as usize);
    for day in &grid {
        let mark = match day.status {
            DayStatus::Relapse => 'x',
            DayStatus::Success => 'o',
            DayStatus::Outside => '.',
        };
        line.push_str(&format!("{mark}{} ", if day.is_today { '*' } else { ' ' }));
        if day.date.weekday().num_days_from_monday() == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }
    Ok(())
}
