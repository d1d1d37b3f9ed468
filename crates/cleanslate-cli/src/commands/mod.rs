pub mod addiction;
pub mod calendar;
pub mod chat;
pub mod config;
pub mod progress;
pub mod quote;
pub mod urgency;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use cleanslate_core::{AppState, CoreError, Database, ValidationError};

pub(crate) fn open_state() -> Result<AppState<Database>, CoreError> {
    AppState::load(Database::open()?)
}

/// Parse a user-supplied timestamp in local time.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM`, or a bare date
/// (midnight).
pub(crate) fn parse_local_timestamp(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| invalid_date(raw))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| invalid_date(raw))
}

fn invalid_date(raw: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: "date".into(),
        message: format!("cannot parse '{raw}' (expected YYYY-MM-DD or YYYY-MM-DD HH:MM)"),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_local_timestamp("2024-05-01T10:00:00+00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn parses_local_forms() {
        assert!(parse_local_timestamp("2024-05-01").is_ok());
        assert!(parse_local_timestamp("2024-05-01 08:30").is_ok());
        assert!(parse_local_timestamp("2024-05-01T08:30").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_local_timestamp("last tuesday").is_err());
        assert!(parse_local_timestamp("2024-13-01").is_err());
    }
}
