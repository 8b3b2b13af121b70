//! Loading a JSON schedule file and replaying it into a calendar.

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use meeting_calendar::CalendarStore;
use serde::Deserialize;
use tracing::{info, warn};

/// One meeting as written in a schedule file.
///
/// ```json
/// {"subject": "Standup", "date": "2024-03-04", "start": "09:00", "duration_minutes": 15}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    pub subject: String,
    pub date: NaiveDate,
    pub start: String,
    pub duration_minutes: i64,
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .with_context(|| format!("Invalid time '{}': expected HH:MM or HH:MM:SS", raw))
}

/// A duration of `n` minutes, rejecting values chrono cannot represent.
pub fn minutes(n: i64) -> Result<TimeDelta> {
    TimeDelta::try_minutes(n).with_context(|| format!("Duration out of range: {} minutes", n))
}

/// Read schedule entries from a file, or from stdin when `path` is `-`.
pub fn load(path: &str) -> Result<Vec<ScheduleEntry>> {
    let raw = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read schedule from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
    };

    serde_json::from_str(&raw).with_context(|| format!("Failed to parse schedule: {}", path))
}

/// Add every entry to `store` in file order.
///
/// Entries that overlap an earlier one are skipped with a warning. Returns the
/// number of entries accepted.
pub fn replay(store: &mut CalendarStore, entries: &[ScheduleEntry]) -> Result<usize> {
    let mut accepted = 0;
    for entry in entries {
        let start = parse_time(&entry.start)?;
        let added = store
            .add_meeting(
                entry.subject.as_str(),
                entry.date,
                start,
                minutes(entry.duration_minutes)?,
            )
            .with_context(|| format!("Invalid schedule entry '{}'", entry.subject))?;

        if added {
            accepted += 1;
        } else {
            warn!(
                subject = entry.subject.as_str(),
                date = %entry.date,
                start = entry.start.as_str(),
                "schedule entry overlaps an earlier meeting; skipped"
            );
        }
    }
    info!(accepted, total = entries.len(), "schedule replayed");
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use chrono_tz::UTC;

    use super::*;

    fn entry(subject: &str, start: &str, minutes: i64) -> ScheduleEntry {
        ScheduleEntry {
            subject: subject.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            start: start.to_string(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn parse_time_accepts_optional_seconds() {
        assert_eq!(parse_time("09:15").unwrap(), NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(parse_time("09:15:30").unwrap(), NaiveTime::from_hms_opt(9, 15, 30).unwrap());
        assert!(parse_time("9 o'clock").is_err());
    }

    #[test]
    fn replay_skips_overlapping_entries() {
        let mut store = CalendarStore::new(UTC);
        let entries = vec![
            entry("Standup", "09:00", 15),
            entry("Planning", "09:10", 30),
            entry("Planning", "09:15", 30),
        ];

        assert_eq!(replay(&mut store, &entries).unwrap(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replay_fails_on_negative_duration() {
        let mut store = CalendarStore::new(UTC);
        let err = replay(&mut store, &[entry("Broken", "09:00", -5)]).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }
}
