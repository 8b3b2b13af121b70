//! Text and JSON rendering of query results.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use meeting_calendar::{DaySchedule, Interval, Meeting};
use serde::Serialize;

/// A free slot as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct SlotDto {
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
}

impl SlotDto {
    pub fn new(slot: &Interval, tz: Tz) -> Self {
        Self {
            start: slot.start.with_timezone(&tz).to_rfc3339(),
            end: slot.end.with_timezone(&tz).to_rfc3339(),
            duration_minutes: slot.duration_minutes(),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `HH:MM` wall-clock time of `instant` relative to `date`; the next local
/// midnight renders as `24:00`.
pub fn clock(instant: DateTime<Utc>, date: NaiveDate, tz: Tz) -> String {
    let local = instant.with_timezone(&tz);
    if local.date_naive() > date && local.time() == NaiveTime::MIN {
        "24:00".to_string()
    } else {
        local.format("%H:%M").to_string()
    }
}

pub fn meeting_line(meeting: &Meeting) -> String {
    format!(
        "{}-{}  {}",
        meeting.start_time().format("%H:%M"),
        meeting.end_time().format("%H:%M"),
        meeting.subject()
    )
}

pub fn print_meetings(meetings: &[Meeting]) {
    if meetings.is_empty() {
        println!("(no meetings)");
    }
    for meeting in meetings {
        println!("{}", meeting_line(meeting));
    }
}

pub fn print_slots(slots: &[Interval], date: NaiveDate, tz: Tz) {
    if slots.is_empty() {
        println!("(no free time)");
    }
    for slot in slots {
        println!(
            "{}-{}  free ({} min)",
            clock(slot.start, date, tz),
            clock(slot.end, date, tz),
            slot.duration_minutes()
        );
    }
}

pub fn print_days<'a>(days: impl IntoIterator<Item = &'a DaySchedule>) {
    for day in days {
        if day.is_free() {
            println!("{}  (free)", day.date.format("%a %Y-%m-%d"));
            continue;
        }
        println!("{}", day.date.format("%a %Y-%m-%d"));
        for meeting in &day.meetings {
            println!("  {}", meeting_line(meeting));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::UTC;

    use super::*;

    #[test]
    fn next_midnight_renders_as_24() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let morning = Utc.with_ymd_and_hms(2024, 3, 4, 9, 45, 0).unwrap();

        assert_eq!(clock(midnight, date, UTC), "24:00");
        assert_eq!(clock(morning, date, UTC), "09:45");
    }
}
