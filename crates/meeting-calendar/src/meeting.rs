//! A single scheduled meeting and its derived absolute interval.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::error::{CalendarError, Result};
use crate::interval::Interval;
use crate::zone;

/// An immutable meeting anchored to one calendar day.
///
/// The absolute interval is computed once from date, start time and zone when
/// the meeting is built.
#[derive(Debug, Clone, Serialize)]
pub struct Meeting {
    subject: String,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    #[serde(rename = "duration_seconds", serialize_with = "serialize_seconds")]
    duration: TimeDelta,
    timezone: Tz,
    interval: Interval,
}

impl Meeting {
    /// Build a meeting.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDuration` if `duration` is negative, and
    /// `CalendarError::OutOfRange` if the meeting cannot be placed on the
    /// timeline.
    pub fn new(
        subject: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
        timezone: Tz,
    ) -> Result<Self> {
        if duration < TimeDelta::zero() {
            return Err(CalendarError::InvalidDuration(duration));
        }

        let start = zone::to_instant(timezone, date, start_time)?;
        let interval = Interval::starting_at(start, duration).ok_or(CalendarError::OutOfRange {
            date,
            time: start_time,
        })?;
        // Wall-clock end; wraps past midnight.
        let (end_time, _) = start_time.overflowing_add_signed(duration);

        Ok(Self {
            subject: subject.into(),
            date,
            start_time,
            end_time,
            duration,
            timezone,
            interval,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Whether this meeting's interval overlaps `other`.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.interval.overlaps(other)
    }

    fn sort_key(&self) -> (NaiveTime, &str, TimeDelta, NaiveDate, &'static str) {
        (
            self.start_time,
            self.subject.as_str(),
            self.duration,
            self.date,
            self.timezone.name(),
        )
    }
}

// Ordered by start time, then subject. The remaining keys only make the order
// total; the interval is derived and never compared.
impl Ord for Meeting {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Meeting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Meeting {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Meeting {}

fn serialize_seconds<S: Serializer>(
    duration: &TimeDelta,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_seconds())
}
