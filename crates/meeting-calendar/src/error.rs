//! Error types for meeting-calendar operations.
//!
//! Overlap rejection is not represented here: `add_meeting` reports it as
//! `Ok(false)`.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A meeting was constructed with a negative duration.
    #[error("Invalid duration: {0} (meeting duration must not be negative)")]
    InvalidDuration(TimeDelta),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A year/month pair that does not name a real month.
    #[error("Invalid date: {year}-{month:02}")]
    InvalidDate { year: i32, month: u32 },

    /// The local date and time cannot be anchored to an instant.
    #[error("Date/time out of range: {date} {time}")]
    OutOfRange { date: NaiveDate, time: NaiveTime },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
