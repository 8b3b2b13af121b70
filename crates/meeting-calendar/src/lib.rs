//! # meeting-calendar
//!
//! Single-timezone meeting calendar core: stores timed meetings, rejects
//! conflicting bookings, and computes the free time left in a day.
//!
//! Every calendar is bound to one IANA timezone (via `chrono-tz`) at
//! construction. Meetings are anchored to absolute instants in that zone, so
//! overlap checks and free-slot gaps stay correct across DST changes.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime, TimeDelta};
//! use meeting_calendar::CalendarStore;
//!
//! let mut calendar = CalendarStore::new(chrono_tz::UTC);
//! let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//!
//! assert!(calendar.add_meeting("Standup", date, nine, TimeDelta::minutes(15)).unwrap());
//! // Same slot again: rejected, not an error.
//! assert!(!calendar.add_meeting("Standup", date, nine, TimeDelta::minutes(15)).unwrap());
//!
//! let free = calendar.available_timeslots(date).unwrap();
//! assert_eq!(free.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`store`] — `CalendarStore`: add, overlap checks, per-date queries, free slots
//! - [`meeting`] — `Meeting` value with its cached absolute interval
//! - [`interval`] — half-open `[start, end)` instant spans and overlap
//! - [`freebusy`] — free-slot sweep over busy intervals
//! - [`zone`] — local date/time → instant resolution, DST gap and fold policy
//! - [`shared`] — mutex-guarded store for concurrent callers
//! - [`views`] — week and month groupings
//! - [`error`] — Error types

pub mod error;
pub mod freebusy;
pub mod interval;
pub mod meeting;
pub mod shared;
pub mod store;
pub mod views;
pub mod zone;

pub use error::CalendarError;
pub use interval::Interval;
pub use meeting::Meeting;
pub use shared::SharedCalendar;
pub use store::CalendarStore;
pub use views::{DaySchedule, FullMonth, FullWeek, WorkWeek};
