//! Week and month groupings over a [`CalendarStore`].
//!
//! Views are snapshots: meetings are copied out when the view is built, and
//! later changes to the store do not show up in an existing view.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{CalendarError, Result};
use crate::meeting::Meeting;
use crate::store::CalendarStore;

/// One date and its meetings in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub meetings: Vec<Meeting>,
}

impl DaySchedule {
    fn collect(store: &CalendarStore, date: NaiveDate) -> Self {
        Self {
            date,
            meetings: store.meetings_for_date(date),
        }
    }

    pub fn is_free(&self) -> bool {
        self.meetings.is_empty()
    }
}

/// Monday through Sunday of the week containing a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullWeek {
    pub days: Vec<DaySchedule>,
}

impl FullWeek {
    pub fn of(store: &CalendarStore, date: NaiveDate) -> Self {
        Self {
            days: week_days(store, date, 7),
        }
    }

    pub fn meeting_count(&self) -> usize {
        self.days.iter().map(|d| d.meetings.len()).sum()
    }
}

/// Monday through Friday of the week containing a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkWeek {
    pub days: Vec<DaySchedule>,
}

impl WorkWeek {
    pub fn of(store: &CalendarStore, date: NaiveDate) -> Self {
        Self {
            days: week_days(store, date, 5),
        }
    }

    pub fn meeting_count(&self) -> usize {
        self.days.iter().map(|d| d.meetings.len()).sum()
    }
}

/// Every date of a month, grouped into rows that start on Monday.
///
/// The first and last rows are short when the month does not start on a
/// Monday or end on a Sunday; no dates from neighbouring months are included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullMonth {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DaySchedule>>,
}

impl FullMonth {
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if `year`/`month` is not a real month.
    pub fn of(store: &CalendarStore, year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidDate { year, month })?;

        let mut weeks: Vec<Vec<DaySchedule>> = Vec::new();
        let mut row = Vec::new();
        for date in first.iter_days().take_while(|d| d.month() == month) {
            if date.weekday() == Weekday::Mon && !row.is_empty() {
                weeks.push(std::mem::take(&mut row));
            }
            row.push(DaySchedule::collect(store, date));
        }
        if !row.is_empty() {
            weeks.push(row);
        }

        Ok(Self { year, month, weeks })
    }

    pub fn days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.weeks.iter().flatten()
    }

    pub fn meeting_count(&self) -> usize {
        self.days().map(|d| d.meetings.len()).sum()
    }
}

fn week_days(store: &CalendarStore, date: NaiveDate, len: usize) -> Vec<DaySchedule> {
    let monday = date.week(Weekday::Mon).first_day();
    monday
        .iter_days()
        .take(len)
        .map(|d| DaySchedule::collect(store, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono_tz::UTC;

    use super::*;

    #[test]
    fn month_rows_start_on_monday() {
        let store = CalendarStore::new(UTC);
        // March 2024 starts on a Friday and ends on a Sunday.
        let month = FullMonth::of(&store, 2024, 3).unwrap();

        assert_eq!(month.days().count(), 31);
        assert_eq!(month.weeks.len(), 5);
        assert_eq!(month.weeks[0].len(), 3);
        assert!(month.weeks[1..]
            .iter()
            .all(|row| row[0].date.weekday() == Weekday::Mon));
    }

    #[test]
    fn impossible_month_rejected() {
        let store = CalendarStore::new(UTC);
        assert_eq!(
            FullMonth::of(&store, 2024, 13),
            Err(CalendarError::InvalidDate {
                year: 2024,
                month: 13
            })
        );
    }
}
