//! Thread-safe handle to a [`CalendarStore`].
//!
//! One mutex guards the whole store, so the overlap check and the insert of
//! `add_meeting` happen as a single step and readers never see a half-applied
//! add.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use chrono_tz::Tz;
use parking_lot::Mutex;

use crate::error::Result;
use crate::interval::Interval;
use crate::meeting::Meeting;
use crate::store::CalendarStore;

#[derive(Debug, Clone)]
pub struct SharedCalendar {
    inner: Arc<Mutex<CalendarStore>>,
}

impl SharedCalendar {
    pub fn new(timezone: Tz) -> Self {
        Self::from_store(CalendarStore::new(timezone))
    }

    pub fn from_store(store: CalendarStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn timezone(&self) -> Tz {
        self.inner.lock().timezone()
    }

    /// See [`CalendarStore::add_meeting`].
    pub fn add_meeting(
        &self,
        subject: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
    ) -> Result<bool> {
        self.inner
            .lock()
            .add_meeting(subject, date, start_time, duration)
    }

    pub fn has_overlapping_meeting(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
    ) -> Result<bool> {
        self.inner
            .lock()
            .has_overlapping_meeting(date, start_time, duration)
    }

    pub fn meetings_for_date(&self, date: NaiveDate) -> Vec<Meeting> {
        self.inner.lock().meetings_for_date(date)
    }

    pub fn available_timeslots(&self, date: NaiveDate) -> Result<Vec<Interval>> {
        self.inner.lock().available_timeslots(date)
    }

    /// Run `f` against the store with the lock held.
    pub fn with_store<R>(&self, f: impl FnOnce(&CalendarStore) -> R) -> R {
        f(&*self.inner.lock())
    }
}
