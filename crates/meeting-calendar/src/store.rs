//! The calendar store: meetings grouped by date, non-overlap enforcement, and
//! day-level free/busy queries.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::Result;
use crate::freebusy;
use crate::interval::Interval;
use crate::meeting::Meeting;
use crate::zone;

/// Subject given to the throwaway meeting built for overlap checks.
const CANDIDATE_SUBJECT: &str = "New Meeting";

/// All meetings of one calendar, in a single fixed timezone.
///
/// Meetings on the same date never overlap: [`CalendarStore::add_meeting`] is
/// the only way in, and it refuses any meeting that would.
#[derive(Debug, Clone)]
pub struct CalendarStore {
    timezone: Tz,
    meetings: BTreeMap<NaiveDate, BTreeSet<Meeting>>,
}

impl CalendarStore {
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            meetings: BTreeMap::new(),
        }
    }

    /// Build a store from an IANA zone name.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTimezone` if the name is unknown.
    pub fn from_timezone_name(name: &str) -> Result<Self> {
        zone::parse_timezone(name).map(Self::new)
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Add a meeting unless it overlaps one already on `date`.
    ///
    /// Returns `Ok(true)` when the meeting was stored and `Ok(false)` when it
    /// was rejected; a rejection leaves the store untouched.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDuration` if `duration` is negative.
    pub fn add_meeting(
        &mut self,
        subject: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
    ) -> Result<bool> {
        let candidate = Meeting::new(subject, date, start_time, duration, self.timezone)?;

        if self.overlaps_on(date, &candidate.interval()) {
            debug!(
                subject = candidate.subject(),
                %date,
                %start_time,
                "meeting rejected: overlaps an existing meeting"
            );
            return Ok(false);
        }

        // An identical zero-length meeting overlaps nothing but is still a duplicate.
        let inserted = self.meetings.entry(date).or_default().insert(candidate);
        debug!(%date, %start_time, inserted, "meeting stored");
        Ok(inserted)
    }

    /// Whether a meeting at `start_time` lasting `duration` would overlap any
    /// meeting already on `date`. Touching endpoints do not count.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDuration` if `duration` is negative.
    pub fn has_overlapping_meeting(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
    ) -> Result<bool> {
        let candidate = self.candidate(date, start_time, duration)?;
        Ok(self.overlaps_on(date, &candidate.interval()))
    }

    /// The meetings on `date` that a proposed meeting would collide with.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDuration` if `duration` is negative.
    pub fn conflicting_meetings(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
    ) -> Result<Vec<Meeting>> {
        let interval = self.candidate(date, start_time, duration)?.interval();
        Ok(self
            .day(date)
            .filter(|m| m.overlaps(&interval))
            .cloned()
            .collect())
    }

    /// Meetings on `date` in canonical order. Empty if there are none.
    pub fn meetings_for_date(&self, date: NaiveDate) -> Vec<Meeting> {
        self.day(date).cloned().collect()
    }

    /// Dates from `from` to `to` inclusive that have meetings, with their
    /// meetings, in chronological order.
    pub fn meetings_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<(NaiveDate, Vec<Meeting>)> {
        if from > to {
            return Vec::new();
        }
        self.meetings
            .range(from..=to)
            .map(|(date, set)| (*date, set.iter().cloned().collect()))
            .collect()
    }

    /// Every date with meetings, paired with its ordered meetings.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &BTreeSet<Meeting>)> + '_ {
        self.meetings.iter().map(|(date, set)| (*date, set))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.meetings.keys().copied()
    }

    /// Total number of stored meetings.
    pub fn len(&self) -> usize {
        self.meetings.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// The instants covered by `date` in this calendar's timezone.
    pub fn day_bounds(&self, date: NaiveDate) -> Result<Interval> {
        zone::day_bounds(self.timezone, date)
    }

    /// The unoccupied spans of `date`, from local midnight to the next local
    /// midnight, in chronological order. A day without meetings yields one
    /// slot covering the whole day; a fully booked day yields none.
    pub fn available_timeslots(&self, date: NaiveDate) -> Result<Vec<Interval>> {
        let window = self.day_bounds(date)?;
        Ok(freebusy::free_slots(self.day(date).map(Meeting::interval), window))
    }

    /// The first free slot on `date` lasting at least `min_duration`.
    pub fn first_available_slot(
        &self,
        date: NaiveDate,
        min_duration: TimeDelta,
    ) -> Result<Option<Interval>> {
        let window = self.day_bounds(date)?;
        Ok(freebusy::first_free_slot(
            self.day(date).map(Meeting::interval),
            window,
            min_duration,
        ))
    }

    fn candidate(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
        duration: TimeDelta,
    ) -> Result<Meeting> {
        Meeting::new(CANDIDATE_SUBJECT, date, start_time, duration, self.timezone)
    }

    fn day(&self, date: NaiveDate) -> impl Iterator<Item = &Meeting> + '_ {
        self.meetings.get(&date).into_iter().flatten()
    }

    fn overlaps_on(&self, date: NaiveDate, interval: &Interval) -> bool {
        self.day(date).any(|m| m.overlaps(interval))
    }
}
