//! Anchoring local wall-clock values to absolute instants.
//!
//! A calendar works in one fixed IANA zone. Local times that fall into a DST
//! gap are shifted forward by the length of the gap (02:30 on a spring-forward
//! night becomes 03:30). Local times repeated by a DST fold resolve to the
//! earlier of the two instants.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::{CalendarError, Result};
use crate::interval::Interval;

/// Parse an IANA zone name such as `"Europe/London"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| CalendarError::InvalidTimezone(name.to_string()))
}

/// Convert a local date and time-of-day in `tz` to a UTC instant.
pub fn to_instant(tz: Tz, date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>> {
    let local = date.and_time(time);
    let resolved = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => shift_past_gap(tz, local),
    };
    resolved.ok_or(CalendarError::OutOfRange { date, time })
}

/// Apply the offset in force before the transition, which lands the instant
/// after the gap.
fn shift_past_gap(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    let before = local.checked_sub_signed(TimeDelta::days(1))?;
    let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
    let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(Utc.from_utc_datetime(&utc))
}

/// The instants covered by `date` in `tz`: local midnight up to (excluding)
/// the next local midnight. Usually 24 hours, 23 or 25 on DST change days.
pub fn day_bounds(tz: Tz, date: NaiveDate) -> Result<Interval> {
    let next = date.succ_opt().ok_or(CalendarError::OutOfRange {
        date,
        time: NaiveTime::MIN,
    })?;
    Ok(Interval::new(
        to_instant(tz, date, NaiveTime::MIN)?,
        to_instant(tz, next, NaiveTime::MIN)?,
    ))
}
