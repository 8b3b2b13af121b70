//! Compute free time slots from busy intervals.
//!
//! Sorts busy intervals by start instant, then sweeps a cursor across the
//! window and emits every non-empty gap in front of it.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::warn;

use crate::interval::Interval;

/// Find the free slots of `window` not covered by any of `busy`.
///
/// Empty busy intervals are ignored, so a zero-length meeting never splits a
/// gap. Zero-length gaps are never emitted. Returns slots sorted by start.
pub fn free_slots<I>(busy: I, window: Interval) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut busy: Vec<Interval> = busy.into_iter().filter(|b| !b.is_empty()).collect();
    busy.sort_by_key(|b| (b.start, b.end));

    let mut slots = Vec::new();
    let mut cursor = window.start;

    for period in &busy {
        if period.start > cursor {
            push_slot(&mut slots, cursor, period.start.min(window.end));
        } else if period.start < cursor && period.start >= window.start {
            // Stored meetings never overlap, so this only fires on bad input.
            warn!(
                busy_start = %period.start,
                cursor = %cursor,
                "busy periods overlap; cursor held"
            );
        }
        cursor = cursor.max(period.end);
    }

    push_slot(&mut slots, cursor, window.end);
    slots
}

fn push_slot(slots: &mut Vec<Interval>, start: DateTime<Utc>, end: DateTime<Utc>) {
    if start < end {
        slots.push(Interval::new(start, end));
    }
}

/// Find the first free slot of at least `min_duration` within the window.
pub fn first_free_slot<I>(busy: I, window: Interval, min_duration: TimeDelta) -> Option<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    free_slots(busy, window)
        .into_iter()
        .find(|slot| slot.duration() >= min_duration)
}
