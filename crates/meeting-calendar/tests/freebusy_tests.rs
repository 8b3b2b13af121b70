//! Tests for per-day free slot computation.

use chrono::{NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::{America::New_York, Asia::Tokyo, UTC};
use meeting_calendar::{CalendarStore, Interval};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

/// Helper to build a UTC interval on 2024-03-04 from hour/minute pairs.
/// `(24, 0)` means midnight of the following day.
fn utc_span(start: (u32, u32), end: (u32, u32)) -> Interval {
    let at = |(h, m): (u32, u32)| {
        if h == 24 {
            Utc.with_ymd_and_hms(2024, 3, 5, 0, m, 0).unwrap()
        } else {
            Utc.with_ymd_and_hms(2024, 3, 4, h, m, 0).unwrap()
        }
    };
    Interval::new(at(start), at(end))
}

#[test]
fn empty_day_is_one_full_slot() {
    let store = CalendarStore::new(UTC);

    let slots = store.available_timeslots(date(2024, 3, 4)).unwrap();

    assert_eq!(slots, vec![utc_span((0, 0), (24, 0))]);
    assert_eq!(slots[0].duration(), TimeDelta::hours(24));
}

#[test]
fn standup_planning_scenario_slots() {
    let mut store = CalendarStore::new(UTC);
    let day = date(2024, 3, 4);

    store.add_meeting("Standup", day, time(9, 0), TimeDelta::minutes(15)).unwrap();
    store.add_meeting("Planning", day, time(9, 10), TimeDelta::minutes(30)).unwrap();
    store.add_meeting("Planning", day, time(9, 15), TimeDelta::minutes(30)).unwrap();

    let slots = store.available_timeslots(day).unwrap();

    assert_eq!(
        slots,
        vec![utc_span((0, 0), (9, 0)), utc_span((9, 45), (24, 0))],
        "back-to-back meetings leave no zero-length gap between them"
    );
}

#[test]
fn meeting_at_midnight_leaves_no_leading_slot() {
    let mut store = CalendarStore::new(UTC);
    let day = date(2024, 3, 4);

    store.add_meeting("Night shift", day, time(0, 0), TimeDelta::hours(2)).unwrap();

    assert_eq!(
        store.available_timeslots(day).unwrap(),
        vec![utc_span((2, 0), (24, 0))]
    );
}

#[test]
fn fully_booked_day_has_no_slots() {
    let mut store = CalendarStore::new(UTC);
    let day = date(2024, 3, 4);

    store.add_meeting("Morning", day, time(0, 0), TimeDelta::hours(12)).unwrap();
    store.add_meeting("Evening", day, time(12, 0), TimeDelta::hours(12)).unwrap();

    assert!(store.available_timeslots(day).unwrap().is_empty());
}

#[test]
fn meeting_running_past_midnight_consumes_rest_of_day() {
    let mut store = CalendarStore::new(UTC);
    let day = date(2024, 3, 4);

    store.add_meeting("Release", day, time(23, 0), TimeDelta::hours(2)).unwrap();

    assert_eq!(
        store.available_timeslots(day).unwrap(),
        vec![utc_span((0, 0), (23, 0))]
    );
}

#[test]
fn zero_length_meeting_does_not_split_slot() {
    let mut store = CalendarStore::new(UTC);
    let day = date(2024, 3, 4);

    store.add_meeting("Reminder", day, time(12, 0), TimeDelta::zero()).unwrap();

    assert_eq!(
        store.available_timeslots(day).unwrap(),
        vec![utc_span((0, 0), (24, 0))]
    );
}

#[test]
fn several_meetings_produce_gaps_between_them() {
    let mut store = CalendarStore::new(UTC);
    let day = date(2024, 3, 4);

    store.add_meeting("C", day, time(15, 0), TimeDelta::minutes(60)).unwrap();
    store.add_meeting("A", day, time(9, 0), TimeDelta::minutes(30)).unwrap();
    store.add_meeting("B", day, time(11, 0), TimeDelta::minutes(90)).unwrap();

    assert_eq!(
        store.available_timeslots(day).unwrap(),
        vec![
            utc_span((0, 0), (9, 0)),
            utc_span((9, 30), (11, 0)),
            utc_span((12, 30), (15, 0)),
            utc_span((16, 0), (24, 0)),
        ]
    );
}

#[test]
fn day_follows_calendar_timezone() {
    let store = CalendarStore::new(Tokyo);

    let slots = store.available_timeslots(date(2024, 3, 4)).unwrap();

    // Tokyo midnight is 15:00 UTC the previous day.
    assert_eq!(
        slots,
        vec![Interval::new(
            Utc.with_ymd_and_hms(2024, 3, 3, 15, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 4, 15, 0, 0).unwrap(),
        )]
    );
}

#[test]
fn spring_forward_day_is_23_hours() {
    let store = CalendarStore::new(New_York);

    let slots = store.available_timeslots(date(2024, 3, 10)).unwrap();

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].duration(), TimeDelta::hours(23));
}

#[test]
fn meetings_around_dst_gap_keep_real_gaps() {
    let mut store = CalendarStore::new(New_York);
    let day = date(2024, 3, 10);

    // 01:00 EST is 06:00 UTC; 03:00 EDT is 07:00 UTC: the wall-clock hour
    // 02:00-03:00 does not exist, so these two are back to back.
    store.add_meeting("Before", day, time(1, 0), TimeDelta::hours(1)).unwrap();
    store.add_meeting("After", day, time(3, 0), TimeDelta::hours(1)).unwrap();

    let slots = store.available_timeslots(day).unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].end, Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap());
    assert_eq!(slots[1].start, Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap());
}

#[test]
fn first_available_slot_skips_short_gaps() {
    let mut store = CalendarStore::new(UTC);
    let day = date(2024, 3, 4);

    store.add_meeting("Early", day, time(0, 10), TimeDelta::minutes(50)).unwrap();

    let slot = store
        .first_available_slot(day, TimeDelta::minutes(30))
        .unwrap();

    assert_eq!(slot, Some(utc_span((1, 0), (24, 0))));
}
