//! Tests for the schedule parser.

use super::*;
use chrono::{NaiveTime, Weekday};

use crate::locale::Locale;

// ==================== Field-Level Parsing ====================

#[test]
fn test_parse_absent_is_no_data() {
    assert_eq!(parse_schedule(None), Err(ScheduleError::NoData));
}

#[test]
fn test_parse_blank_is_no_data() {
    assert_eq!(parse_schedule(Some("")), Err(ScheduleError::NoData));
    assert_eq!(parse_schedule(Some("   \n")), Err(ScheduleError::NoData));
}

#[test]
fn test_parse_bad_json_is_malformed() {
    let err = parse_schedule(Some("{bad json")).unwrap_err();
    assert!(err.is_malformed());
    assert_ne!(err, ScheduleError::NoData);
}

#[test]
fn test_parse_non_object_is_malformed() {
    for raw in ["[]", "42", "\"Monday\"", "null", "true"] {
        let err = parse_schedule(Some(raw)).unwrap_err();
        assert!(err.is_malformed(), "{raw} should be malformed");
    }
}

#[test]
fn test_parse_malformed_reason_describes_kind() {
    let err = parse_schedule(Some("[1, 2]")).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::malformed("expected an object, found an array")
    );
}

#[test]
fn test_parse_empty_object_is_closed_every_day() {
    let schedule = parse_schedule(Some("{}")).unwrap();
    assert!(schedule.is_always_closed());
    assert_eq!(schedule, WeeklySchedule::closed());
}

// ==================== Day Slots ====================

#[test]
fn test_parse_all_three_day_shapes() {
    let schedule = parse_schedule(Some(
        r#"{"Monday":"9am-12pm, 4pm-8pm","Saturday":"Open 24 hours","Sunday":"Closed"}"#,
    ))
    .unwrap();

    assert_eq!(
        schedule.day(Weekday::Mon),
        &DayHours::Ranges(vec![
            RangeSegment::Range(TimeRange::new(540, 720)),
            RangeSegment::Range(TimeRange::new(960, 1200)),
        ])
    );
    assert_eq!(schedule.day(Weekday::Sat), &DayHours::OpenAllDay);
    assert_eq!(schedule.day(Weekday::Sun), &DayHours::Closed);
}

#[test]
fn test_missing_days_are_closed() {
    let schedule = parse_schedule(Some(r#"{"Wednesday":"8am-10pm"}"#)).unwrap();

    for (day, hours) in schedule.days() {
        if day == Weekday::Wed {
            assert!(!hours.is_closed());
        } else {
            assert!(hours.is_closed(), "{day} should be closed");
        }
    }
}

#[test]
fn test_non_text_day_value_is_closed() {
    let schedule =
        parse_schedule(Some(r#"{"Monday":9,"Tuesday":null,"Friday":{"from":"9am"}}"#)).unwrap();

    assert!(schedule.is_always_closed());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let schedule = parse_schedule(Some(r#"{"Holidays":"Closed","Thursday":"7am-11pm"}"#)).unwrap();
    assert!(schedule.day(Weekday::Thu).is_open_at(7 * 60));
}

#[test]
fn test_day_names_case_insensitive() {
    let schedule = parse_schedule(Some(r#"{"monday":"9am-5pm"," FRIDAY ":"9am-5pm"}"#)).unwrap();
    assert!(schedule.day(Weekday::Mon).is_open_at(600));
    assert!(schedule.day(Weekday::Fri).is_open_at(600));
}

#[test]
fn test_exact_day_name_wins_over_variants() {
    let schedule = parse_schedule(Some(r#"{"Monday":"9am-5pm","monday":"Closed"}"#)).unwrap();
    assert!(schedule.day(Weekday::Mon).is_open_at(600));

    let schedule = parse_schedule(Some(r#"{"MONDAY":"Closed","Monday":"9am-5pm","Mon":"Closed"}"#)).unwrap();
    assert!(schedule.day(Weekday::Mon).is_open_at(600));
}

#[test]
fn test_variant_keys_fill_missing_days_only() {
    let schedule =
        parse_schedule(Some(r#"{"Tuesday":"Closed","tue":"9am-5pm","wed":"9am-5pm"}"#)).unwrap();

    assert!(schedule.day(Weekday::Tue).is_closed());
    assert!(schedule.day(Weekday::Wed).is_open_at(600));
}

#[test]
fn test_days_iterate_monday_first() {
    let schedule = WeeklySchedule::closed();
    let order: Vec<Weekday> = schedule.days().map(|(day, _)| day).collect();
    assert_eq!(order, WEEK.to_vec());
    assert_eq!(order.first(), Some(&Weekday::Mon));
    assert_eq!(order.last(), Some(&Weekday::Sun));
}

// ==================== Example Scenario ====================

#[test]
fn test_monday_split_shift_scenario() {
    let schedule = parse_schedule(Some(r#"{"Monday":"9am-12pm, 4pm-8pm"}"#)).unwrap();
    let monday = schedule.day(Weekday::Mon);

    assert!(monday.is_open_at(10 * 60 + 30));
    assert!(!monday.is_open_at(14 * 60));
    assert!(monday.is_open_at(16 * 60));
    assert!(monday.is_open_at(20 * 60));
    assert!(!monday.is_open_at(20 * 60 + 1));
}

// ==================== Display Round Trip ====================

#[test]
fn test_format_then_reparse_range_evaluates_open() {
    let hours = DayHours::parse("7:30am-9pm");
    let displayed = format_day_hours(&hours, Locale::Pt);
    assert_eq!(displayed, "07:30-21:00");

    let (start, end) = displayed.split_once('-').unwrap();
    let start = minute_of_day(&NaiveTime::parse_from_str(start, "%H:%M").unwrap());
    let end = minute_of_day(&NaiveTime::parse_from_str(end, "%H:%M").unwrap());
    let reparsed = TimeRange::new(start, end);

    assert_eq!(hours.ranges().next(), Some(reparsed));
    assert!(reparsed.contains(12 * 60));
    assert!(hours.is_open_at(12 * 60));
}
