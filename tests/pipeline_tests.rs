mod common;
use chrono::{Duration, TimeZone};
use chrono_tz::America::New_York;
use chrono_tz::Europe::Rome;
use common::schedule_csv;
use sched2ics::config::Config;
use sched2ics::core::materialize::{apply_rollover, localize, parse_datetime};
use sched2ics::errors::AppError;
use sched2ics::table::InputKind;
use sched2ics::{Pipeline, SkipReason};

fn convert(entries: &[common::Entry]) -> sched2ics::ConversionReport {
    let pipeline = Pipeline::new(&Config::default()).expect("pipeline");
    pipeline
        .convert_bytes(schedule_csv(entries).as_bytes(), InputKind::Csv)
        .expect("convert")
}

#[test]
fn test_end_to_end_staff_meeting() {
    let report = convert(&[["Staff Mtg", "Rm 2", "", "3/5/2025", "10-11 AM", ""]]);

    assert_eq!(report.events.len(), 1);
    assert!(report.skipped.is_empty());

    let ev = &report.events[0];
    assert_eq!(ev.name, "Staff Mtg Rm 2");
    assert_eq!(ev.location, "Rm 2");
    assert_eq!(ev.description, "");
    assert_eq!(
        ev.start,
        New_York.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap()
    );
    assert_eq!(ev.end, New_York.with_ymd_and_hms(2025, 3, 5, 11, 0, 0).unwrap());
}

#[test]
fn test_overnight_shift_rolls_to_next_day() {
    let report = convert(&[["Night Shift", "Ward 3", "", "3/5/2025", "11:00 PM - 2:00 AM", ""]]);

    let ev = &report.events[0];
    assert_eq!(
        ev.start,
        New_York.with_ymd_and_hms(2025, 3, 5, 23, 0, 0).unwrap()
    );
    assert_eq!(ev.end, New_York.with_ymd_and_hms(2025, 3, 6, 2, 0, 0).unwrap());

    let midnight = New_York.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();
    assert_eq!(ev.end - midnight, Duration::hours(26));
    assert_eq!(ev.duration_minutes(), 180);
}

#[test]
fn test_equal_start_and_end_becomes_a_full_day() {
    let report = convert(&[["Oncall", "", "", "4/1/2025", "8 AM - 8 AM", ""]]);
    assert_eq!(report.events[0].duration_minutes(), 24 * 60);
}

#[test]
fn test_inherited_meridian_makes_evening_range() {
    // "10 - 5 PM" is read as 10 PM to 5 PM, rolled over to the next day
    let report = convert(&[["Ambiguous", "", "", "4/1/2025", "10 - 5 PM", ""]]);
    let ev = &report.events[0];
    assert_eq!(
        ev.start,
        New_York.with_ymd_and_hms(2025, 4, 1, 22, 0, 0).unwrap()
    );
    assert_eq!(ev.end, New_York.with_ymd_and_hms(2025, 4, 2, 17, 0, 0).unwrap());
}

#[test]
fn test_unrecognized_time_is_skipped_not_fatal() {
    let report = convert(&[
        ["Mystery", "", "", "3/5/2025", "sometime", ""],
        ["Real", "", "", "", "1-2 PM", ""],
    ]);

    assert_eq!(report.rows_considered, 2);
    assert_eq!(report.events.len(), 1);
    assert_eq!(report.events[0].name, "Real");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::InvalidTimeRange);
    assert_eq!(report.skipped[0].time_text, "sometime");
    assert_eq!(report.skipped[0].line, 5);
}

#[test]
fn test_row_without_any_date_is_skipped() {
    let report = convert(&[
        ["Early", "", "", "", "9-10 AM", ""],
        ["Later", "", "", "3/6/2025", "9-10 AM", ""],
    ]);
    assert_eq!(report.events.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::MissingDate);
}

#[test]
fn test_unparseable_date_is_skipped() {
    let report = convert(&[["Bad", "", "", "2025-03-05", "9-10 AM", ""]]);
    assert!(report.is_empty());
    assert!(matches!(
        report.skipped[0].reason,
        SkipReason::UnparseableStart(_)
    ));
}

#[test]
fn test_hour_out_of_range_is_skipped() {
    let report = convert(&[["Bad", "", "", "3/5/2025", "9 AM - 13 PM", ""]]);
    assert!(matches!(
        report.skipped[0].reason,
        SkipReason::UnparseableEnd(_)
    ));
}

#[test]
fn test_events_never_exceed_rows_with_time() {
    let report = convert(&[
        ["A", "", "", "3/5/2025", "9-10 AM", ""],
        ["B", "", "", "", "", ""],
        ["C", "", "", "", "noon", ""],
        ["D", "", "", "", "1:30-2:45 PM", ""],
        ["E", "", "", "", "  ", ""],
    ]);

    assert_eq!(report.rows_considered, 3);
    assert!(report.events.len() <= report.rows_considered);
    assert_eq!(report.events.len() + report.skipped.len(), 3);
    for ev in &report.events {
        assert!(ev.end > ev.start);
    }
}

#[test]
fn test_description_and_location_columns() {
    let report = convert(&[["Review", "HQ", "Room 5", "3/7/2025", "2-3 PM", "bring slides"]]);
    let ev = &report.events[0];
    assert_eq!(ev.name, "Review HQ");
    assert_eq!(ev.description, "bring slides");
    assert_eq!(ev.location, "HQ Room 5");
}

#[test]
fn test_configured_time_zone_is_attached() {
    let cfg = Config {
        time_zone: "Europe/Rome".to_string(),
        ..Config::default()
    };
    let pipeline = Pipeline::new(&cfg).expect("pipeline");
    let csv = schedule_csv(&[["Call", "", "", "6/2/2025", "9-10 AM", ""]]);
    let report = pipeline
        .convert_bytes(csv.as_bytes(), InputKind::Csv)
        .expect("convert");

    assert_eq!(
        report.events[0].start,
        Rome.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()
    );
}

#[test]
fn test_invalid_time_zone_is_rejected() {
    let cfg = Config {
        time_zone: "Mars/Olympus".to_string(),
        ..Config::default()
    };
    let err = Pipeline::new(&cfg).unwrap_err();
    assert!(matches!(err, AppError::InvalidTimeZone(_)), "got {err:?}");
}

#[test]
fn test_malformed_table_is_fatal() {
    let pipeline = Pipeline::new(&Config::default()).expect("pipeline");
    let err = pipeline
        .convert_bytes(&[0u8, 159, 146, 150], InputKind::Csv)
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedTable(_)));
}

#[test]
fn test_empty_schedule_is_not_an_error() {
    let report = convert(&[]);
    assert!(report.is_empty());
    assert_eq!(report.rows_considered, 0);
}

#[test]
fn test_skip_counts_group_reasons() {
    let report = convert(&[
        ["A", "", "", "3/5/2025", "tbd", ""],
        ["B", "", "", "", "later", ""],
        ["C", "", "", "", "2-3 PM", ""],
    ]);
    assert_eq!(
        report.skip_counts(),
        vec![("invalid time range".to_string(), 2)]
    );
}

// ---------------------------
// Materializer helpers
// ---------------------------

#[test]
fn test_parse_datetime_tries_patterns_in_order() {
    let formats = Config::default().datetime_formats;

    let hour_only = parse_datetime("3/5/2025 10 AM", &formats).expect("hour only");
    assert_eq!(hour_only.to_string(), "2025-03-05 10:00:00");

    let with_minutes = parse_datetime("03/05/2025 12:30 PM", &formats).expect("minutes");
    assert_eq!(with_minutes.to_string(), "2025-03-05 12:30:00");

    let midnight = parse_datetime("3/5/2025 12 AM", &formats).expect("midnight");
    assert_eq!(midnight.to_string(), "2025-03-05 00:00:00");

    assert!(parse_datetime("3/5/2025 ", &formats).is_none());
    assert!(parse_datetime("March 5 10 AM", &formats).is_none());
}

#[test]
fn test_rollover_only_when_end_not_after_start() {
    let formats = Config::default().datetime_formats;
    let s = parse_datetime("3/5/2025 9 AM", &formats).unwrap();
    let e = parse_datetime("3/5/2025 10 AM", &formats).unwrap();

    assert_eq!(apply_rollover(s, e), (s, e));
    assert_eq!(apply_rollover(e, s), (e, s + Duration::hours(24)));
}

#[test]
fn test_localize_dst_edges() {
    let formats = Config::default().datetime_formats;

    // spring forward: 2:30 AM does not exist in New York on 3/9/2025 and is
    // read with the EST offset, landing on 3:30 AM EDT
    let gap = parse_datetime("3/9/2025 2:30 AM", &formats).unwrap();
    let dt = localize(gap, New_York).expect("gap resolves");
    assert_eq!(dt.to_rfc3339(), "2025-03-09T03:30:00-04:00");

    // fall back: 1:30 AM happens twice on 11/2/2025, the first one is used
    let twice = parse_datetime("11/2/2025 1:30 AM", &formats).unwrap();
    let dt = localize(twice, New_York).expect("ambiguous resolves");
    assert_eq!(dt.to_rfc3339(), "2025-11-02T01:30:00-04:00");
}

#[test]
fn test_spring_forward_night_keeps_events() {
    let report = convert(&[
        ["Night Shift", "", "", "3/8/2025", "11 PM - 2:30 AM", ""],
        ["Early", "", "", "3/9/2025", "2:30 - 4 AM", ""],
        ["Short", "", "", "", "2:30 - 3:15 AM", ""],
    ]);

    assert!(report.skipped.is_empty(), "skipped: {:?}", report.skipped);
    assert_eq!(report.events.len(), 3);

    let night = &report.events[0];
    assert_eq!(night.start.to_rfc3339(), "2025-03-08T23:00:00-05:00");
    assert_eq!(night.end.to_rfc3339(), "2025-03-09T03:30:00-04:00");

    let early = &report.events[1];
    assert_eq!(early.start.to_rfc3339(), "2025-03-09T03:30:00-04:00");
    assert_eq!(early.end.to_rfc3339(), "2025-03-09T04:00:00-04:00");

    // start shifted past the end: the 45 minute length is kept
    let short = &report.events[2];
    assert_eq!(short.start.to_rfc3339(), "2025-03-09T03:30:00-04:00");
    assert_eq!(short.duration_minutes(), 45);

    for ev in &report.events {
        assert!(ev.end > ev.start);
    }
}

#[test]
fn test_parse_datetime_keeps_parsed_minutes() {
    let formats = vec!["%m/%d/%Y %I:%M %p".to_string()];
    let dt = parse_datetime("3/5/2025 9:45 PM", &formats).expect("minutes");
    assert_eq!(dt.to_string(), "2025-03-05 21:45:00");
}
