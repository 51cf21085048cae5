//! Event Materializer: reshaped rows → zoned calendar events.

use super::time_range::{NormalizedTimeRange, normalize};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{EventRecord, RowOutcome, SkipReason, SkippedRow};
use crate::table::{DATE, DESCRIPTION, LOCATION, Row, TIME, Table, WORK_ACTIVITY};
use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct MaterializeConfig {
    pub tz: Tz,
    /// `strftime` patterns tried in order on `"{date} {time}"`.
    pub datetime_formats: Vec<String>,
}

impl MaterializeConfig {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            tz: cfg.tz()?,
            datetime_formats: cfg.datetime_formats.clone(),
        })
    }
}

/// First pattern that parses `text`.
pub fn parse_datetime(text: &str, formats: &[String]) -> Option<NaiveDateTime> {
    formats.iter().find_map(|fmt| parse_with(text, fmt))
}

/// Like `NaiveDateTime::parse_from_str`, but an hour without minutes
/// (`%I %p`) means minute 0 instead of a "not enough" error.
fn parse_with(text: &str, fmt: &str) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(fmt)).ok()?;
    if parsed.minute().is_none() {
        parsed.set_minute(0).ok()?;
    }
    parsed.to_naive_datetime_with_offset(0).ok()
}

/// Interpret a wall-clock value in `tz`.
///
/// Ambiguous (DST fall-back) times take the earlier instant. A time inside a
/// DST gap keeps the offset in force before the gap, so `2:30 AM` on a
/// spring-forward night in New York becomes `3:30 AM` EDT.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let before = tz.from_local_datetime(&(naive - Duration::days(1))).earliest()?;
            let offset = Duration::seconds(i64::from(before.offset().fix().local_minus_utc()));
            Some(tz.from_utc_datetime(&(naive - offset)))
        }
    }
}

/// Naive start/end with the overnight rule applied: an end at or before the
/// start is moved to the next day.
///
/// Like meridian inheritance, this also "repairs" ranges typed backwards
/// (`5 PM - 9 AM` becomes an overnight shift).
pub fn apply_rollover(start: NaiveDateTime, end: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    if end <= start {
        (start, end + Duration::hours(24))
    } else {
        (start, end)
    }
}

fn cell(table: &Table, row: &Row, label: &str) -> String {
    table.cell(row, label).unwrap_or("").trim().to_string()
}

/// Build the event for one reshaped row.
pub fn materialize_row(
    table: &Table,
    row: &Row,
    cfg: &MaterializeConfig,
) -> Result<EventRecord, SkipReason> {
    let range: NormalizedTimeRange = normalize(table.cell(row, TIME).unwrap_or(""));
    if !range.is_complete() {
        return Err(SkipReason::InvalidTimeRange);
    }

    let date = cell(table, row, DATE);
    if date.is_empty() {
        return Err(SkipReason::MissingDate);
    }

    let start_text = format!("{date} {}", range.start_time);
    let end_text = format!("{date} {}", range.end_time);

    let start = parse_datetime(&start_text, &cfg.datetime_formats)
        .ok_or_else(|| SkipReason::UnparseableStart(start_text.clone()))?;
    let end = parse_datetime(&end_text, &cfg.datetime_formats)
        .ok_or_else(|| SkipReason::UnparseableEnd(end_text.clone()))?;

    let (start, end) = apply_rollover(start, end);
    let wall_length = end - start;

    let start = localize(start, cfg.tz)
        .ok_or_else(|| SkipReason::NonexistentLocalTime(start_text.clone()))?;
    let mut end = localize(end, cfg.tz)
        .ok_or_else(|| SkipReason::NonexistentLocalTime(end.format("%m/%d/%Y %-I:%M %p").to_string()))?;

    // a start pushed out of a DST gap can pass the end (2:30 - 3:15 AM)
    if end <= start {
        end = start + wall_length;
    }

    Ok(EventRecord {
        name: cell(table, row, WORK_ACTIVITY),
        description: cell(table, row, DESCRIPTION),
        location: cell(table, row, LOCATION),
        start,
        end,
    })
}

/// One outcome per row, in table order.
pub fn materialize(table: &Table, cfg: &MaterializeConfig) -> Vec<RowOutcome> {
    table
        .rows
        .iter()
        .map(|row| match materialize_row(table, row, cfg) {
            Ok(ev) => RowOutcome::Event(ev),
            Err(reason) => RowOutcome::Skipped(SkippedRow {
                line: row.line,
                time_text: table.cell(row, TIME).unwrap_or("").to_string(),
                reason,
            }),
        })
        .collect()
}
