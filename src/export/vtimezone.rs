//! VTIMEZONE components for the zones named in `TZID` parameters.
//!
//! Observances are listed one per offset change (no RRULE), over the years
//! the events span, starting with the offset in force on January 1st.

use crate::models::EventRecord;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

struct Observance {
    daylight: bool,
    /// Local time of the change, in the offset before it.
    start_local: NaiveDateTime,
    from: i32,
    to: i32,
}

fn offset_at(tz: Tz, utc: NaiveDateTime) -> (i32, bool) {
    let off = tz.offset_from_utc_datetime(&utc);
    (off.fix().local_minus_utc(), off.dst_offset() != Duration::zero())
}

fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn observances(tz: Tz, first_year: i32, last_year: i32) -> Vec<Observance> {
    let (Some(begin), Some(end)) = (year_start(first_year), year_start(last_year + 1)) else {
        return Vec::new();
    };

    let (mut current, dst) = offset_at(tz, begin);
    let mut out = vec![Observance {
        daylight: dst,
        start_local: begin,
        from: current,
        to: current,
    }];

    let mut day = begin;
    while day < end {
        let next = day + Duration::days(1);
        if offset_at(tz, next).0 != current {
            let mut t = day;
            while t < next {
                let step = t + Duration::minutes(15);
                let (off, dst) = offset_at(tz, step);
                if off != current {
                    out.push(Observance {
                        daylight: dst,
                        start_local: step + Duration::seconds(i64::from(current)),
                        from: current,
                        to: off,
                    });
                    current = off;
                    break;
                }
                t = step;
            }
        }
        day = next;
    }
    out
}

/// `+HHMM` / `-HHMM` (`±HHMMSS` when seconds are present).
fn offset_text(secs: i32) -> String {
    let sign = if secs < 0 { '-' } else { '+' };
    let a = secs.abs();
    let (h, m, s) = (a / 3600, a % 3600 / 60, a % 60);
    if s == 0 {
        format!("{sign}{h:02}{m:02}")
    } else {
        format!("{sign}{h:02}{m:02}{s:02}")
    }
}

/// Content lines of one VTIMEZONE for `tz` covering `first_year..=last_year`.
pub fn vtimezone_lines(tz: Tz, first_year: i32, last_year: i32) -> Vec<String> {
    let mut lines = vec!["BEGIN:VTIMEZONE".to_string(), format!("TZID:{}", tz.name())];

    for obs in observances(tz, first_year, last_year) {
        let kind = if obs.daylight { "DAYLIGHT" } else { "STANDARD" };
        lines.push(format!("BEGIN:{kind}"));
        lines.push(format!("DTSTART:{}", obs.start_local.format("%Y%m%dT%H%M%S")));
        lines.push(format!("TZOFFSETFROM:{}", offset_text(obs.from)));
        lines.push(format!("TZOFFSETTO:{}", offset_text(obs.to)));
        lines.push(format!("END:{kind}"));
    }

    lines.push("END:VTIMEZONE".to_string());
    lines
}

/// VTIMEZONE lines for every zone used by `events`, in first-seen order.
pub fn calendar_timezones(events: &[EventRecord]) -> Vec<String> {
    let mut zones: Vec<Tz> = Vec::new();
    for ev in events {
        let tz = ev.start.timezone();
        if !zones.contains(&tz) {
            zones.push(tz);
        }
    }

    let years = |tz: Tz| {
        let mut spans = events
            .iter()
            .filter(|ev| ev.start.timezone() == tz)
            .map(|ev| (ev.start.year(), ev.end.year()));
        let first = spans.next().unwrap_or_default();
        spans.fold(first, |(lo, hi), (s, e)| (lo.min(s), hi.max(e)))
    };

    zones
        .into_iter()
        .flat_map(|tz| {
            let (first, last) = years(tz);
            vtimezone_lines(tz, first, last)
        })
        .collect()
}
