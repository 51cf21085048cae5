//! ICS document generation for converted schedule events.

use crate::export::vtimezone::calendar_timezones;
use crate::models::EventRecord;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike, Property};

/// Calendar-level metadata.
#[derive(Debug, Clone)]
pub struct CalendarMeta {
    pub name: String,
    pub product_id: String,
}

impl Default for CalendarMeta {
    fn default() -> Self {
        Self {
            name: "Schedule".to_string(),
            product_id: "-//sched2ics//EN".to_string(),
        }
    }
}

/// Render all events as one VCALENDAR document.
pub fn render_calendar(events: &[EventRecord], meta: &CalendarMeta) -> String {
    render_calendar_at(events, meta, Utc::now())
}

/// Same as `render_calendar` with a fixed DTSTAMP.
pub fn render_calendar_at(
    events: &[EventRecord],
    meta: &CalendarMeta,
    stamp: DateTime<Utc>,
) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", &meta.name));

    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();

    for (index, ev) in events.iter().enumerate() {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event_uid(ev, index));
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.summary(&ev.name);

        add_zoned_datetime(&mut ics_event, "DTSTART", &ev.start);
        add_zoned_datetime(&mut ics_event, "DTEND", &ev.end);

        if !ev.description.is_empty() {
            ics_event.description(&ev.description);
        }
        if !ev.location.is_empty() {
            ics_event.location(&ev.location);
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();
    finish(&cal.to_string(), &meta.product_id, &calendar_timezones(events))
}

/// Datetime with TZID parameter, local wall-clock value.
fn add_zoned_datetime(ics_event: &mut icalendar::Event, name: &str, dt: &DateTime<Tz>) {
    let mut prop = Property::new(name, dt.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", dt.timezone().name());
    ics_event.append_property(prop);
}

/// Stable UID: start time, row position and a slug of the name.
pub fn event_uid(ev: &EventRecord, index: usize) -> String {
    let slug = slugify(&ev.name);
    let slug = if slug.is_empty() { "event".to_string() } else { slug };
    format!(
        "{}-{}-{}@sched2ics",
        ev.start.format("%Y%m%dT%H%M"),
        index,
        slug
    )
}

/// Lowercase, alphanumerics only, words joined by `-`, at most 40 chars.
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(40)
        .collect()
}

/// The icalendar crate writes its own PRODID and has no VTIMEZONE component:
/// swap in our PRODID and put the zone definitions before the first event.
fn finish(ics: &str, product_id: &str, timezones: &[String]) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut zones_written = timezones.is_empty();

    for line in ics.lines() {
        if !zones_written && (line == "BEGIN:VEVENT" || line == "END:VCALENDAR") {
            for tz_line in timezones {
                result.push_str(tz_line);
                result.push_str("\r\n");
            }
            zones_written = true;
        }

        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(product_id);
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }

    result
}
