// src/export/model.rs

use crate::models::EventRecord;
use serde::Serialize;

/// Struttura “piatta” per export degli eventi (CSV / JSON).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
    pub time_zone: String,
}

impl From<&EventRecord> for EventExport {
    fn from(ev: &EventRecord) -> Self {
        Self {
            name: ev.name.clone(),
            description: ev.description.clone(),
            location: ev.location.clone(),
            start: ev.start.to_rfc3339(),
            end: ev.end.to_rfc3339(),
            duration_minutes: ev.duration_minutes(),
            time_zone: ev.start.timezone().name().to_string(),
        }
    }
}

pub(crate) fn events_to_export(events: &[EventRecord]) -> Vec<EventExport> {
    events.iter().map(EventExport::from).collect()
}
