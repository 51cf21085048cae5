use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// One calendar event built from a schedule row.
/// `end` is always strictly after `start` and both share the configured zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl EventRecord {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M").to_string()
    }
}
