// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::events_to_export;
use crate::export::notify_export_success;
use crate::models::EventRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(events: &[EventRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&events_to_export(events))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, events.len());
    Ok(())
}

/// Export CSV (header incluso grazie a serde).
pub(crate) fn export_csv(events: &[EventRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    let rows = events_to_export(events);
    if rows.is_empty() {
        wtr.write_record([
            "name",
            "description",
            "location",
            "start",
            "end",
            "duration_minutes",
            "time_zone",
        ])?;
    }
    for item in &rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, events.len());
    Ok(())
}
