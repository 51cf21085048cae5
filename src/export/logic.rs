// src/export/logic.rs

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::ics::{CalendarMeta, render_calendar};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::notify_export_success;
use crate::models::EventRecord;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `events` to `path` in the given format.
    ///
    /// An empty event list still produces a valid (empty) document.
    pub fn export(
        events: &[EventRecord],
        format: ExportFormat,
        path: &Path,
        cfg: &Config,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Ics => export_ics(events, path, cfg)?,
            ExportFormat::Csv => export_csv(events, path)?,
            ExportFormat::Json => export_json(events, path)?,
        }

        Ok(())
    }
}

fn export_ics(events: &[EventRecord], path: &Path, cfg: &Config) -> AppResult<()> {
    info(format!("Exporting to ICS: {}", path.display()));

    let meta = CalendarMeta {
        name: cfg.calendar_name.clone(),
        product_id: cfg.product_id.clone(),
    };
    fs::write(path, render_calendar(events, &meta))?;

    notify_export_success("ICS", path, events.len());
    Ok(())
}
