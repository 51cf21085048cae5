// src/export/mod.rs

mod fs_utils;
pub mod ics;
mod json_csv;
pub mod logic;
mod model;
pub mod vtimezone;

pub use fs_utils::{ensure_writable, output_path_for};
pub use logic::ExportLogic;
pub use model::EventExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path, count: usize) {
    success(format!(
        "{label} export completed: {} ({count} events)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Ics,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "ics",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// File extension used when the output path is derived from the input.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}
