//! Column Reshaper: raw export columns → canonical schedule schema.
//!
//! Steps run in a fixed order because each one looks at the columns left by
//! the previous one: positional drop, positional rename, the two location
//! merges, `Date` forward-fill, empty-`Time` filter.

use super::column::resolve_indices;
use super::{DATE, DESCRIPTION, LOCATION, MEETING_LOCATION, TIME, Table, WORK_ACTIVITY, WORK_LOCATION};
use crate::config::Config;
use crate::errors::AppResult;

#[derive(Debug, Clone)]
pub struct ReshapeConfig {
    /// Column letters dropped against the live header.
    pub drop_columns: Vec<String>,
    /// Position (after the drop) of the column renamed to `Description`.
    pub description_column_index: usize,
}

impl Default for ReshapeConfig {
    fn default() -> Self {
        ReshapeConfig::from(&Config::default())
    }
}

impl From<&Config> for ReshapeConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            drop_columns: cfg.drop_columns.clone(),
            description_column_index: cfg.description_column_index,
        }
    }
}

pub fn reshape(mut table: Table, cfg: &ReshapeConfig) -> AppResult<Table> {
    drop_positional(&mut table, &cfg.drop_columns)?;
    rename_description(&mut table, cfg.description_column_index);
    merge_activity(&mut table);
    merge_location(&mut table);
    forward_fill_date(&mut table);
    filter_empty_time(&mut table);
    Ok(table)
}

pub fn drop_positional(table: &mut Table, letters: &[String]) -> AppResult<()> {
    let indices = resolve_indices(letters, table.headers.len())?;
    table.drop_columns(&indices);
    Ok(())
}

pub fn rename_description(table: &mut Table, index: usize) {
    if table.headers.len() > index {
        table.headers[index] = DESCRIPTION.to_string();
    }
}

fn joined(a: &str, b: &str) -> String {
    format!("{} {}", a.trim(), b.trim()).trim().to_string()
}

/// `Work Activity` := `Work Activity` + " " + `Work Location`.
pub fn merge_activity(table: &mut Table) {
    let (Some(wa), Some(wl)) = (table.column(WORK_ACTIVITY), table.column(WORK_LOCATION)) else {
        return;
    };

    for row in &mut table.rows {
        row.cells[wa] = joined(&row.cells[wa], &row.cells[wl]);
    }
}

/// `Location` := `Work Location` + " " + `Meeting Location`, then both
/// sources are removed.
pub fn merge_location(table: &mut Table) {
    let (Some(wl), Some(ml)) = (table.column(WORK_LOCATION), table.column(MEETING_LOCATION))
    else {
        return;
    };

    match table.column(LOCATION) {
        Some(loc) => {
            for row in &mut table.rows {
                row.cells[loc] = joined(&row.cells[wl], &row.cells[ml]);
            }
        }
        None => table.push_column(LOCATION, |row| joined(&row.cells[wl], &row.cells[ml])),
    }
    table.drop_columns(&[wl, ml]);
}

pub fn forward_fill_date(table: &mut Table) {
    let Some(date) = table.column(DATE) else {
        return;
    };

    let mut last: Option<String> = None;
    for row in &mut table.rows {
        let cell = &mut row.cells[date];
        if cell.trim().is_empty() {
            if let Some(prev) = &last {
                *cell = prev.clone();
            }
        } else {
            last = Some(cell.clone());
        }
    }
}

pub fn filter_empty_time(table: &mut Table) {
    let Some(time) = table.column(TIME) else {
        return;
    };

    table.rows.retain(|row| !row.cells[time].trim().is_empty());
}
