//! Table Loader: raw CSV bytes or a workbook's first sheet → `Table`.

use super::Table;
use crate::errors::{AppError, AppResult};
use calamine::{Data, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Csv,
    Workbook,
}

impl InputKind {
    /// Guess the input kind from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => Ok(InputKind::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputKind::Workbook),
            _ => Err(AppError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// Load a table from a file on disk.
pub fn load_path(path: &Path, header_rows_to_skip: usize) -> AppResult<Table> {
    match InputKind::from_path(path)? {
        InputKind::Csv => {
            let bytes = std::fs::read(path)?;
            load(&bytes, InputKind::Csv, header_rows_to_skip)
        }
        InputKind::Workbook => {
            let mut workbook = open_workbook_auto(path).map_err(|e| {
                AppError::MalformedTable(format!("cannot open {}: {e}", path.display()))
            })?;
            let grid = first_sheet_grid(&mut workbook)?;
            build_table(grid, header_rows_to_skip)
        }
    }
}

/// Load a table from raw bytes.
pub fn load(bytes: &[u8], kind: InputKind, header_rows_to_skip: usize) -> AppResult<Table> {
    let grid = match kind {
        InputKind::Csv => csv_grid(bytes)?,
        InputKind::Workbook => {
            let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
                .map_err(|e| AppError::MalformedTable(format!("cannot open workbook: {e}")))?;
            first_sheet_grid(&mut workbook)?
        }
    };
    build_table(grid, header_rows_to_skip)
}

/// Raw rows with their 1-based source line.
type Grid = Vec<(usize, Vec<String>)>;

fn csv_grid(bytes: &[u8]) -> AppResult<Grid> {
    if bytes.contains(&0) {
        return Err(AppError::MalformedTable(
            "input contains NUL bytes, not a text table".into(),
        ));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut grid = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| AppError::MalformedTable(e.to_string()))?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        grid.push((line, record.iter().map(str::to_string).collect()));
    }
    Ok(grid)
}

fn first_sheet_grid<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> AppResult<Grid> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::MalformedTable("workbook has no sheets".into()))?
        .map_err(|e| AppError::MalformedTable(e.to_string()))?;

    // Ranges start at the first used cell; re-anchor at A1 so that column
    // letters keep their spreadsheet positions.
    let (row_off, col_off) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut grid: Grid = (0..row_off).map(|r| (r + 1, Vec::new())).collect();
    for (i, row) in range.rows().enumerate() {
        let mut cells = vec![String::new(); col_off];
        cells.extend(row.iter().map(cell_to_string));
        grid.push((row_off + i + 1, cells));
    }
    Ok(grid)
}

/// Text of one workbook cell. Dates and times come out the way the schedule
/// exports type them: `M/D/YYYY` for dates, `H:MM AM` for bare times.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR:{e:?}"),
        Data::DateTime(dt) => format_excel_serial(dt.as_f64()),
        Data::DateTimeIso(s) => format_iso_datetime(s),
        Data::DurationIso(s) => format_iso_duration(s),
    }
}

fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

fn clock_text(t: NaiveTime) -> String {
    let (pm, hour) = t.hour12();
    format!("{}:{:02} {}", hour, t.minute(), if pm { "PM" } else { "AM" })
}

fn date_text(d: NaiveDate) -> String {
    d.format("%-m/%-d/%Y").to_string()
}

/// Excel serial date (xlsx/xls): whole days since 1899-12-30, the fraction
/// is the time of day.
fn format_excel_serial(serial: f64) -> String {
    let Some(epoch) = NaiveDate::from_ymd_opt(1899, 12, 30).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return serial.to_string();
    };

    let millis = (serial * 86_400_000.0).round() as i64;
    let dt: NaiveDateTime = epoch + Duration::milliseconds(millis);

    if serial < 1.0 {
        return clock_text(dt.time());
    }
    date_text(dt.date())
}

/// ISO 8601 date, datetime or time (OpenDocument `date-value`).
fn format_iso_datetime(s: &str) -> String {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return date_text(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date_text(d);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        return clock_text(t);
    }
    s.to_string()
}

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(\d+)H(\d+)M(\d+)(?:[.,]\d+)?S$").expect("valid regex")
});

/// ISO 8601 duration (OpenDocument `time-value`, e.g. `PT09H30M00S`).
/// Durations under a day are times of day; anything else is kept as is.
fn format_iso_duration(s: &str) -> String {
    let time = ISO_DURATION.captures(s.trim()).and_then(|c| {
        let h = c[1].parse().ok()?;
        let m = c[2].parse().ok()?;
        let sec = c[3].parse().ok()?;
        NaiveTime::from_hms_opt(h, m, sec)
    });
    match time {
        Some(t) => clock_text(t),
        None => s.to_string(),
    }
}

/// Skip the leading rows, take the next one as header and key the rest by it.
fn build_table(grid: Grid, header_rows_to_skip: usize) -> AppResult<Table> {
    let mut rows = grid.into_iter().skip(header_rows_to_skip);

    let (_, raw_headers) = rows.next().ok_or_else(|| {
        AppError::MalformedTable(format!(
            "no header row found after skipping {header_rows_to_skip} rows"
        ))
    })?;

    let mut table = Table::new(unique_headers(&raw_headers));
    let width = table.headers.len();

    for (line, cells) in rows {
        if cells.len() > width {
            // trailing empty cells beyond the header are harmless
            let extra_filled = cells[width..].iter().any(|c| !c.trim().is_empty());
            if extra_filled {
                return Err(AppError::MalformedTable(format!(
                    "expected {width} fields, saw {} on line {line}",
                    cells.len()
                )));
            }
        }
        let mut cells = cells;
        cells.truncate(width);
        table.push_row(line, cells);
    }

    Ok(table)
}

/// Trim labels, name empty ones by position and suffix duplicates with `.n`.
fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for (i, label) in raw.iter().enumerate() {
        let base = match label.trim() {
            "" => format!("Unnamed: {i}"),
            l => l.to_string(),
        };

        let mut candidate = base.clone();
        let mut n = 1;
        while out.contains(&candidate) {
            candidate = format!("{base}.{n}");
            n += 1;
        }
        out.push(candidate);
    }
    out
}
