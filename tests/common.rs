#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn s2i() -> Command {
    cargo_bin_cmd!("sched2ics")
}

/// Header of the schedule export used by the tests (columns A..R).
/// After the default positional drop the columns left are
/// A, C, H, I, J, L and L becomes `Description`.
pub const HEADER: [&str; 18] = [
    "Work Activity",      // A
    "Employee",           // B
    " Work Location ",    // C
    "Dept",               // D
    "Shift Code",         // E
    "Supervisor",         // F
    "Status",             // G
    "Meeting Location",   // H
    "  Date",             // I
    "Time  ",             // J
    "Hours",              // K
    "Notes",              // L
    "X1",                 // M
    "X2",                 // N
    "X3",                 // O
    "X4",                 // P
    "X5",                 // Q
    "X6",                 // R
];

/// One schedule row: activity, work location, meeting location, date, time, notes.
pub type Entry<'a> = [&'a str; 6];

fn csv_line(cells: &[String]) -> String {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(cells).expect("write record");
    String::from_utf8(wtr.into_inner().expect("flush")).expect("utf8")
}

/// Full CSV export text: three banner lines, the header, then the rows.
pub fn schedule_csv(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str("Weekly Schedule Report\n");
    out.push_str("Generated 03/01/2025,,\n");
    out.push_str("Department: Operations\n");
    out.push_str(&csv_line(
        &HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));

    for [activity, work_loc, meeting_loc, date, time, notes] in entries {
        let mut cells = vec![String::new(); 18];
        cells[0] = activity.to_string();
        cells[1] = "J. Doe".to_string();
        cells[2] = work_loc.to_string();
        cells[3] = "OPS".to_string();
        cells[7] = meeting_loc.to_string();
        cells[8] = date.to_string();
        cells[9] = time.to_string();
        cells[10] = "1".to_string();
        cells[11] = notes.to_string();
        out.push_str(&csv_line(&cells));
    }
    out
}

/// Path inside the temp dir, removed if it already exists.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("sched2ics_{}.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write a schedule CSV into the temp dir and return its path.
pub fn write_schedule(name: &str, entries: &[Entry]) -> PathBuf {
    let path = temp_path(name, "csv");
    fs::write(&path, schedule_csv(entries)).expect("write schedule csv");
    path
}

/// Config path that does not exist, so defaults are used.
pub fn no_config(name: &str) -> PathBuf {
    temp_path(&format!("{name}_missing_config"), "conf")
}
