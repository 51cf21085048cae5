//! In-memory schedule table shared by the loader and the reshaper.

pub mod column;
pub mod loader;
pub mod reshape;

pub use loader::{InputKind, load, load_path};
pub use reshape::{ReshapeConfig, reshape};

/// Canonical column labels.
pub const WORK_ACTIVITY: &str = "Work Activity";
pub const WORK_LOCATION: &str = "Work Location";
pub const MEETING_LOCATION: &str = "Meeting Location";
pub const DESCRIPTION: &str = "Description";
pub const LOCATION: &str = "Location";
pub const DATE: &str = "Date";
pub const TIME: &str = "Time";

/// One data row. `cells` always has one entry per header; an empty cell is
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line (CSV) or row (workbook) number in the source.
    pub line: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Label comparison ignoring case and surrounding/inner whitespace runs.
fn same_label(a: &str, b: &str) -> bool {
    let norm = |s: &str| {
        s.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    };
    norm(a) == norm(b)
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding it with empty cells up to the header width.
    pub fn push_row(&mut self, line: usize, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(Row { line, cells });
    }

    /// Position of the column labelled `label`, if any.
    pub fn column(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| same_label(h, label))
    }

    /// Cell of `row` under `label`, or `None` when the column is absent.
    pub fn cell<'a>(&self, row: &'a Row, label: &str) -> Option<&'a str> {
        self.column(label)
            .and_then(|idx| row.cells.get(idx))
            .map(String::as_str)
    }

    /// Remove the columns at `indices` (any order, duplicates allowed).
    pub fn drop_columns(&mut self, indices: &[usize]) {
        let keep: Vec<bool> = (0..self.headers.len())
            .map(|i| !indices.contains(&i))
            .collect();

        let mut i = 0;
        self.headers.retain(|_| {
            i += 1;
            keep[i - 1]
        });

        for row in &mut self.rows {
            let mut i = 0;
            row.cells.retain(|_| {
                i += 1;
                keep[i - 1]
            });
        }
    }

    /// Append a new column computed from each row.
    pub fn push_column<F>(&mut self, label: &str, mut f: F)
    where
        F: FnMut(&Row) -> String,
    {
        for row in &mut self.rows {
            let value = f(row);
            row.cells.push(value);
        }
        self.headers.push(label.to_string());
    }
}
