use super::event::EventRecord;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why a schedule row produced no event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The time text did not normalize to a start and an end with meridians.
    InvalidTimeRange,
    /// No `Date` value on this row or on any row above it.
    MissingDate,
    /// `Date + start` matched none of the accepted patterns.
    UnparseableStart(String),
    /// `Date + end` matched none of the accepted patterns.
    UnparseableEnd(String),
    /// No offset of the configured zone could be found for the wall-clock time.
    NonexistentLocalTime(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidTimeRange => write!(f, "invalid time range"),
            SkipReason::MissingDate => write!(f, "missing date"),
            SkipReason::UnparseableStart(s) => write!(f, "unparseable start '{s}'"),
            SkipReason::UnparseableEnd(s) => write!(f, "unparseable end '{s}'"),
            SkipReason::NonexistentLocalTime(s) => write!(f, "nonexistent local time '{s}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Source line of the row.
    pub line: usize,
    /// Raw `Time` cell.
    pub time_text: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Event(EventRecord),
    Skipped(SkippedRow),
}

/// Result of converting one input file.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub events: Vec<EventRecord>,
    pub skipped: Vec<SkippedRow>,
    /// Rows left after reshaping (non-empty `Time`).
    pub rows_considered: usize,
}

impl ConversionReport {
    pub fn from_outcomes(source: PathBuf, outcomes: Vec<RowOutcome>) -> Self {
        let rows_considered = outcomes.len();
        let mut events = Vec::new();
        let mut skipped = Vec::new();

        for outcome in outcomes {
            match outcome {
                RowOutcome::Event(ev) => events.push(ev),
                RowOutcome::Skipped(s) => skipped.push(s),
            }
        }

        Self {
            source,
            events,
            skipped,
            rows_considered,
        }
    }

    /// Every row was skipped (or there were none).
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Skipped rows grouped by reason label, in first-seen order.
    pub fn skip_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for s in &self.skipped {
            let label = match &s.reason {
                SkipReason::InvalidTimeRange => "invalid time range",
                SkipReason::MissingDate => "missing date",
                SkipReason::UnparseableStart(_) => "unparseable start",
                SkipReason::UnparseableEnd(_) => "unparseable end",
                SkipReason::NonexistentLocalTime(_) => "nonexistent local time",
            };
            match counts.iter_mut().find(|(l, _)| l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }
        counts
    }
}
