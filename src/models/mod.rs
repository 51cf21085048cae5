pub mod event;
pub mod outcome;

pub use event::EventRecord;
pub use outcome::{ConversionReport, RowOutcome, SkipReason, SkippedRow};
