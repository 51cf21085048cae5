//! Conversion core: time-range normalization, event materialization and the
//! pipeline that chains them after the table stages.

pub mod materialize;
pub mod pipeline;
pub mod time_range;

pub use pipeline::Pipeline;
pub use time_range::{NormalizedTimeRange, normalize};
