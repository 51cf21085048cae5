//! Time-Range Normalizer.
//!
//! Turns hand-typed ranges such as `9-11am`, `10 – 5 PM` or `9AM—5PM` into
//! the canonical `H[:MM] AM - H[:MM] PM` form. The function is total: text
//! that does not look like a range is cleaned up and passed through, and the
//! start/end extraction then yields empty strings so the row can be rejected
//! later.
//!
//! When only one side of a range carries a meridian, the other side takes the
//! same one (`10 - 5 PM` → `10 PM - 5 PM`). This is the historical behaviour
//! of the schedule exports and is kept as is, even though `10 AM - 5 PM` is
//! the likelier reading of that example.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static DIGIT_MERIDIAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d)(am|pm)").expect("valid regex"));

static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[–—]").expect("valid regex"));

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d{1,2}(?::\d{2})?)(?: ?(AM|PM))? ?- ?(\d{1,2}(?::\d{2})?)(?: ?(AM|PM))?$",
    )
    .expect("valid regex")
});

static START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2}(?::\d{2})? (?:AM|PM))").expect("valid regex"));

static END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)- ?(\d{1,2}(?::\d{2})? (?:AM|PM))$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTimeRange {
    /// `START - END` when the text was recognized, the cleaned input otherwise.
    pub rendered: String,
    /// `H[:MM] AM|PM`, or empty when no start could be extracted.
    pub start_time: String,
    /// `H[:MM] AM|PM`, or empty when no end could be extracted.
    pub end_time: String,
}

impl NormalizedTimeRange {
    /// Both sides carry a time and a meridian.
    pub fn is_complete(&self) -> bool {
        !self.start_time.is_empty() && !self.end_time.is_empty()
    }
}

/// Whitespace, dash and meridian spacing cleanup (steps 1–4).
pub fn clean(text: &str) -> String {
    let t = text.trim();
    let t = DIGIT_MERIDIAN.replace_all(t, "$1 $2");
    let t = DASHES.replace_all(&t, "-");
    SPACES.replace_all(&t, " ").into_owned()
}

/// Canonical form of a range, or `None` when neither side has a meridian
/// or the text is not a `start - end` range at all.
pub fn canonical(cleaned: &str) -> Option<String> {
    let caps = RANGE.captures(cleaned)?;

    let start = &caps[1];
    let end = &caps[3];
    let start_m = caps.get(2).map(|m| m.as_str().to_uppercase());
    let end_m = caps.get(4).map(|m| m.as_str().to_uppercase());

    let (start_m, end_m) = match (start_m, end_m) {
        (Some(s), Some(e)) => (s, e),
        (Some(s), None) => (s.clone(), s),
        (None, Some(e)) => (e.clone(), e),
        (None, None) => return None,
    };

    Some(format!("{start} {start_m} - {end} {end_m}"))
}

fn extract(re: &Regex, text: &str) -> String {
    re.captures(text)
        .map(|c| c[1].trim().to_uppercase())
        .unwrap_or_default()
}

pub fn normalize(text: &str) -> NormalizedTimeRange {
    let cleaned = clean(text);
    let rendered = canonical(&cleaned).unwrap_or(cleaned);

    NormalizedTimeRange {
        start_time: extract(&START, &rendered),
        end_time: extract(&END, &rendered),
        rendered,
    }
}
