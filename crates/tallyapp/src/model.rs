//! # Domain Model: Records by Day, Month and Year
//!
//! A record is a number logged at a point in time, with an optional free-text note.
//! Records are grouped by the calendar day they were logged on, days are grouped
//! into months, and a month is the unit of persistence.
//!
//! ```text
//! YearRecord  = [Option<MonthRecord>; 12]        index 0 = January
//! MonthRecord = { day-of-month → DayRecord }     one backend value per month
//! DayRecord   = [SingleRecord, ...]              insertion order
//! ```
//!
//! ## Persisted Shape
//!
//! A month is stored as a JSON object keyed by the decimal day number, holding
//! arrays of `{ "t": <ms since epoch>, "v": <number>, "n": <note> }`:
//!
//! ```json
//! { "14": [ { "t": 1657791000000, "v": 3.5, "n": "coffee" } ] }
//! ```
//!
//! The single-letter field names are part of the stored format and must not change.
//!
//! ## Absence
//!
//! A month that was never written is `None` wherever a `MonthRecord` is returned.
//! A day with no entries is simply missing from its month's map.
//!
//! Records are never edited in place: days only grow by appending, and data only
//! goes away when a whole month (or more) is cleared.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logged value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleRecord {
    /// Creation time, milliseconds since the Unix epoch.
    #[serde(rename = "t")]
    pub timestamp: i64,
    #[serde(rename = "v")]
    pub value: f64,
    #[serde(rename = "n", default)]
    pub note: String,
}

impl SingleRecord {
    pub fn new(timestamp: i64, value: f64, note: impl Into<String>) -> Self {
        Self {
            timestamp,
            value,
            note: note.into(),
        }
    }
}

/// Entries of one calendar day, oldest first.
pub type DayRecord = Vec<SingleRecord>;

/// Day-of-month (1–31) to that day's entries.
pub type MonthRecord = BTreeMap<u32, DayRecord>;

/// Twelve months in calendar order; `None` for months never written.
pub type YearRecord = [Option<MonthRecord>; 12];

/// One stored day, located by the key it was read from.
///
/// `year` and `month` come from splitting the month key after its fourth
/// character, so they are kept as the strings found in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub year: String,
    pub month: String,
    pub date: u32,
    pub records: DayRecord,
}

impl DayEntry {
    /// Sum of the values logged that day.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.value).sum()
    }
}

/// Number of entries and their sum across a whole month.
pub fn month_totals(month: &MonthRecord) -> (usize, f64) {
    month.values().flatten().fold((0, 0.0), |(count, sum), record| {
        (count + 1, sum + record.value)
    })
}
