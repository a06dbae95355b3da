//! # Calendar Keys
//!
//! Every month of records is addressed by a single string key: the four-digit
//! year followed directly by the month number, with no separator and no zero
//! padding.
//!
//! | Month          | Key        |
//! |----------------|------------|
//! | January 2022   | `"20221"`  |
//! | July 2022      | `"20227"`  |
//! | November 2022  | `"202211"` |
//!
//! The scheme is ambiguous in principle (a five-digit year would collide with a
//! four-digit year plus a month), but it is the format existing data is stored
//! under, so it is reproduced exactly. [`month_key`] is the only place keys are
//! built; year fan-out and record insertion both go through it, which keeps the
//! keys they touch identical.
//!
//! ## Time Source
//!
//! "Now" comes from a [`Clock`]. Production uses [`SystemClock`] (local time,
//! since a record belongs to the day the user sees on their wall clock); tests
//! use [`FixedClock`] to pin and advance time.

use chrono::{DateTime, Datelike, Duration, Local};
use std::cell::Cell;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

/// Which component of a [`DateIdx`] to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdxKind {
    Date,
    Month,
    Year,
    Ym,
}

/// Calendar components of one instant, as they appear in storage keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateIdx {
    /// Day of month, `"1"`..=`"31"`.
    pub date: String,
    /// Month number, `"1"`..=`"12"`.
    pub month: String,
    pub year: String,
    /// Month key: `year` followed by `month`.
    pub ym: String,
}

impl DateIdx {
    pub fn of<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> Self {
        let year = at.year().to_string();
        let month = at.month();
        Self {
            date: at.day().to_string(),
            month: month.to_string(),
            ym: month_key(&year, month),
            year,
        }
    }

    pub fn get(&self, kind: IdxKind) -> &str {
        match kind {
            IdxKind::Date => &self.date,
            IdxKind::Month => &self.month,
            IdxKind::Year => &self.year,
            IdxKind::Ym => &self.ym,
        }
    }
}

/// Builds the storage key of one month. `month` is 1-based.
pub fn month_key(year: &str, month: u32) -> String {
    format!("{}{}", year, month)
}

/// The twelve month keys of `year`, January first.
pub fn year_month_keys(year: &str) -> [String; 12] {
    std::array::from_fn(|i| month_key(year, i as u32 + 1))
}

/// Splits a month key into its year (first four characters) and month (the rest).
///
/// Keys shorter than four characters yield the whole key as year and an empty month.
pub fn split_month_key(key: &str) -> (&str, &str) {
    match key.char_indices().nth(4) {
        Some((at, _)) => key.split_at(at),
        None => (key, ""),
    }
}
