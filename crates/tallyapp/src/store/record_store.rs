use super::backend::KvBackend;
use crate::date_idx::{split_month_key, year_month_keys, Clock, DateIdx, IdxKind, SystemClock};
use crate::error::{Result, TallyError};
use crate::model::{DayEntry, MonthRecord, SingleRecord, YearRecord};
use log::{debug, warn};

/// Calendar-addressed record storage over a [`KvBackend`].
///
/// Reads never fail: anything that goes wrong comes back as `None` or an empty
/// `Vec`. Writes report success as a `bool`. Failures are logged, not returned.
///
/// Mutating operations take `&mut self`. A month insert is a read-modify-write
/// of the whole month value, and exclusive access keeps two inserts on the same
/// store from interleaving and losing an entry.
pub struct RecordStore<B: KvBackend, C: Clock = SystemClock> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    clock: C,
}

impl<B: KvBackend> RecordStore<B, SystemClock> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            clock: SystemClock,
        }
    }
}

impl<B: KvBackend, C: Clock> RecordStore<B, C> {
    pub fn with_clock(backend: B, clock: C) -> Self {
        Self { backend, clock }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Calendar components of the current moment.
    pub fn now_idx(&self) -> DateIdx {
        DateIdx::of(&self.clock.now())
    }

    /// One component of the current moment (`"14"`, `"7"`, `"2022"`, `"20227"`).
    pub fn date_idx(&self, kind: IdxKind) -> String {
        self.now_idx().get(kind).to_string()
    }

    /// Records of the month stored at `ym`, or of the current month when `ym` is `None`.
    ///
    /// Returns `None` when the month was never written, when the stored value does
    /// not decode as a month, or when the backend fails.
    pub fn get_month_record(&self, ym: Option<&str>) -> Option<MonthRecord> {
        match ym {
            Some(ym) => self.read_month(ym),
            None => self.read_month(&self.now_idx().ym),
        }
    }

    /// The twelve months of `year` (current year when `None`), January first.
    pub fn get_year_record(&self, year: Option<&str>) -> YearRecord {
        let year = match year {
            Some(year) => year.to_string(),
            None => self.now_idx().year,
        };
        let keys = year_month_keys(&year);
        debug!("reading year {} ({} month keys)", year, keys.len());
        keys.map(|key| self.read_month(&key))
    }

    /// Every stored day across all months, ordered by year, month and day.
    ///
    /// `list_keys` sorts lexically, which puts `"202211"` before `"20227"`, so
    /// months are re-sorted by their numeric month.
    ///
    /// Keys whose value is not a month are skipped. If the backend cannot list its
    /// keys the result is empty.
    pub fn get_all_records(&self) -> Vec<DayEntry> {
        let keys = match self.backend.list_keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!("listing keys failed, returning no records: {}", e);
                return Vec::new();
            }
        };
        debug!("reading {} stored keys", keys.len());

        let mut months: Vec<(String, MonthRecord)> = keys
            .into_iter()
            .filter_map(|key| self.read_month(&key).map(|month| (key, month)))
            .collect();
        months.sort_by_cached_key(|(key, _)| {
            let (year, month) = split_month_key(key);
            (
                year.to_string(),
                month.parse::<u32>().unwrap_or(u32::MAX),
                key.clone(),
            )
        });

        let mut all = Vec::new();
        for (key, month_record) in months {
            let (year, month) = split_month_key(&key);
            for (date, records) in month_record {
                all.push(DayEntry {
                    year: year.to_string(),
                    month: month.to_string(),
                    date,
                    records,
                });
            }
        }
        all
    }

    /// Appends `{now, value, note}` to today's records.
    ///
    /// Returns `false` if the value is not finite, if the current month exists but
    /// cannot be read, or if the month could not be written back.
    pub fn insert_or_create(&mut self, value: f64, note: &str) -> bool {
        self.insert_record(value, note).is_some()
    }

    /// Like [`insert_or_create`](Self::insert_or_create), returning the stored record.
    ///
    /// The record's timestamp is the single clock reading its day and month were
    /// derived from.
    pub fn insert_record(&mut self, value: f64, note: &str) -> Option<SingleRecord> {
        if !value.is_finite() {
            warn!("refusing to record non-finite value {}", value);
            return None;
        }

        let now = self.clock.now();
        let idx = DateIdx::of(&now);
        let Ok(date) = idx.date.parse::<u32>() else {
            warn!("unusable day of month {:?}", idx.date);
            return None;
        };

        // An unreadable month is left untouched rather than replaced.
        let mut month = match self.load_month(&idx.ym) {
            Ok(month) => month.unwrap_or_default(),
            Err(e) => {
                warn!("not writing to month {}: {}", idx.ym, e);
                return None;
            }
        };
        let record = SingleRecord::new(now.timestamp_millis(), value, note);
        month.entry(date).or_default().push(record.clone());

        let stored = serde_json::to_value(&month)
            .map_err(TallyError::Serialization)
            .and_then(|data| self.backend.set(&idx.ym, &data));
        match stored {
            Ok(()) => {
                debug!("appended record to {} day {}", idx.ym, date);
                Some(record)
            }
            Err(e) => {
                warn!("writing month {} failed: {}", idx.ym, e);
                None
            }
        }
    }

    /// Removes the given month keys. `true` only if every removal succeeded.
    pub fn clear_month_records<I: AsRef<str>>(&mut self, yms: &[I]) -> bool {
        if yms.is_empty() {
            return true;
        }
        self.remove_all(yms.iter().map(|ym| AsRef::<str>::as_ref(ym).to_string()))
    }

    /// Removes every month of each given year, plus any value stored under the
    /// bare year key. `true` only if every removal succeeded.
    pub fn clear_year_records<I: AsRef<str>>(&mut self, years: &[I]) -> bool {
        if years.is_empty() {
            return true;
        }
        let keys = years.iter().flat_map(|year| {
            let year: &str = year.as_ref();
            std::iter::once(year.to_string()).chain(year_month_keys(year))
        });
        self.remove_all(keys)
    }

    /// Erases the whole namespace.
    pub fn clear_all_records(&mut self) -> bool {
        match self.backend.clear() {
            Ok(()) => {
                debug!("cleared all records");
                true
            }
            Err(e) => {
                warn!("clearing all records failed: {}", e);
                false
            }
        }
    }

    fn read_month(&self, ym: &str) -> Option<MonthRecord> {
        match self.load_month(ym) {
            Ok(month) => month,
            Err(e) => {
                warn!("reading month {} failed: {}", ym, e);
                None
            }
        }
    }

    /// `Ok(None)` only when nothing is stored at `ym` (missing key or null).
    /// Backend failures and undecodable values are errors.
    fn load_month(&self, ym: &str) -> Result<Option<MonthRecord>> {
        let value = match self.backend.get(ym) {
            Ok(value) => value,
            Err(TallyError::KeyNotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        if value.is_null() {
            return Ok(None);
        }
        let month = serde_json::from_value(value).map_err(TallyError::Serialization)?;
        Ok(Some(month))
    }

    /// Attempts every removal, even after one fails.
    fn remove_all(&self, keys: impl IntoIterator<Item = String>) -> bool {
        let mut all_ok = true;
        for key in keys {
            match self.backend.remove(&key) {
                Ok(()) => debug!("removed {}", key),
                Err(e) => {
                    warn!("removing {} failed: {}", key, e);
                    all_ok = false;
                }
            }
        }
        all_ok
    }
}
