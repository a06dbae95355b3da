use crate::date_idx::FixedClock;
use crate::store::mem_backend::MemBackend;
use crate::store::record_store::RecordStore;
use chrono::{DateTime, Local, TimeZone};

pub type TestStore = RecordStore<MemBackend, FixedClock>;

/// Local time at `h:min` on the given day.
///
/// Panics if the time does not exist in the local zone, which only happens
/// inside a DST gap.
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

/// An in-memory store whose clock is pinned to `now`.
pub fn store_at(now: DateTime<Local>) -> TestStore {
    RecordStore::with_clock(MemBackend::new(), FixedClock::new(now))
}

/// Builds a store by logging `(time, value, note)` entries in order.
pub struct StoreFixture {
    pub store: TestStore,
}

impl StoreFixture {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            store: store_at(now),
        }
    }

    pub fn with_entry(mut self, at: DateTime<Local>, value: f64, note: &str) -> Self {
        self.store.clock().set(at);
        assert!(self.store.insert_or_create(value, note), "fixture insert failed");
        self
    }
}
