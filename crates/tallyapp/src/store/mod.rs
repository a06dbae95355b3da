//! # Storage Layer
//!
//! Records are persisted in a flat key-value namespace, one value per month.
//! The [`backend::KvBackend`] trait is the only thing the rest of tally knows about
//! storage: five primitives (`get`, `set`, `remove`, `clear`, `list_keys`) over
//! JSON values.
//!
//! ## Record Store
//!
//! [`record_store::RecordStore`] sits on top of a backend and provides the
//! calendar operations:
//!
//! | Operation              | Backend calls                         | Failure result |
//! |------------------------|---------------------------------------|----------------|
//! | `get_month_record`     | `get(ym)`                             | `None`         |
//! | `get_year_record`      | `get` × 12                            | `None` months  |
//! | `get_all_records`      | `list_keys`, then `get` per key       | empty `Vec`    |
//! | `insert_or_create`     | `get(ym)`, `set(ym)`                  | `false`        |
//! | `clear_month_records`  | `remove` per key                      | `false`        |
//! | `clear_year_records`   | `remove` year key + 12 month keys     | `false`        |
//! | `clear_all_records`    | `clear`                               | `false`        |
//!
//! Nothing in the record store returns an error: to readers, a missing month and
//! a month that could not be read look the same. Inserts are stricter and refuse
//! to write over a month they could not read. Swallowed failures are logged at
//! `warn` level.
//!
//! ## Month Updates
//!
//! There is no per-entry write. Inserting reads the whole current month, appends
//! to today's list and writes the whole month back. Store methods that write take
//! `&mut self`, so a single store cannot run two of these at once.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per key in a data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

use fs_backend::FsBackend;
use mem_backend::MemBackend;
use record_store::RecordStore;
use std::path::PathBuf;

pub type FileStore = RecordStore<FsBackend>;
pub type InMemoryStore = RecordStore<MemBackend>;

impl FileStore {
    pub fn new_fs(root: PathBuf) -> Self {
        RecordStore::with_backend(FsBackend::new(root))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}
