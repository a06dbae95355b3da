//! # Tally Architecture
//!
//! Tally is a **UI-agnostic record-keeping library**: log a number with an optional
//! note, browse entries by day, month or year, and clear them at month, year or
//! whole-store granularity. The terminal client in `crates/tally` is one consumer;
//! nothing in this crate writes to stdout or exits the process.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (crates/tally)                                │
//! │  - Argument parsing, rendering, exit codes                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/record_store.rs)                       │
//! │  - Month read-modify-write, year and all-time aggregation   │
//! │  - Folds every failure into None / false / empty            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Key-Value Backend (store/backend.rs)                       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Space
//!
//! Each month is one value in a flat key-value namespace, stored under the year
//! and month number concatenated without separator or padding: July 2022 lives at
//! `"20227"`, November 2022 at `"202211"`. See [`date_idx`].
//!
//! ## Module Overview
//!
//! - [`model`]: record types ([`model::SingleRecord`], [`model::MonthRecord`], ...)
//! - [`date_idx`]: key derivation and the injectable [`date_idx::Clock`]
//! - [`calendar`]: leap years, month lengths, timestamp formatting
//! - [`store`]: backends and the [`store::record_store::RecordStore`]
//! - [`config`] / [`init`]: configuration loading and store construction
//! - [`error`]: backend and configuration errors

pub mod calendar;
pub mod config;
pub mod date_idx;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
