//! # CLI Behavior
//!
//! This is **one possible UI client** for tally, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Commands
//!
//! - `tally add 3.5 --note coffee` logs a value for today.
//! - `tally month [2022-7 | 20227]` shows one month grouped by day (default: this month).
//! - `tally year [2022]` shows per-month counts and totals (default: this year).
//! - `tally all` lists every stored day.
//! - `tally clear months|years|all` removes records.
//! - `tally config` prints the resolved configuration.
//!
//! Reads never fail; an unreadable month shows up as an empty one. Writes and
//! clears that the store reports as failed exit with status 1.

mod commands;
mod render;
mod setup;

pub use commands::run;
