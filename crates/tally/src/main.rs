//! # Tally CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/tallyapp/`: Record store library with UI-agnostic logic
//! - `crates/tally/`: This CLI tool, depends on the `tallyapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/tally/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (crates/tallyapp/src/store/)                  │
//! │  - Month / year / all-time reads, inserts, clears           │
//! │  - Never returns errors; reports None / false / empty       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because the store folds failures into neutral values, the CLI is where a
//! `false` from a write becomes a non-zero exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
