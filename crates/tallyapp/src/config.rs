//! # Configuration
//!
//! Tally configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TALLY__DATA_DIR`, `TALLY__LOG_LEVEL`.
//! 2. **Data directory config**: `<data dir>/tally.toml`.
//! 3. **User config**: `tally.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Directory holding the month record files |
//! | `log_level` | `warn` | Diagnostics level for the CLI |

use confique::Config;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "tally.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for tally, stored in `tally.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    /// Directory holding the record files. When absent, the OS data directory is used.
    pub data_dir: Option<String>,

    /// Log level: off, error, warn, info, debug or trace.
    #[config(default = "warn")]
    pub log_level: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl TallyConfig {
    /// The configured log level, lowercased, falling back to `warn` when unrecognized.
    pub fn log_level(&self) -> &'static str {
        let wanted = self.log_level.trim().to_ascii_lowercase();
        LOG_LEVELS
            .iter()
            .copied()
            .find(|level| *level == wanted)
            .unwrap_or("warn")
    }
}
