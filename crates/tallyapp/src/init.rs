//! # Locating the Data Directory
//!
//! All records live in one directory, one file per month. [`initialize`] decides
//! which directory that is, loads configuration, and builds a [`FileStore`] on it.
//!
//! ## Resolution Order
//!
//! 1. `data_override` (the CLI `--data` flag) when provided.
//! 2. The `TALLY_DATA` environment variable. Tests use this to isolate state.
//! 3. `data_dir` from configuration (`tally.toml` or `TALLY__DATA_DIR`).
//! 4. The OS-appropriate data directory (via the `directories` crate).
//!
//! Configuration itself is read from the OS config directory and, when the data
//! directory is known up front (steps 1–2), from `tally.toml` inside it as well;
//! the data directory file wins on conflicts.

use crate::config::{TallyConfig, CONFIG_FILE_NAME};
use crate::error::{Result, TallyError};
use crate::store::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV_VAR: &str = "TALLY_DATA";

pub struct TallyContext {
    pub store: FileStore,
    pub config: TallyConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "tally", "tally")
        .ok_or_else(|| TallyError::Config("could not determine home directory".to_string()))
}

/// Initialize the tally context: resolve the data directory and set up the store.
///
/// # Arguments
///
/// * `data_override` - Explicit data directory; bypasses every other source.
///
/// # Environment Variables
///
/// * `TALLY_DATA` - Overrides the data directory when no explicit override is given.
pub fn initialize(data_override: Option<PathBuf>) -> Result<TallyContext> {
    let explicit_dir = data_override.or_else(|| std::env::var_os(DATA_ENV_VAR).map(PathBuf::from));

    let mut search_paths = Vec::new();
    if let Ok(dirs) = project_dirs() {
        search_paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
    }
    if let Some(dir) = &explicit_dir {
        search_paths.push(SearchPath::Path(dir.clone()));
    }

    let config: TallyConfig = Clapfig::builder()
        .app_name("tally")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default();

    let data_dir = match explicit_dir {
        Some(dir) => dir,
        None => match &config.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => project_dirs()?.data_dir().to_path_buf(),
        },
    };

    let store = FileStore::new_fs(data_dir.clone());
    Ok(TallyContext {
        store,
        config,
        data_dir,
    })
}
