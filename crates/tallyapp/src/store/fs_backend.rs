use super::backend::KvBackend;
use crate::error::{Result, TallyError};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const VALUE_EXT: &str = "json";

/// One JSON file per key under a single directory.
///
/// ```text
/// <root>/
/// ├── 20227.json
/// ├── 202211.json
/// └── tally.toml      # not a key; ignored by list_keys and clear
/// ```
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, VALUE_EXT)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TallyError::Io)?;
        }
        Ok(())
    }

    /// Paths of every stored value, paired with its key.
    fn value_files(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(TallyError::Io)? {
            let path = entry.map_err(TallyError::Io)?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(VALUE_EXT) {
                continue;
            }
            if let Some(key) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_key(key).is_ok() {
                    found.push((key.to_string(), path.clone()));
                }
            }
        }
        Ok(found)
    }
}

/// Keys become file names, so they must not be able to leave the root
/// or collide with temp files.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
        return Err(TallyError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KvBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Value> {
        let path = self.value_path(key)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TallyError::KeyNotFound(key.to_string()))
            }
            Err(e) => return Err(TallyError::Io(e)),
        };
        let value = serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let target_path = self.value_path(key)?;
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(value).map_err(TallyError::Serialization)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(TallyError::Io)?;
        fs::rename(&tmp_path, target_path).map_err(TallyError::Io)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TallyError::Io(e)),
        }
    }

    fn clear(&self) -> Result<()> {
        for (_, path) in self.value_files()? {
            fs::remove_file(path).map_err(TallyError::Io)?;
        }
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self
            .value_files()?
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        keys.sort();
        Ok(keys)
    }
}
