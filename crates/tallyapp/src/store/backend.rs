use crate::error::Result;
use serde_json::Value;

/// Abstract interface for the flat key-value namespace records live in.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (calendar keys, aggregation, failure folding).
///
/// Implementations are single-threaded; all methods take `&self` and use
/// interior mutability where they need it.
pub trait KvBackend {
    /// Read the value stored under `key`.
    /// Returns `Err(TallyError::KeyNotFound)` if nothing is stored there.
    fn get(&self, key: &str) -> Result<Value>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &Value) -> Result<()>;

    /// Remove `key`. Removing a key that does not exist is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key in the namespace.
    fn clear(&self) -> Result<()>;

    /// All keys currently stored, sorted.
    fn list_keys(&self) -> Result<Vec<String>>;
}
