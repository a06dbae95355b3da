use super::backend::KvBackend;
use crate::error::{Result, TallyError};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since tally is single-threaded.
/// Failure switches let tests drive the store's error folding, and every
/// primitive call is counted so tests can assert the backend was never touched.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<BTreeMap<String, Value>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
    simulate_list_error: Cell<bool>,
    calls: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every `get` with a store error.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Fail every `set`, `remove` and `clear` with a store error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Fail `list_keys` with a store error.
    pub fn set_simulate_list_error(&self, simulate: bool) {
        self.simulate_list_error.set(simulate);
    }

    /// Number of primitive calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Test helper to place a raw value, bypassing the call counter and failure switches.
    pub fn insert_raw(&self, key: &str, value: Value) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    /// Test helper to inspect a raw value.
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }

    fn track(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(TallyError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KvBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Value> {
        self.track();
        if self.simulate_read_error.get() {
            return Err(TallyError::Store("Simulated read error".to_string()));
        }
        self.values
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| TallyError::KeyNotFound(key.to_string()))
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        self.track();
        self.check_write()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.track();
        self.check_write()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.track();
        self.check_write()?;
        self.values.borrow_mut().clear();
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        self.track();
        if self.simulate_list_error.get() {
            return Err(TallyError::Store("Simulated list error".to_string()));
        }
        Ok(self.values.borrow().keys().cloned().collect())
    }
}
