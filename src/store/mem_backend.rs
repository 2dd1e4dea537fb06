use super::backend::SettingsBackend;
use crate::error::{Result, SettingsError};
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the library is
/// single-threaded and request-scoped. This avoids the overhead of `RwLock`
/// while still allowing the `SettingsBackend` trait to use `&self` for all
/// methods.
#[derive(Default)]
pub struct MemBackend {
    columns: RefCell<HashMap<Uuid, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl SettingsBackend for MemBackend {
    fn read_settings(&self, id: &Uuid) -> Result<Option<String>> {
        let columns = self.columns.borrow();
        Ok(columns.get(id).cloned())
    }

    fn write_settings(&self, id: &Uuid, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SettingsError::Store("Simulated write error".to_string()));
        }
        let mut columns = self.columns.borrow_mut();
        columns.insert(*id, text.to_string());
        Ok(())
    }

    fn delete_settings(&self, id: &Uuid) -> Result<()> {
        let mut columns = self.columns.borrow_mut();
        columns.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<Uuid>> {
        let columns = self.columns.borrow();
        Ok(columns.keys().copied().collect())
    }
}
