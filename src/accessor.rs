//! The key/value accessor over a record's settings map.
//!
//! [`Settings`] decouples callers from the raw map field. It borrows the
//! owning record mutably for its lifetime; the record remains the single
//! source of truth, and every mutation lands directly in the record's map.

use serde_json::Value;

use crate::model::{HasSettings, SettingsMap};

/// Accessor over one record's settings. Obtained via
/// [`HasSettings::settings`].
#[derive(Debug)]
pub struct Settings<'a, R: HasSettings> {
    record: &'a mut R,
}

impl<'a, R: HasSettings> Settings<'a, R> {
    pub fn new(record: &'a mut R) -> Self {
        Self { record }
    }

    /// The value at `key`, or `default` if absent.
    pub fn get(&self, key: &str, default: Value) -> Value {
        self.record
            .settings_map()
            .get(key)
            .cloned()
            .unwrap_or(default)
    }

    /// Borrowed lookup without a default.
    pub fn get_opt(&self, key: &str) -> Option<&Value> {
        self.record.settings_map().get(key)
    }

    /// Write `key` and mark the record dirty.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.record
            .settings_map_mut()
            .insert(key.to_string(), value.into());
        self.record.mark_settings_dirty();
    }

    /// Membership test.
    pub fn has(&self, key: &str) -> bool {
        self.record.settings_map().contains_key(key)
    }

    /// Remove `key`, returning the removed value. Marks the record dirty
    /// only when something was actually removed.
    pub fn forget(&mut self, key: &str) -> Option<Value> {
        let removed = self.record.settings_map_mut().remove(key);
        if removed.is_some() {
            self.record.mark_settings_dirty();
        }
        removed
    }

    /// Read-only view of the full map.
    pub fn all(&self) -> &SettingsMap {
        self.record.settings_map()
    }
}
