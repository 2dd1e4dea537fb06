//! # Record Seam
//!
//! This module defines [`SettingsMap`] and the [`HasSettings`] trait — the
//! contract between this library and a host record type.
//!
//! ## The Contract
//!
//! A record type provides three things:
//!
//! 1. **Storage**: a `SettingsMap` field, reachable via `settings_map` /
//!    `settings_map_mut`. The record remains the single source of truth; the
//!    accessor and hooks only ever operate on this field.
//! 2. **Schema**: a static [`SettingsSchema`](crate::schema::SettingsSchema)
//!    describing defaults, allow-list and alias (typically a
//!    `once_cell::sync::Lazy`).
//! 3. **Optionally** a dirty hook: `mark_settings_dirty` is a no-op by
//!    default; ORM-ish records can override it to flag the row for writing.
//!
//! Everything else comes for free as provided methods.
//!
//! ## Entry Points
//!
//! - [`HasSettings::settings`] — the no-arg form, returns the accessor.
//! - [`HasSettings::setting`] — the keyed form, `get(key, default)` directly.
//! - [`HasSettings::settings_as`] — alias dispatch for types that expose the
//!   accessor under a custom name (e.g. `config`).
//!
//! ## Map Representation
//!
//! `SettingsMap` is `serde_json::Map<String, Value>`, which preserves
//! insertion order. Filtering on save keeps the order and values of retained
//! keys unchanged.

use serde_json::Value;

use crate::accessor::Settings;
use crate::error::{Result, SettingsError};
use crate::schema::SettingsSchema;

/// The in-memory form of a record's settings column.
pub type SettingsMap = serde_json::Map<String, Value>;

/// Attaches a JSON settings blob to a record type.
pub trait HasSettings {
    /// The schema this record type declares for its settings.
    fn settings_schema() -> &'static SettingsSchema
    where
        Self: Sized;

    /// The record's settings map (never null once materialized).
    fn settings_map(&self) -> &SettingsMap;

    /// Mutable access to the record's settings map.
    fn settings_map_mut(&mut self) -> &mut SettingsMap;

    /// Called whenever the accessor mutates the settings map.
    /// Default is a no-op; override to flag the record for persistence.
    fn mark_settings_dirty(&mut self) {}

    /// The settings accessor for this record.
    fn settings(&mut self) -> Settings<'_, Self>
    where
        Self: Sized,
    {
        Settings::new(self)
    }

    /// Keyed shortcut: the value at `key`, or `default` if absent.
    fn setting(&self, key: &str, default: Value) -> Value {
        self.settings_map().get(key).cloned().unwrap_or(default)
    }

    /// Alias dispatch: returns the accessor when `method` is `"settings"` or
    /// the alias configured via
    /// [`SettingsSchema::map_to`](crate::schema::SettingsSchema::map_to).
    /// Any other name is an [`SettingsError::UnknownMethod`].
    fn settings_as(&mut self, method: &str) -> Result<Settings<'_, Self>>
    where
        Self: Sized,
    {
        if method == "settings" || Self::settings_schema().alias() == Some(method) {
            Ok(self.settings())
        } else {
            Err(SettingsError::UnknownMethod(method.to_string()))
        }
    }
}
