//! Shared fixtures: sample record types and a tempdir-backed store.

use once_cell::sync::Lazy;

use crate::model::{HasSettings, SettingsMap};
use crate::schema::SettingsSchema;

static SAMPLE_SCHEMA: Lazy<SettingsSchema> = Lazy::new(|| {
    SettingsSchema::new()
        .default_value("theme", "light")
        .default_value("notifications", true)
        .allow("theme")
        .allow("notifications")
        .allow("locale")
        .map_to("config")
});

static FREE_FORM_SCHEMA: Lazy<SettingsSchema> = Lazy::new(SettingsSchema::new);

/// A record type with defaults, an allow-list, an accessor alias and a
/// dirty flag, exercising every schema knob.
#[derive(Debug, Default)]
pub struct SampleRecord {
    pub settings: SettingsMap,
    pub dirty: bool,
}

impl SampleRecord {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasSettings for SampleRecord {
    fn settings_schema() -> &'static SettingsSchema {
        &SAMPLE_SCHEMA
    }

    fn settings_map(&self) -> &SettingsMap {
        &self.settings
    }

    fn settings_map_mut(&mut self) -> &mut SettingsMap {
        &mut self.settings
    }

    fn mark_settings_dirty(&mut self) {
        self.dirty = true;
    }
}

/// A record type with an entirely empty schema: no defaults, unrestricted
/// keys, no alias.
#[derive(Debug, Default)]
pub struct FreeForm {
    pub settings: SettingsMap,
}

impl FreeForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasSettings for FreeForm {
    fn settings_schema() -> &'static SettingsSchema {
        &FREE_FORM_SCHEMA
    }

    fn settings_map(&self) -> &SettingsMap {
        &self.settings
    }

    fn settings_map_mut(&mut self) -> &mut SettingsMap {
        &mut self.settings
    }
}

#[cfg(test)]
pub use env::TestEnv;
