//! Per-record-type settings configuration.
//!
//! Each record type supplies one [`SettingsSchema`] describing its seed
//! defaults, its allow-list, and an optional accessor alias. The schema is
//! the single source of truth for how a type's settings behave; adding a
//! default or restricting a key means changing the schema, not the hooks.

use serde_json::Value;

use crate::model::SettingsMap;

/// Configuration a record type declares for its settings blob.
///
/// All fields have defined defaults: empty defaults map (nothing seeded),
/// empty allow-list (no filtering), no alias.
#[derive(Debug, Clone, Default)]
pub struct SettingsSchema {
    defaults: SettingsMap,
    allowed: Vec<String>,
    alias: Option<String>,
}

impl SettingsSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seed value applied when a record is created with empty settings.
    pub fn default_value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.to_string(), value.into());
        self
    }

    /// Add a key to the allow-list. Once any key is allowed, every key not
    /// on the list is dropped before a save.
    pub fn allow(mut self, key: &str) -> Self {
        self.allowed.push(key.to_string());
        self
    }

    /// Expose the settings accessor under an alias name (see
    /// [`HasSettings::settings_as`](crate::model::HasSettings::settings_as)).
    pub fn map_to(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    pub fn defaults(&self) -> &SettingsMap {
        &self.defaults
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Whether this schema declares an allow-list at all.
    /// An empty list means "unrestricted", not "drop everything".
    pub fn restricts_keys(&self) -> bool {
        !self.allowed.is_empty()
    }

    /// Whether a key survives a save for this schema.
    pub fn allows(&self, key: &str) -> bool {
        self.allowed.is_empty() || self.allowed.iter().any(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_is_unrestricted() {
        let schema = SettingsSchema::new();
        assert!(schema.defaults().is_empty());
        assert!(!schema.restricts_keys());
        assert!(schema.allows("anything"));
        assert_eq!(schema.alias(), None);
    }

    #[test]
    fn builder_collects_defaults_and_allow_list() {
        let schema = SettingsSchema::new()
            .default_value("theme", "light")
            .default_value("retries", 3)
            .allow("theme")
            .allow("retries");

        assert_eq!(schema.defaults().len(), 2);
        assert_eq!(schema.defaults()["theme"], "light");
        assert_eq!(schema.defaults()["retries"], 3);
        assert_eq!(schema.allowed(), ["theme", "retries"]);
    }

    #[test]
    fn allow_list_restricts_other_keys() {
        let schema = SettingsSchema::new().allow("theme");
        assert!(schema.restricts_keys());
        assert!(schema.allows("theme"));
        assert!(!schema.allows("debug"));
    }

    #[test]
    fn alias_is_recorded() {
        let schema = SettingsSchema::new().map_to("config");
        assert_eq!(schema.alias(), Some("config"));
    }
}
