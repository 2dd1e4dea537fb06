//! # model-settings
//!
//! Attach a JSON-backed "settings" blob to a persistence record type:
//! seed new records with defaults, restrict which keys survive a save, and
//! work with the blob through a small `get/set/has/forget/all` accessor.
//!
//! ## Pieces
//!
//! - [`HasSettings`]: the trait a record type implements (a map field plus a
//!   static schema; everything else is provided).
//! - [`SettingsSchema`]: per-type configuration — defaults, allow-list,
//!   accessor alias.
//! - [`hooks`]: `on_creating` / `on_saving`, called by the host's
//!   create/save routines (or by [`store::SettingsStore`]).
//! - [`codec`]: persisted text ⇄ map conversion, fail-soft by default.
//! - [`store`]: a backend trait with filesystem and in-memory
//!   implementations, for hosts without their own persistence layer.
//!
//! ## Usage
//!
//! ```
//! use model_settings::{HasSettings, SettingsMap, SettingsSchema};
//! use once_cell::sync::Lazy;
//! use serde_json::json;
//!
//! static SCHEMA: Lazy<SettingsSchema> = Lazy::new(|| {
//!     SettingsSchema::new()
//!         .default_value("theme", "light")
//!         .allow("theme")
//!         .allow("locale")
//!         .map_to("config")
//! });
//!
//! #[derive(Default)]
//! struct Site {
//!     settings: SettingsMap,
//! }
//!
//! impl HasSettings for Site {
//!     fn settings_schema() -> &'static SettingsSchema {
//!         &SCHEMA
//!     }
//!     fn settings_map(&self) -> &SettingsMap {
//!         &self.settings
//!     }
//!     fn settings_map_mut(&mut self) -> &mut SettingsMap {
//!         &mut self.settings
//!     }
//! }
//!
//! let mut site = Site::default();
//!
//! // Creation seeds the defaults because the map is empty.
//! model_settings::on_creating(&mut site);
//! assert_eq!(site.setting("theme", json!("dark")), "light");
//!
//! site.settings().set("locale", "en");
//! site.settings().set("debug", true);
//!
//! // Saving drops keys outside the allow-list.
//! model_settings::on_saving(&mut site);
//! assert!(site.settings().has("locale"));
//! assert!(!site.settings().has("debug"));
//!
//! // The accessor is also reachable under the configured alias.
//! let theme = site.settings_as("config").unwrap().get("theme", json!(null));
//! assert_eq!(theme, "light");
//! ```

pub mod accessor;
pub mod codec;
pub mod error;
pub mod hooks;
pub mod model;
pub mod schema;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use accessor::Settings;
pub use error::{Result, SettingsError};
pub use hooks::{on_creating, on_saving};
pub use model::{HasSettings, SettingsMap};
pub use schema::SettingsSchema;
