//! # Lifecycle Hooks
//!
//! Default-seeding and allow-listing around a record's persistence lifecycle.
//!
//! These are plain functions the host's create/save routines call explicitly
//! (or let [`SettingsStore`](crate::store::record_store::SettingsStore) call
//! for them). They only mutate the in-memory settings field; no I/O happens
//! here.
//!
//! - [`on_creating`]: before the first write. Empty settings are replaced
//!   with the schema's defaults; pre-set settings are left alone.
//! - [`on_saving`]: before every write. When the schema declares an
//!   allow-list, keys outside it are dropped. Order and values of retained
//!   keys are unchanged.

use crate::model::HasSettings;

/// Seed a newly created record's settings with its type's defaults.
///
/// A no-op when the record already carries any settings, so values set
/// before the first save always win over defaults.
pub fn on_creating<R: HasSettings>(record: &mut R) {
    if record.settings_map().is_empty() {
        *record.settings_map_mut() = R::settings_schema().defaults().clone();
    }
}

/// Filter a record's settings against its type's allow-list.
///
/// A no-op when the schema declares no allow-list.
pub fn on_saving<R: HasSettings>(record: &mut R) {
    let schema = R::settings_schema();
    if !schema.restricts_keys() {
        return;
    }
    record.settings_map_mut().retain(|key, _| schema.allows(key));
}
