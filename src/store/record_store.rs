use super::backend::SettingsBackend;
use crate::codec;
use crate::error::{Result, SettingsError};
use crate::hooks::{on_creating, on_saving};
use crate::model::{HasSettings, SettingsMap};
use uuid::Uuid;

/// Persists settings columns through a backend, running the lifecycle hooks
/// around each write.
///
/// This is the explicit composition replacing implicit ORM hook injection:
/// a host that persists records itself can call [`on_creating`] /
/// [`on_saving`] and the codec directly instead.
pub struct SettingsStore<B: SettingsBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: SettingsBackend> SettingsStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// First write for a record: seed defaults, filter, encode, persist.
    pub fn create<R: HasSettings>(&self, id: &Uuid, record: &mut R) -> Result<()> {
        on_creating(record);
        on_saving(record);
        self.backend
            .write_settings(id, &codec::encode(record.settings_map()))
    }

    /// Subsequent write for a record: filter, encode, persist.
    pub fn save<R: HasSettings>(&self, id: &Uuid, record: &mut R) -> Result<()> {
        on_saving(record);
        self.backend
            .write_settings(id, &codec::encode(record.settings_map()))
    }

    /// Load the persisted settings map for a record id.
    ///
    /// Missing rows are an error; a present but corrupt column decodes
    /// fail-soft to an empty map.
    pub fn load(&self, id: &Uuid) -> Result<SettingsMap> {
        let text = self
            .backend
            .read_settings(id)?
            .ok_or(SettingsError::RecordNotFound(*id))?;
        Ok(codec::decode(Some(&text)))
    }

    /// Load persisted settings into a record, replacing its in-memory map.
    pub fn load_into<R: HasSettings>(&self, id: &Uuid, record: &mut R) -> Result<()> {
        *record.settings_map_mut() = self.load(id)?;
        Ok(())
    }

    /// Remove the persisted settings for a record id.
    pub fn delete(&self, id: &Uuid) -> Result<()> {
        self.backend.delete_settings(id)
    }
}
