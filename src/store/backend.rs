use crate::error::Result;
use uuid::Uuid;

/// Abstract interface for raw settings-column I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `SettingsStore` handles the "what" (hooks, codec, policy).
pub trait SettingsBackend {
    /// Read the raw column text for a record.
    /// Returns Ok(None) if no settings were ever written for this id.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_settings(&self, id: &Uuid) -> Result<Option<String>>;

    /// Write column text for a record.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_settings(&self, id: &Uuid, text: &str) -> Result<()>;

    /// Delete the column for a record. Deleting an absent id is not an error.
    fn delete_settings(&self, id: &Uuid) -> Result<()>;

    /// List all record ids with persisted settings.
    fn list_ids(&self) -> Result<Vec<Uuid>>;
}
