use super::backend::SettingsBackend;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn settings_filename(id: &Uuid) -> String {
        format!("settings-{}.json", id)
    }

    fn settings_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(Self::settings_filename(id))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl SettingsBackend for FsBackend {
    fn read_settings(&self, id: &Uuid) -> Result<Option<String>> {
        let path = self.settings_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_settings(&self, id: &Uuid, text: &str) -> Result<()> {
        self.ensure_root()?;

        let target_path = self.settings_path(id);

        // Atomic write
        let tmp_path = self.root.join(format!(".settings-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, text)?;
        fs::rename(&tmp_path, target_path)?;

        Ok(())
    }

    fn delete_settings(&self, id: &Uuid) -> Result<()> {
        let path = self.settings_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<Uuid>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                let uuid_part = name
                    .strip_prefix("settings-")
                    .and_then(|rest| rest.strip_suffix(".json"));
                if let Some(uuid_part) = uuid_part {
                    if let Ok(id) = Uuid::parse_str(uuid_part) {
                        ids.push(id);
                    }
                }
            }
        }
        Ok(ids)
    }
}
