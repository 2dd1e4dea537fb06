use model_settings::store::backend::SettingsBackend;
use model_settings::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_column_io() {
    let (_dir, backend) = setup();
    let id = Uuid::new_v4();

    // 1. Write
    backend.write_settings(&id, r#"{"theme":"dark"}"#).unwrap();

    // 2. Read
    let text = backend.read_settings(&id).unwrap();
    assert_eq!(text, Some(r#"{"theme":"dark"}"#.to_string()));

    // 3. Delete
    backend.delete_settings(&id).unwrap();
    let text_after = backend.read_settings(&id).unwrap();
    assert_eq!(text_after, None);
}

#[test]
fn test_fs_backend_read_missing_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read_settings(&Uuid::new_v4()).unwrap(), None);
}

#[test]
fn test_fs_backend_delete_missing_is_ok() {
    let (_dir, backend) = setup();
    backend.delete_settings(&Uuid::new_v4()).unwrap();
}

#[test]
fn test_fs_backend_overwrite_replaces_column() {
    let (_dir, backend) = setup();
    let id = Uuid::new_v4();

    backend.write_settings(&id, r#"{"a":1}"#).unwrap();
    backend.write_settings(&id, r#"{"b":2}"#).unwrap();

    assert_eq!(
        backend.read_settings(&id).unwrap(),
        Some(r#"{"b":2}"#.to_string())
    );
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    let id = Uuid::new_v4();

    backend.write_settings(&id, "{}").unwrap();

    // Verify file exists
    let expected_path = dir.path().join(format!("settings-{}.json", id));
    assert!(expected_path.exists());

    // Verify content on disk
    let on_disk = fs::read_to_string(&expected_path).unwrap();
    assert_eq!(on_disk, "{}");

    // Verify NO .tmp files are left behind
    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_list_ids() {
    let (dir, backend) = setup();

    let id1 = Uuid::new_v4();
    let id2 = Uuid::new_v4();

    backend.write_settings(&id1, "{}").unwrap();
    backend.write_settings(&id2, "{}").unwrap();

    // Create junk files to ensure they're ignored
    fs::write(dir.path().join("junk.json"), "ignore me").unwrap();
    fs::write(dir.path().join("settings-invalid-uuid.json"), "ignore me too").unwrap();

    let ids = backend.list_ids().unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&id1));
    assert!(ids.contains(&id2));
}

#[test]
fn test_fs_backend_list_ids_on_missing_root() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("never-created"));
    assert!(backend.list_ids().unwrap().is_empty());
}
