//! On-disk behaviour of `FileStore`.

use roster_store::{FileStore, Storage, StoreError};

fn temp_store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let store = FileStore::new(dir.path().join("nested/data"));
    (dir, store)
}

#[test]
fn missing_key_reads_as_none() -> Result<(), StoreError> {
    let (_dir, store) = temp_store();
    assert_eq!(store.get("hr_employees_v1")?, None);
    Ok(())
}

#[test]
fn directory_is_created_on_first_write_only() -> Result<(), StoreError> {
    let (_dir, store) = temp_store();
    assert_eq!(store.get("hr_employees_v1")?, None);
    store.remove("hr_employees_v1")?;
    assert!(!store.dir().exists());

    store.set("hr_employees_v1", "[]")?;
    assert!(store.dir().is_dir());
    Ok(())
}

#[test]
fn set_then_get_returns_latest_value() -> Result<(), StoreError> {
    let (_dir, store) = temp_store();
    store.set("hr_employees_v1", "[]")?;
    store.set("hr_employees_v1", "[{\"id\":\"a\"}]")?;
    assert_eq!(store.get("hr_employees_v1")?.as_deref(), Some("[{\"id\":\"a\"}]"));

    let path = store.path_for("hr_employees_v1")?;
    assert!(path.ends_with("hr_employees_v1.json"));
    assert!(path.exists());
    Ok(())
}

#[test]
fn values_survive_reopening() -> Result<(), StoreError> {
    let (_dir, store) = temp_store();
    store.set("key", "persisted")?;
    let reopened = FileStore::new(store.dir());
    assert_eq!(reopened.get("key")?.as_deref(), Some("persisted"));
    Ok(())
}

#[test]
fn remove_deletes_file_and_is_idempotent() -> Result<(), StoreError> {
    let (_dir, store) = temp_store();
    store.set("key", "x")?;
    store.remove("key")?;
    store.remove("key")?;
    assert_eq!(store.get("key")?, None);
    Ok(())
}

#[test]
fn no_temporary_files_are_left_behind() -> Result<(), StoreError> {
    let (_dir, store) = temp_store();
    store.set("key", "x")?;
    let entries: Vec<_> = std::fs::read_dir(store.dir())
        .unwrap_or_else(|err| panic!("read_dir: {err}"))
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .collect();
    assert_eq!(entries.len(), 1);
    Ok(())
}

#[test]
fn invalid_keys_are_rejected() {
    let (_dir, store) = temp_store();
    assert!(matches!(store.set("../x", "v"), Err(StoreError::InvalidKey(_))));
}
