use serde_json::json;
use std::fs;
use tallyapp::error::TallyError;
use tallyapp::store::backend::KvBackend;
use tallyapp::store::fs_backend::FsBackend;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("records"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_value_io() {
    let (_dir, backend) = setup();
    let value = json!({ "14": [{ "t": 1, "v": 3.5, "n": "coffee" }] });

    // 1. Write (creates the root on demand)
    backend.set("20227", &value).unwrap();
    assert!(backend.root().join("20227.json").exists());

    // 2. Read
    assert_eq!(backend.get("20227").unwrap(), value);

    // 3. Remove
    backend.remove("20227").unwrap();
    assert!(matches!(
        backend.get("20227"),
        Err(TallyError::KeyNotFound(_))
    ));
}

#[test]
fn test_fs_backend_missing_root() {
    let (_dir, backend) = setup();
    assert!(matches!(backend.get("20227"), Err(TallyError::KeyNotFound(_))));
    assert!(backend.list_keys().unwrap().is_empty());
    backend.remove("20227").unwrap();
    backend.clear().unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.set("20227", &json!({})).unwrap();
    backend.set("20227", &json!({ "1": [] })).unwrap();

    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(backend.get("20227").unwrap(), json!({ "1": [] }));
}

#[test]
fn test_fs_backend_list_keys_sorted_and_filtered() {
    let (_dir, backend) = setup();
    backend.set("202211", &json!({})).unwrap();
    backend.set("20227", &json!({})).unwrap();
    backend.set("20221", &json!({})).unwrap();
    fs::write(backend.root().join("tally.toml"), "log_level = \"debug\"\n").unwrap();
    fs::write(backend.root().join(".20227-stale.tmp"), "{}").unwrap();

    assert_eq!(
        backend.list_keys().unwrap(),
        vec!["20221", "202211", "20227"]
    );
}

#[test]
fn test_fs_backend_clear_keeps_other_files() {
    let (_dir, backend) = setup();
    backend.set("20227", &json!({})).unwrap();
    backend.set("20228", &json!({})).unwrap();
    let config = backend.root().join("tally.toml");
    fs::write(&config, "").unwrap();

    backend.clear().unwrap();
    assert!(backend.list_keys().unwrap().is_empty());
    assert!(config.exists());
}

#[test]
fn test_fs_backend_corrupt_value_is_serialization_error() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    fs::write(backend.root().join("20227.json"), "{ not json").unwrap();
    assert!(matches!(
        backend.get("20227"),
        Err(TallyError::Serialization(_))
    ));
}

#[test]
fn test_fs_backend_rejects_path_keys() {
    let (_dir, backend) = setup();
    assert!(matches!(
        backend.set("../outside", &json!(1)),
        Err(TallyError::InvalidKey(_))
    ));
    assert!(matches!(backend.get(""), Err(TallyError::InvalidKey(_))));
}
