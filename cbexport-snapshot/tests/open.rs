use std::fs;

use cbexport_snapshot::{Error, SnapshotFile};
use tempfile::TempDir;

const SNAPSHOT: &str = r#"
[build]
home_directory = "/src"
home_output_directory = "/build"

[[projects]]
name = "demo"
output_directory = "/build"
"#;

#[test]
fn test_open_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cbexport.toml");
    fs::write(&path, SNAPSHOT).unwrap();

    let file = SnapshotFile::open(&path).unwrap();
    assert_eq!(file.path(), path.as_path());
    assert_eq!(file.content(), SNAPSHOT);
    assert_eq!(file.snapshot().projects[0].name, "demo");
}

#[test]
fn test_open_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{"build": {"home_directory": "/src", "home_output_directory": "/build"}}"#,
    )
    .unwrap();

    let file = SnapshotFile::open(&path).unwrap();
    assert!(file.snapshot().projects.is_empty());
}

#[test]
fn test_open_missing() {
    let dir = TempDir::new().unwrap();
    let err = SnapshotFile::open(dir.path().join("missing.toml")).err().unwrap();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_open_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.yaml");
    fs::write(&path, SNAPSHOT).unwrap();

    let err = SnapshotFile::open(&path).err().unwrap();
    assert!(matches!(*err, Error::UnsupportedFormat { .. }));
}

#[test]
fn test_policy_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cbexport.toml");
    fs::write(&path, SNAPSHOT).unwrap();

    let mut file = SnapshotFile::open(&path).unwrap();
    file.snapshot_mut().export.root_list_files = true;
    assert!(file.snapshot().export.root_list_files);
}
