use sreg_storage::*;
use tempfile::TempDir;

#[test]
fn test_path_traversal_blocked() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().unwrap();

    assert!(storage.resolve("../etc/passwd").is_err());
    assert!(storage.resolve("foo/../../bar").is_err());
    assert!(storage.resolve("/etc/passwd").is_err());
}

#[test]
fn test_write_read_roundtrip() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().unwrap();

    let payload = b"Jane Doe\njane@example.com\n";
    storage.write("student_data.txt", payload).unwrap();
    assert!(storage.exists("student_data.txt").unwrap());

    let data = storage.read("student_data.txt").unwrap();
    assert_eq!(data, payload);

    let meta = storage.metadata("student_data.txt").unwrap();
    assert_eq!(meta.len(), payload.len() as u64);
}

#[test]
fn test_write_replaces_previous_content() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().unwrap();

    storage.write("student_picture.jpg", b"first photo, longer").unwrap();
    storage.write("student_picture.jpg", b"second").unwrap();

    assert_eq!(storage.read("student_picture.jpg").unwrap(), b"second");
}

#[test]
fn test_write_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().unwrap();

    storage.write("nested/dir/student_data.txt", b"x").unwrap();

    let names: Vec<String> = std::fs::read_dir(temp.path().join("nested/dir"))
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["student_data.txt".to_owned()]);
}

#[test]
fn test_delete_and_exists() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().unwrap();

    storage.write("tmp/file.txt", b"x").unwrap();
    assert!(storage.exists("tmp/file.txt").unwrap());

    storage.delete("tmp/file.txt").unwrap();
    assert!(!storage.exists("tmp/file.txt").unwrap());
    assert!(matches!(storage.delete("tmp/file.txt"), Err(StorageError::FileNotFound { .. })));
}

#[test]
fn test_exists_is_false_for_directories() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().unwrap();

    std::fs::create_dir(temp.path().join("student_picture.jpg")).unwrap();
    assert!(!storage.exists("student_picture.jpg").unwrap());
}

#[test]
fn test_read_missing_returns_file_not_found() {
    let temp = TempDir::new().unwrap();
    let storage = Storage::builder().root(temp.path()).connect().unwrap();

    let err = storage.read("missing.bin").expect_err("expected error");
    match err {
        StorageError::FileNotFound { .. } => {},
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_connect_without_create_requires_existing_root() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent");

    let err = Storage::builder().root(&missing).create(false).connect().expect_err("no root");
    assert!(matches!(err, StorageError::Io { .. }));

    let storage = Storage::builder().root(&missing).create(true).connect().unwrap();
    assert!(storage.root().is_dir());
}
