use jotapp::store::backend::StorageBackend;
use jotapp::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_missing_key_reads_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.read("notes").unwrap(), None);
}

#[test]
fn test_fs_backend_write_then_read() {
    let (_dir, backend) = setup();
    backend.write("notes", "[]").unwrap();
    assert_eq!(backend.read("notes").unwrap(), Some("[]".to_string()));

    backend.write("notes", "[1]").unwrap();
    assert_eq!(backend.read("notes").unwrap(), Some("[1]".to_string()));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write("notes", "Atomic").unwrap();

    let expected_path = dir.path().join("notes.json");
    assert_eq!(backend.location("notes"), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "Atomic");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_failed_rename_removes_tmp_file() {
    let (dir, backend) = setup();
    // A non-empty directory at the target path makes the rename fail
    let target = dir.path().join("notes.json");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), "x").unwrap();

    assert!(backend.write("notes", "[]").is_err());

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());

    backend.write("notes", "[]").unwrap();
    assert!(nested.join("notes.json").exists());
}

#[test]
fn test_fs_backend_keys_are_separate_files() {
    let (dir, backend) = setup();
    backend.write("notes", "one").unwrap();
    backend.write("scratch", "two").unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("notes.json")).unwrap(), "one");
    assert_eq!(fs::read_to_string(dir.path().join("scratch.json")).unwrap(), "two");
}
