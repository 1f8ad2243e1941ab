//! File-backed storage tests, each in its own temp directory.

use stickyboard::persistence::{FileStorage, Storage, StorageError};
use stickyboard::{Settings, Stickyboard};
use tempfile::TempDir;

#[test]
fn test_missing_key_reads_none() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    assert_eq!(storage.read("stickyboard").unwrap(), None);
}

#[test]
fn test_write_read_replace_remove() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(dir.path().join("nested"));

    storage.write("board", "first").unwrap();
    storage.write("board", "second").unwrap();
    assert_eq!(storage.read("board").unwrap().as_deref(), Some("second"));
    assert!(dir.path().join("nested").join("board.json").exists());

    storage.remove("board").unwrap();
    assert_eq!(storage.read("board").unwrap(), None);
    // Removing twice is fine
    storage.remove("board").unwrap();
}

#[test]
fn test_path_like_keys_rejected() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(dir.path());
    assert!(matches!(
        storage.write("../outside", "x"),
        Err(StorageError::InvalidKey(_))
    ));
    assert!(matches!(
        storage.read(".hidden"),
        Err(StorageError::InvalidKey(_))
    ));
}

#[test]
fn test_board_survives_restart_on_disk() {
    let dir = TempDir::new().unwrap();
    let t0 = std::time::Instant::now();

    let mut app = Stickyboard::new(
        Settings::default(),
        Box::new(FileStorage::new(dir.path())),
    );
    let id = app
        .create_item(stickyboard::Point::new(40.0, 80.0), t0)
        .unwrap();
    app.edit_text(&id, "on disk", t0).unwrap();
    app.flush().unwrap();
    drop(app);

    let app = Stickyboard::new(
        Settings::default(),
        Box::new(FileStorage::new(dir.path())),
    );
    assert_eq!(app.board().get_item(&id).unwrap().text, "on disk");
}
