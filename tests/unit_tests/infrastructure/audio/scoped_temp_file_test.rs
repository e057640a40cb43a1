use voxbridge::infrastructure::audio::ScopedTempFile;

use crate::fixtures::dir_is_empty;

#[test]
fn given_bytes_when_persisting_then_file_holds_them_until_guard_drops() {
    let dir = tempfile::tempdir().unwrap();

    let guard = ScopedTempFile::persist(dir.path(), ".ogg", b"payload").unwrap();
    let path = guard.path().to_path_buf();

    assert_eq!(std::fs::read(&path).unwrap(), b"payload");
    assert!(path.to_string_lossy().ends_with(".ogg"));

    drop(guard);

    assert!(!path.exists());
    assert!(dir_is_empty(dir.path()));
}

#[test]
fn given_reserved_file_when_guard_drops_then_file_is_removed() {
    let dir = tempfile::tempdir().unwrap();

    let guard = ScopedTempFile::reserve(dir.path(), ".wav").unwrap();
    let path = guard.path().to_path_buf();
    assert!(path.exists());

    drop(guard);

    assert!(!path.exists());
}

#[test]
fn given_file_already_deleted_when_guard_drops_then_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let guard = ScopedTempFile::reserve(dir.path(), ".wav").unwrap();

    std::fs::remove_file(guard.path()).unwrap();
    drop(guard);

    assert!(dir_is_empty(dir.path()));
}

#[test]
fn given_missing_directory_when_persisting_then_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let result = ScopedTempFile::persist(&missing, ".wav", b"x");

    assert!(result.is_err());
}

#[test]
fn given_live_guard_when_reading_path_then_points_at_prefixed_file_in_target_dir() {
    let dir = tempfile::tempdir().unwrap();

    let guard = ScopedTempFile::persist(dir.path(), ".mp3", b"abc").unwrap();

    assert_eq!(guard.path().parent(), Some(dir.path()));
    let name = guard.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("voxbridge-"));
    assert!(name.ends_with(".mp3"));

    drop(guard);
    assert!(dir_is_empty(dir.path()));
}
