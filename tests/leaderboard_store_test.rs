//! Tests for the file-backed leaderboard.

use noughts_and_crosses::{Leaderboard, LeaderboardStore};
use tempfile::TempDir;

/// Creates a store inside a fresh temporary directory. The directory handle
/// must stay in scope to keep the files alive.
fn setup_store() -> (TempDir, LeaderboardStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
    (dir, store)
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, store) = setup_store();
    let leaderboard = store.load().expect("Load failed");
    assert!(leaderboard.is_empty());
}

#[test]
fn test_save_is_additive() {
    let (_dir, store) = setup_store();

    store.save("Alice", 3).expect("Save failed");
    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.get("Alice"), Some(3));
    assert_eq!(loaded.len(), 1);

    store.save("Alice", -1).expect("Save failed");
    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.get("Alice"), Some(2));
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_save_keeps_other_players() {
    let (_dir, store) = setup_store();
    store.save("Alice", 1).expect("Save failed");
    store.save("Bob", -2).expect("Save failed");
    store.save("Alice", 0).expect("Save failed");

    let loaded = store.load().expect("Load failed");
    let entries: Vec<(&str, i64)> = loaded.iter().collect();
    assert_eq!(entries, vec![("Alice", 1), ("Bob", -2)]);
}

#[test]
fn test_write_then_load_round_trips() {
    let (_dir, store) = setup_store();
    let written: Leaderboard = [
        ("Carol".to_string(), 4),
        ("Dave".to_string(), -7),
        ("Ünïcødé".to_string(), 0),
    ]
    .into_iter()
    .collect();

    store.write(&written).expect("Write failed");
    assert_eq!(store.load().expect("Load failed"), written);
}

#[test]
fn test_file_is_a_json_object() {
    let (_dir, store) = setup_store();
    store.save("Alice", 3).expect("Save failed");

    let content = std::fs::read_to_string(store.path()).expect("Read failed");
    let value: serde_json::Value = serde_json::from_str(&content).expect("Not JSON");
    assert_eq!(value, serde_json::json!({ "Alice": 3 }));
}

#[test]
fn test_reads_file_written_by_hand() {
    let (_dir, store) = setup_store();
    std::fs::write(store.path(), r#"{"Eve": 5, "Frank": -1}"#).expect("Write failed");

    let loaded = store.load().expect("Load failed");
    assert_eq!(loaded.get("Eve"), Some(5));
    assert_eq!(loaded.get("Frank"), Some(-1));
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, store) = setup_store();
    std::fs::write(store.path(), "not json at all").expect("Write failed");

    let err = store.load().expect_err("Malformed file should fail");
    assert!(err.message.contains("Malformed"), "unexpected message: {}", err.message);
}

#[test]
fn test_save_over_malformed_file_leaves_it_alone() {
    let (_dir, store) = setup_store();
    std::fs::write(store.path(), r#"{"Alice": "three"}"#).expect("Write failed");

    assert!(store.save("Alice", 1).is_err());
    let content = std::fs::read_to_string(store.path()).expect("Read failed");
    assert_eq!(content, r#"{"Alice": "three"}"#);
}

#[test]
fn test_blank_name_is_rejected_without_writing() {
    let (_dir, store) = setup_store();
    assert!(store.save("", 2).is_err());
    assert!(!store.path().exists());
}

#[test]
fn test_no_temp_file_left_behind() {
    let (dir, store) = setup_store();
    store.save("Alice", 1).expect("Save failed");

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("Read dir failed")
        .map(|entry| entry.expect("Bad entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["leaderboard.txt".to_string()]);
}
