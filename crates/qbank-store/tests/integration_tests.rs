//! Integration tests for qbank-store
//!
//! These tests exercise the JSON directory store against a real filesystem.

use qbank_domain::{field, CollectionStore, QuestionGroup};
use qbank_store::{JsonDirStore, StoreError};
use std::fs;
use tempfile::TempDir;

const RUST_BANK: &str = r#"{
  "technology": "rust",
  "open_questions": [
    {
      "id": "rs-001",
      "question": "What is ownership?",
      "answer": "Each value has a single owner",
      "difficulty": "junior"
    }
  ],
  "mcq_questions": [
    {
      "id": "rs-101",
      "title": "Borrowing",
      "description": "Which borrow is allowed?",
      "options": [
        "a",
        "b"
      ],
      "positions": [
        "backend"
      ]
    }
  ]
}"#;

fn seeded() -> (TempDir, JsonDirStore) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rust.json"), RUST_BANK).unwrap();
    fs::write(dir.path().join("go.json"), r#"{"open_questions": []}"#).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a collection").unwrap();
    fs::create_dir(dir.path().join("archive.json")).unwrap();
    let store = JsonDirStore::new(dir.path());
    (dir, store)
}

#[test]
fn test_list_collections_sorted_json_files_only() {
    let (_dir, store) = seeded();
    assert_eq!(store.list_collections().unwrap(), vec!["go", "rust"]);
}

#[test]
fn test_missing_directory() {
    let store = JsonDirStore::new("/definitely/not/here/qbank");
    assert!(matches!(
        store.list_collections(),
        Err(StoreError::DirectoryNotFound(_))
    ));
}

#[test]
fn test_load_reads_both_groups() {
    let (_dir, store) = seeded();
    let rust = store.load_collection("rust").unwrap();

    assert_eq!(rust.len(), 2);
    assert_eq!(rust.group(QuestionGroup::OpenEnded)[0].body(), "What is ownership?");
    assert!(rust.group(QuestionGroup::MultipleChoice)[0]
        .positions()
        .contains("backend"));
}

#[test]
fn test_unchanged_save_is_byte_identical() {
    let (dir, store) = seeded();
    let rust = store.load_collection("rust").unwrap();
    store.save_collection(&rust).unwrap();

    let written = fs::read_to_string(dir.path().join("rust.json")).unwrap();
    assert_eq!(written, RUST_BANK);
}

#[test]
fn test_update_rewrites_in_place() {
    let (dir, store) = seeded();
    store
        .update_collection("rust", |c| {
            for record in c.records_mut() {
                record.set_list(field::COMPANY_TYPE, ["faang"]);
            }
        })
        .unwrap();

    let reloaded = store.load_collection("rust").unwrap();
    assert!(reloaded.records().all(|(_, r)| r.company_type().contains("faang")));

    // Unrelated keys keep their place and no temporary files are left behind
    let written = fs::read_to_string(dir.path().join("rust.json")).unwrap();
    let tech = written.find("\"technology\"").unwrap();
    let open = written.find("\"open_questions\"").unwrap();
    assert!(tech < open);
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_load_errors() {
    let (dir, store) = seeded();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("list.json"), "[1, 2]").unwrap();

    assert!(matches!(
        store.load_collection("broken"),
        Err(StoreError::Json { .. })
    ));
    assert!(matches!(
        store.load_collection("list"),
        Err(StoreError::Collection(_))
    ));
    assert!(matches!(
        store.load_collection("absent"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_non_ascii_text_written_verbatim() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("i18n.json"),
        r#"{"open_questions": [{"id": "é", "title": "Qu'est-ce qu'un ownership ?"}]}"#,
    )
    .unwrap();
    let store = JsonDirStore::new(dir.path());
    store.update_collection("i18n", |_| ()).unwrap();

    let written = fs::read_to_string(dir.path().join("i18n.json")).unwrap();
    assert!(written.contains("\"é\""));
}

#[cfg(unix)]
#[test]
fn test_rewrite_keeps_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, store) = seeded();
    let path = dir.path().join("rust.json");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    store.update_collection("rust", |_| ()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
