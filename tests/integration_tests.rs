use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

use wordtab::documents::DocumentRegistry;
use wordtab::files;
use wordtab::stats::StatisticsSnapshot;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_with_invalid_utf8_file() {
    cargo_bin_cmd!()
        .arg(fixture_path("invalid_utf8.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_cli_fails_on_any_bad_file() {
    cargo_bin_cmd!()
        .arg(fixture_path("sample.txt"))
        .arg("also-missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("also-missing.txt"));
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multi-document text editor"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordtab"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("sample.txt").exists());
    assert!(fixture_path("invalid_utf8.txt").exists());
}

#[test]
fn test_sample_fixture_statistics() {
    let file = files::read_document(&fixture_path("sample.txt")).unwrap();
    assert_eq!(file.name, "sample.txt");

    let snapshot = StatisticsSnapshot::compute(&file.text);
    assert_eq!(snapshot.word_count, 7);
    assert_eq!(snapshot.sentence_count, 3);
    assert_eq!(snapshot.paragraph_count, 2);
    assert_eq!(snapshot.most_common_word, "Hello");
}

#[test]
fn test_invalid_fixture_is_not_text() {
    let bytes = fs::read(fixture_path("invalid_utf8.txt")).unwrap();
    assert!(String::from_utf8(bytes).is_err());
    assert!(files::read_document(&fixture_path("invalid_utf8.txt")).is_err());
}

/// Two documents, edits and switching, as a front end would drive the registry
#[test]
fn test_registry_end_to_end() {
    let mut registry = DocumentRegistry::new();
    let published = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = published.clone();
    registry.subscribe(move |snapshot: &StatisticsSnapshot| sink.borrow_mut().push(snapshot.clone()));

    let first = registry.create_document("");
    assert_eq!(registry.snapshot(), &StatisticsSnapshot::default());

    registry.update_text(first, "Hello world. Hello again.\n\nNew paragraph here!");
    assert_eq!(registry.snapshot().word_count, 7);
    assert_eq!(registry.snapshot().sentence_count, 3);
    assert_eq!(registry.snapshot().paragraph_count, 2);
    assert_eq!(registry.snapshot().most_common_word, "Hello");

    let second = registry.create_document("Just one.");
    assert_eq!(registry.snapshot().word_count, 2);

    // Editing a background document publishes nothing
    let before = published.borrow().len();
    registry.update_text(first, "Changed.");
    assert_eq!(published.borrow().len(), before);

    registry.set_active(Some(first));
    assert_eq!(registry.snapshot().word_count, 1);

    registry.close_document(first);
    assert_eq!(registry.active_id(), None);
    assert_eq!(registry.snapshot(), &StatisticsSnapshot::default());

    registry.set_active(Some(second));
    assert_eq!(registry.active_text(), "Just one.");
    assert_eq!(published.borrow().last(), Some(&StatisticsSnapshot::compute("Just one.")));
}
