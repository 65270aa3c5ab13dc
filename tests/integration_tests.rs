// Integration tests for pdfintake.
//
// These tests cover the intake state machine — validation, deduplication,
// selection lifecycle — using plain temp files; validation never opens a
// file, so the content does not need to be a real PDF here. The extraction
// pipeline over real PDF fixtures lives in `tests/extraction_tests.rs`.

use std::fs;
use std::path::{Path, PathBuf};

use pdfintake::{
    validate, AddOutcome, IntakeConfig, IntakeController, IntakeError, OpenError, SelectionSet,
};

/// Create a file with the given name; content is irrelevant for intake.
fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"%PDF-1.4 stub").unwrap();
    path
}

// ── IntakeConfig ─────────────────────────────────────────────────────────────

#[test]
fn default_config_writes_nothing() {
    let cfg = IntakeConfig::default();
    assert!(!cfg.write_text_artifacts);
    assert!(cfg.output_directory.is_none());
}

// ── PathValidator ────────────────────────────────────────────────────────────

#[test]
fn accepts_pdf_extension_any_case() {
    let dir = tempfile::tempdir().unwrap();
    let lower = touch(dir.path(), "a.pdf");
    let upper = touch(dir.path(), "A.PDF");
    let mixed = touch(dir.path(), "b.Pdf");

    assert!(validate::is_acceptable(&lower));
    assert!(validate::is_acceptable(&upper));
    assert!(validate::is_acceptable(&mixed));
}

#[test]
fn rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!validate::is_acceptable(dir.path().join("missing.pdf")));
}

#[test]
fn rejects_wrong_or_absent_extension() {
    let dir = tempfile::tempdir().unwrap();
    let pdfx = touch(dir.path(), "report.pdfx");
    let txt = touch(dir.path(), "notes.txt");
    let bare = touch(dir.path(), "a");

    assert!(!validate::is_acceptable(&pdfx));
    assert!(!validate::is_acceptable(&txt));
    assert!(!validate::is_acceptable(&bare));
}

#[test]
fn rejects_directory_named_like_a_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let fake = dir.path().join("dir.pdf");
    fs::create_dir(&fake).unwrap();

    assert!(!validate::is_acceptable(&fake));
}

// ── SelectionSet ─────────────────────────────────────────────────────────────

#[test]
fn add_outcome_defaults_to_zero() {
    assert_eq!(AddOutcome::default(), AddOutcome { accepted: 0, duplicate: 0, rejected: 0 });
}

#[test]
fn same_path_twice_is_one_accept_one_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let x = touch(dir.path(), "x.pdf");

    let mut selection = SelectionSet::new();
    let outcome = selection.add([&x, &x]);

    assert_eq!(outcome, AddOutcome { accepted: 1, duplicate: 1, rejected: 0 });
    assert_eq!(selection.list().len(), 1);
}

#[test]
fn missing_candidate_counts_as_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let mut selection = SelectionSet::new();
    let outcome = selection.add([dir.path().join("missing.pdf")]);

    assert_eq!(outcome, AddOutcome { accepted: 0, duplicate: 0, rejected: 1 });
    assert!(selection.is_empty());
}

#[test]
fn dedup_is_by_canonical_path() {
    let dir = tempfile::tempdir().unwrap();
    let x = touch(dir.path(), "x.pdf");
    // A second spelling of the same file.
    let roundabout = dir.path().join(".").join("x.pdf");

    let mut selection = SelectionSet::new();
    let outcome = selection.add([x, roundabout]);

    assert_eq!(outcome.accepted, 1);
    assert_eq!(outcome.duplicate, 1);
    assert_eq!(selection.len(), 1);
}

#[test]
fn list_preserves_first_accepted_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = touch(dir.path(), "a.pdf");
    let b = touch(dir.path(), "b.pdf");
    let c = touch(dir.path(), "c.pdf");

    let mut selection = SelectionSet::new();
    selection.add([&b, &a]);
    selection.add([&c, &a]); // re-adding `a` must not move it

    let names: Vec<String> = selection
        .list()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["b.pdf", "a.pdf", "c.pdf"]);
}

#[test]
fn remove_drops_exactly_the_named_path() {
    let dir = tempfile::tempdir().unwrap();
    let a = touch(dir.path(), "a.pdf");
    let b = touch(dir.path(), "b.pdf");
    let c = touch(dir.path(), "c.pdf");

    let mut selection = SelectionSet::new();
    selection.add([&a, &b, &c]);

    assert!(selection.remove(&b));
    let names: Vec<String> = selection
        .list()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.pdf", "c.pdf"]);

    // Removing it again finds nothing.
    assert!(!selection.remove(&b));
}

#[test]
fn clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let a = touch(dir.path(), "a.pdf");

    let mut selection = SelectionSet::new();
    selection.add([&a]);
    assert!(!selection.is_empty());

    selection.clear();
    assert!(selection.is_empty());
    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn list_is_a_copy_not_a_live_view() {
    let dir = tempfile::tempdir().unwrap();
    let a = touch(dir.path(), "a.pdf");

    let mut selection = SelectionSet::new();
    selection.add([&a]);

    let snapshot = selection.list();
    selection.clear();

    assert_eq!(snapshot.len(), 1);
    assert!(selection.is_empty());
}

// ── IntakeController ─────────────────────────────────────────────────────────

#[test]
fn readiness_follows_the_selection() {
    let dir = tempfile::tempdir().unwrap();
    let a = touch(dir.path(), "a.pdf");

    let mut intake = IntakeController::new(IntakeConfig::default());
    assert!(!intake.is_ready());

    intake.add([&a]);
    assert!(intake.is_ready());

    intake.clear();
    assert!(!intake.is_ready());
}

#[test]
fn process_on_empty_selection_fails_fast() {
    let intake = IntakeController::new(IntakeConfig::default());

    let err = intake.process().unwrap_err();
    assert!(matches!(err, IntakeError::EmptySelection));
}

#[test]
fn process_after_clear_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let a = touch(dir.path(), "a.pdf");

    let mut intake = IntakeController::new(IntakeConfig::default());
    intake.add([&a]);
    intake.clear();

    assert!(!intake.is_ready());
    assert!(matches!(intake.process(), Err(IntakeError::EmptySelection)));
}

#[test]
fn add_directory_takes_only_pdf_files() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "b.pdf");
    touch(dir.path(), "a.PDF");
    touch(dir.path(), "notes.txt");
    fs::create_dir(dir.path().join("sub.pdf")).unwrap();

    let mut intake = IntakeController::new(IntakeConfig::default());
    let outcome = intake.add_directory(dir.path()).unwrap();

    assert_eq!(outcome.accepted, 2);
    assert_eq!(outcome.rejected, 0);

    let names: Vec<String> = intake
        .list()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.PDF", "b.pdf"]);
}

#[test]
fn add_directory_on_missing_dir_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let mut intake = IntakeController::new(IntakeConfig::default());
    let err = intake.add_directory(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, IntakeError::Io(_)));
}

// ── Error display ────────────────────────────────────────────────────────────

#[test]
fn error_display_is_non_empty() {
    let path = PathBuf::from("/tmp/sample.pdf");
    let errors: &[OpenError] = &[
        OpenError::NotFound(path.clone()),
        OpenError::Unreadable(path.clone(), "permission denied".into()),
        OpenError::Malformed(path.clone(), "bad header".into()),
        OpenError::EncryptedUnsupported(path.clone()),
    ];
    for e in errors {
        assert!(!e.to_string().is_empty(), "empty display for {e:?}");
        assert_eq!(e.path(), path.as_path());
    }

    assert!(!IntakeError::EmptySelection.to_string().is_empty());
}
