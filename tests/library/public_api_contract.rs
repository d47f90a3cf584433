use assert_fs::TempDir;
use assert_fs::prelude::*;
use crudgen::{AppError, ArtifactKind, WriteOutcome};
use predicates::prelude::*;

#[test]
fn generate_at_reports_every_artifact_in_commit_order() {
    let temp = TempDir::new().unwrap();

    let report = crudgen::generate_at(temp.path(), "Widget", &["color", "weight"], None).unwrap();

    assert_eq!(report.resource(), "Widget");
    assert!(!report.has_failures());
    let kinds: Vec<ArtifactKind> = report.artifacts().iter().map(|a| a.kind).collect();
    assert_eq!(kinds.len(), 14);
    assert_eq!(kinds[4], ArtifactKind::Schema);
    assert_eq!(kinds[7], ArtifactKind::EntryPoint);

    temp.child("models/Widget.js").assert(predicate::str::contains("Please provide color"));
    temp.child("routes/Widget.js")
        .assert(predicate::str::contains("router.route(\"/delete/:id\").delete(deleteWidget);"));
    temp.child("middleware").assert(predicate::path::is_dir());
}

#[test]
fn generate_at_is_idempotent_for_create_once_artifacts() {
    let temp = TempDir::new().unwrap();
    crudgen::generate_at(temp.path(), "Widget", &["color"], None).unwrap();

    let report = crudgen::generate_at(temp.path(), "Widget", &["color"], None).unwrap();

    assert_eq!(report.created().len(), 0);
    assert_eq!(report.skipped().len(), 13);
    assert_eq!(report.outcome_for("index.js"), Some(&WriteOutcome::Appended));
}

#[test]
fn validation_errors_are_returned_before_side_effects() {
    let temp = TempDir::new().unwrap();
    let empty: [&str; 0] = [];

    let err = crudgen::generate_at(temp.path(), "Widget", &empty, None).unwrap_err();

    assert!(matches!(err, AppError::EmptyFieldSet(_)));
    temp.child("models").assert(predicate::path::missing());
    temp.child("index.js").assert(predicate::path::missing());
}

#[test]
fn preview_at_matches_written_artifact() {
    let temp = TempDir::new().unwrap();

    let preview = crudgen::preview_at(temp.path(), "handler", "Widget", &["color"], None).unwrap();
    temp.child("controllers").assert(predicate::path::missing());

    crudgen::generate_at(temp.path(), "Widget", &["color"], None).unwrap();
    let written = std::fs::read_to_string(temp.child("controllers/Widget.js").path()).unwrap();
    assert_eq!(written, preview);
}
