//! Loading exported resource trees.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use synth_ingest::{IngestError, SkipReason, load_resources_from_dir};

fn write(dir: &TempDir, relative: &str, contents: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, contents).expect("write file");
}

#[test]
fn bundles_are_ignored() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "patient.json", &json!({"resourceType": "Patient", "id": "123"}).to_string());
    write(
        &dir,
        "bundle.json",
        &json!({"resourceType": "Bundle", "id": "bundle", "entry": []}).to_string(),
    );

    let result = load_resources_from_dir(dir.path()).expect("load");

    assert_eq!(result.resources.len(), 1);
    assert_eq!(result.resources[0]["resourceType"], "Patient");
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].reason, SkipReason::Bundle);
}

#[test]
fn malformed_files_are_skipped_and_loading_continues() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "a/broken.json", "{ not json");
    write(&dir, "a/list.json", "[1, 2, 3]");
    write(&dir, "b/observation.json", r#"{"resourceType": "Observation", "id": "o1"}"#);
    write(&dir, "b/readme.txt", "ignored");

    let result = load_resources_from_dir(dir.path()).expect("load");

    assert_eq!(result.resources.len(), 1);
    assert_eq!(result.resources[0]["id"], "o1");
    let reasons: Vec<&SkipReason> = result.skipped.iter().map(|file| &file.reason).collect();
    assert!(matches!(reasons[0], SkipReason::InvalidJson(_)));
    assert_eq!(reasons[1], &SkipReason::NotAnObject);
}

#[test]
fn resources_come_back_in_path_order() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "patient_002/x.json", r#"{"resourceType": "Patient", "id": "second"}"#);
    write(&dir, "patient_001/x.json", r#"{"resourceType": "Patient", "id": "first"}"#);

    let ids: Vec<String> = load_resources_from_dir(dir.path())
        .expect("load")
        .into_resources()
        .iter()
        .map(|resource| resource["id"].as_str().unwrap_or_default().to_string())
        .collect();

    assert_eq!(ids, ["first", "second"]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope");

    let err = load_resources_from_dir(&missing).expect_err("must fail");

    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    assert!(err.to_string().starts_with("directory not found: "));
}

#[cfg(unix)]
#[test]
fn symlinked_folders_do_not_repeat_resources() {
    let dir = TempDir::new().expect("tempdir");
    write(&dir, "patient_001/patient_a.json", r#"{"resourceType": "Patient", "id": "a"}"#);
    std::os::unix::fs::symlink(dir.path(), dir.path().join("patient_001").join("loop"))
        .expect("symlink");

    let result = load_resources_from_dir(dir.path()).expect("load");

    assert_eq!(result.resources.len(), 1);
    assert_eq!(result.resources[0]["id"], "a");
    assert!(result.skipped.is_empty());
}
