//! Writing subject graphs and datasets to disk.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use synth_generate::{GeneratorOptions, SubjectGraphGenerator};
use synth_model::{Reference, Resource, ResourceType, SubjectGraph};
use synth_output::{BundleType, ExportOptions, Exporter, OutputError};

fn generator(seed: u64) -> SubjectGraphGenerator {
    SubjectGraphGenerator::new(GeneratorOptions::new().with_seed(Some(seed)))
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("read file");
    serde_json::from_str(&text).expect("parse json")
}

fn entry_count(path: &Path) -> usize {
    read_json(path)["entry"]
        .as_array()
        .map(Vec::len)
        .expect("entry array")
}

#[test]
fn subject_export_writes_resources_and_bundle() {
    let dir = TempDir::new().expect("tempdir");
    let graph = generator(42).generate_subject_graph();
    let patient_gender = graph.patient().expect("patient").gender.clone();
    assert!(["male", "female", "other"].contains(&patient_gender.as_str()));

    let export = Exporter::default()
        .export_subject_graph(&graph, dir.path())
        .expect("export");

    assert_eq!(export.accepted, graph.len());
    assert_eq!(export.rejected, 0);
    assert_eq!(export.resource_files.len(), graph.len());
    assert_eq!(export.bundle_path, dir.path().join("bundle.json"));
    assert_eq!(entry_count(&export.bundle_path), export.accepted);

    let patient = graph.patient().expect("patient");
    let patient_file = dir.path().join(format!("patient_{}.json", patient.id));
    assert_eq!(read_json(&patient_file)["id"], patient.id.as_str());
}

#[test]
fn invalid_resources_are_skipped() {
    let dir = TempDir::new().expect("tempdir");
    let mut resources = generator(7).generate_subject_graph().into_resources();
    let broken_id = resources
        .iter_mut()
        .find_map(|resource| match resource {
            Resource::Observation(observation) => {
                observation.subject = Reference {
                    reference: "NotAReference".to_string(),
                };
                Some(observation.id.clone())
            }
            _ => None,
        })
        .expect("an observation");
    let graph = SubjectGraph::from_resources(resources);

    let export = Exporter::default()
        .export_subject_graph(&graph, dir.path())
        .expect("export");

    assert_eq!(export.rejected, 1);
    assert_eq!(export.accepted, graph.len() - 1);
    assert_eq!(entry_count(&export.bundle_path), graph.len() - 1);
    assert!(
        !dir.path()
            .join(format!("observation_{broken_id}.json"))
            .exists()
    );
}

#[test]
fn dataset_export_keeps_subject_order() {
    let dir = TempDir::new().expect("tempdir");
    let dataset = generator(3).generate_dataset(3).expect("dataset");

    let export = Exporter::default()
        .export_dataset(&dataset, dir.path())
        .expect("export");

    assert_eq!(export.subjects.len(), 3);
    for (index, (subject, graph)) in export.subjects.iter().zip(dataset.iter()).enumerate() {
        let folder = dir.path().join(format!("patient_{:03}", index + 1));
        assert_eq!(subject.directory, folder);
        let bundle = read_json(&folder.join("bundle.json"));
        let patient_id = graph.patient().expect("patient").id.to_string();
        let has_patient = bundle["entry"]
            .as_array()
            .expect("entries")
            .iter()
            .any(|entry| entry["fullUrl"] == format!("urn:uuid:{patient_id}"));
        assert!(has_patient);
    }

    assert_eq!(export.bundle_path, dir.path().join("synthetic_bundle.json"));
    assert_eq!(entry_count(&export.bundle_path), export.total_accepted());
    assert_eq!(export.total_rejected(), 0);

    let aggregate = read_json(&export.bundle_path);
    let first_type = &aggregate["entry"][0]["resource"]["resourceType"];
    assert_eq!(first_type, ResourceType::Practitioner.as_str());
}

#[test]
fn options_control_bundle_type_and_layout() {
    let dir = TempDir::new().expect("tempdir");
    let graph = generator(11).generate_subject_graph();
    let exporter = Exporter::new(
        ExportOptions::new()
            .with_bundle_type(BundleType::Batch)
            .with_pretty(false),
    );

    let export = exporter
        .export_subject_graph(&graph, dir.path())
        .expect("export");

    let text = fs::read_to_string(&export.bundle_path).expect("read bundle");
    assert_eq!(text.lines().count(), 1);
    assert_eq!(read_json(&export.bundle_path)["type"], "batch");
}

#[test]
fn write_bundle_creates_parent_directories() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nested").join("out.json");
    let resources = vec![serde_json::json!({"resourceType": "Patient", "id": "p1"})];

    let written = Exporter::default()
        .write_bundle(resources, &path)
        .expect("write bundle");

    assert_eq!(written, path);
    assert_eq!(entry_count(&path), 1);
}

#[test]
fn unwritable_destination_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker");
    let graph = generator(5).generate_subject_graph();

    let err = Exporter::default()
        .export_subject_graph(&graph, &blocker.join("subject"))
        .expect_err("must fail");

    match err {
        OutputError::Io { path, .. } => assert!(path.starts_with(&blocker)),
        other => panic!("unexpected error: {other}"),
    }
}
