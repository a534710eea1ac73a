//! End-to-end tests for the subcommands.

use std::fs;
use std::path::Path;

use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;

use synth_cli::cli::{
    BundleArgs, BundleTypeArg, Cli, Command, CreateDatasetArgs, CreatePatientArgs,
};
use synth_cli::commands::{SUMMARY_FILE, run_bundle, run_create_dataset, run_create_patient};

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("read file");
    serde_json::from_str(&text).expect("parse json")
}

fn dataset_args(output: &Path, count: usize) -> CreateDatasetArgs {
    CreateDatasetArgs {
        count,
        output: output.to_path_buf(),
        seed: Some(42),
        csv: true,
        observations: Vec::new(),
        bundle_type: BundleTypeArg::Collection,
        compact: false,
    }
}

#[test]
fn create_patient_writes_patient_json() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nested").join("patient.json");
    let args = CreatePatientArgs {
        output: Some(path.clone()),
        seed: Some(42),
    };

    let written = run_create_patient(&args).expect("create patient");

    assert_eq!(written, Some(path.clone()));
    let patient = read_json(&path);
    assert_eq!(patient["resourceType"], "Patient");
    let gender = patient["gender"].as_str().expect("gender");
    assert!(["male", "female", "other"].contains(&gender));
}

#[test]
fn create_patient_is_reproducible_with_seed() {
    let dir = TempDir::new().expect("tempdir");
    let first = dir.path().join("a.json");
    let second = dir.path().join("b.json");
    for path in [&first, &second] {
        let args = CreatePatientArgs {
            output: Some(path.clone()),
            seed: Some(7),
        };
        run_create_patient(&args).expect("create patient");
    }
    let (a, b) = (read_json(&first), read_json(&second));
    assert_eq!(a["id"], b["id"]);
    assert_eq!(a["identifier"], b["identifier"]);
    assert_eq!(a["name"], b["name"]);
}

#[test]
fn create_dataset_exports_folders_bundle_and_csv() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("out");

    let result = run_create_dataset(&dataset_args(&output, 2)).expect("create dataset");

    assert_eq!(result.subjects.len(), 2);
    assert_eq!(result.subjects[0].folder, "patient_001");
    assert_eq!(result.subjects[1].folder, "patient_002");
    assert!(!result.has_rejections());
    assert!(output.join("patient_001").join("bundle.json").is_file());

    let bundle = read_json(&result.bundle_path);
    let entries = bundle["entry"].as_array().expect("entries");
    assert_eq!(entries.len(), result.total_accepted());

    assert_eq!(result.summary_csv, Some(output.join(SUMMARY_FILE)));
    assert_eq!(result.summary_rows, 2);
    let csv = fs::read_to_string(output.join(SUMMARY_FILE)).expect("read csv");
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn create_dataset_limits_observations() {
    let dir = TempDir::new().expect("tempdir");
    let mut args = dataset_args(dir.path(), 1);
    args.observations = vec!["heart_rate".to_string(), "spo2".to_string()];

    let result = run_create_dataset(&args).expect("create dataset");

    let observation_files = fs::read_dir(dir.path().join("patient_001"))
        .expect("read folder")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("observation_"))
        .count();
    assert_eq!(observation_files, 2);
    assert_eq!(result.total_accepted(), 10);
}

#[test]
fn create_dataset_rejects_zero_count() {
    let dir = TempDir::new().expect("tempdir");
    let err = run_create_dataset(&dataset_args(dir.path(), 0)).expect_err("must fail");
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"generate dataset: invalid argument `count`: must be at least 1"
    );
}

#[test]
fn bundle_command_rebundles_exported_resources() {
    let dir = TempDir::new().expect("tempdir");
    let exported = dir.path().join("exported");
    let dataset = run_create_dataset(&dataset_args(&exported, 2)).expect("create dataset");
    fs::write(exported.join("patient_001").join("broken.json"), "{ nope").expect("write");

    let output = dir.path().join("rebundled").join("all.json");
    let args = BundleArgs {
        input: exported,
        output: output.clone(),
        bundle_type: BundleTypeArg::Collection,
    };
    let result = run_bundle(&args).expect("bundle");

    assert_eq!(result.output, output);
    assert_eq!(result.resources, dataset.total_accepted());
    // two subject bundles, the aggregate bundle and the broken file
    assert_eq!(result.skipped, 4);
    let bundle = read_json(&output);
    assert_eq!(bundle["type"], "collection");
    assert_eq!(
        bundle["entry"].as_array().map(Vec::len),
        Some(dataset.total_accepted())
    );
}

#[test]
fn bundle_command_fails_for_missing_input() {
    let dir = TempDir::new().expect("tempdir");
    let args = BundleArgs {
        input: dir.path().join("missing"),
        output: dir.path().join("out.json"),
        bundle_type: BundleTypeArg::Collection,
    };
    assert!(run_bundle(&args).is_err());
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn cli_parses_dataset_flags() {
    let cli = Cli::try_parse_from([
        "fhir-synth",
        "create-dataset",
        "--count",
        "3",
        "--seed",
        "9",
        "--csv",
        "--observations",
        "heart_rate,blood_pressure",
    ])
    .expect("parse");
    let Command::CreateDataset(args) = cli.command else {
        panic!("expected create-dataset");
    };
    assert_eq!(args.count, 3);
    assert_eq!(args.seed, Some(9));
    assert!(args.csv);
    assert_eq!(args.output, Path::new("output"));
    assert_eq!(args.observations, ["heart_rate", "blood_pressure"]);
}

#[test]
fn cli_bundle_requires_input() {
    assert!(Cli::try_parse_from(["fhir-synth", "bundle"]).is_err());
    let cli = Cli::try_parse_from(["fhir-synth", "bundle", "--input", "data"]).expect("parse");
    let Command::Bundle(args) = cli.command else {
        panic!("expected bundle");
    };
    assert_eq!(args.output, Path::new("output/synthetic_bundle.json"));
    assert_eq!(args.bundle_type, BundleTypeArg::Collection);
}

#[test]
fn cli_bundle_type_is_checked_by_the_parser() {
    let cli = Cli::try_parse_from([
        "fhir-synth",
        "bundle",
        "--input",
        "data",
        "--bundle-type",
        "transaction-response",
    ])
    .expect("parse");
    let Command::Bundle(args) = cli.command else {
        panic!("expected bundle");
    };
    assert_eq!(args.bundle_type, BundleTypeArg::TransactionResponse);

    let err = Cli::try_parse_from([
        "fhir-synth",
        "create-dataset",
        "--bundle-type",
        "bag",
    ])
    .err()
    .expect("unknown bundle type");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}
