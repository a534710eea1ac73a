use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use synth_generate::{GeneratorOptions, ObservationType, SubjectGraphGenerator};
use synth_ingest::load_resources_from_dir;
use synth_output::{BundleType, ExportOptions, Exporter, export_csv_summary};

use crate::cli::{BundleArgs, CreateDatasetArgs, CreatePatientArgs};
use crate::types::{BundleResult, DatasetResult, SubjectSummary};

/// Name of the CSV summary written at the dataset root.
pub const SUMMARY_FILE: &str = "summary.csv";

/// Generates one subject graph and emits its Patient.
///
/// Returns the written path, or `None` when the JSON went to stdout.
pub fn run_create_patient(args: &CreatePatientArgs) -> Result<Option<PathBuf>> {
    let span = info_span!("create_patient", seed = ?args.seed);
    let _guard = span.enter();

    let mut generator = SubjectGraphGenerator::new(GeneratorOptions::new().with_seed(args.seed));
    let patient = generator
        .create_patient_value()
        .context("generate patient")?;
    let json = serde_json::to_string_pretty(&patient).context("serialize patient")?;

    match &args.output {
        Some(path) => {
            create_parent_dir(path)?;
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "Wrote patient");
            Ok(Some(path.clone()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("write patient to stdout")?;
            Ok(None)
        }
    }
}

/// Generates `count` subjects and exports them under the output directory.
pub fn run_create_dataset(args: &CreateDatasetArgs) -> Result<DatasetResult> {
    let span = info_span!("create_dataset", count = args.count, seed = ?args.seed);
    let _guard = span.enter();

    let mut options = GeneratorOptions::new().with_seed(args.seed);
    let observation_types = parse_observation_types(&args.observations);
    if !observation_types.is_empty() {
        options = options.with_observation_types(observation_types);
    }
    let mut generator = SubjectGraphGenerator::new(options);
    let dataset = generator
        .generate_dataset(args.count)
        .context("generate dataset")?;

    let export_options = ExportOptions::new()
        .with_bundle_type(BundleType::from(args.bundle_type))
        .with_pretty(!args.compact);
    let export = Exporter::new(export_options)
        .export_dataset(&dataset, &args.output)
        .with_context(|| format!("export dataset to {}", args.output.display()))?;

    let subjects = export
        .subjects
        .iter()
        .zip(dataset.iter())
        .map(|(subject, graph)| SubjectSummary {
            folder: subject
                .directory
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            patient_id: graph.patient().map(|patient| patient.id.to_string()),
            accepted: subject.accepted,
            rejected: subject.rejected,
        })
        .collect();

    let (summary_csv, summary_rows) = if args.csv {
        let path = args.output.join(SUMMARY_FILE);
        let rows = export_csv_summary(&dataset, &path)
            .with_context(|| format!("write {}", path.display()))?;
        (Some(path), rows)
    } else {
        (None, 0)
    };

    Ok(DatasetResult {
        output_dir: args.output.clone(),
        bundle_path: export.bundle_path,
        subjects,
        summary_csv,
        summary_rows,
    })
}

/// Loads every exported resource under the input directory and writes one
/// Bundle over them.
pub fn run_bundle(args: &BundleArgs) -> Result<BundleResult> {
    let span = info_span!("bundle", input = %args.input.display());
    let _guard = span.enter();

    let bundle_type = BundleType::from(args.bundle_type);
    let ingest = load_resources_from_dir(&args.input)
        .with_context(|| format!("load resources from {}", args.input.display()))?;
    let skipped = ingest.skipped.len();
    let resources = ingest.resources.len();

    let exporter = Exporter::new(ExportOptions::new().with_bundle_type(bundle_type));
    let output = exporter
        .write_bundle(ingest.into_resources(), &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(path = %output.display(), resources, skipped, "Wrote bundle");

    Ok(BundleResult {
        output,
        resources,
        skipped,
    })
}

fn parse_observation_types(values: &[String]) -> Vec<ObservationType> {
    values
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            let Ok(observation_type) = value.parse::<ObservationType>();
            observation_type
        })
        .collect()
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display())),
        _ => Ok(()),
    }
}
