//! Flattened per-subject summary rows and their CSV rendering.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use synth_model::{Dataset, SubjectGraph};
use synth_terminology::ObservationKind;
use synth_terminology::catalog::SYSTOLIC_BLOOD_PRESSURE;

use crate::error::{OutputError, Result};

/// CSV header, in column order.
pub const SUMMARY_HEADERS: [&str; 6] = [
    "patient_id",
    "birth_date",
    "gender",
    "encounter_type",
    "heart_rate",
    "blood_pressure_systolic",
];

/// One summary row; absent vitals render as empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub patient_id: String,
    pub birth_date: String,
    pub gender: String,
    pub encounter_type: String,
    pub heart_rate: Option<String>,
    pub blood_pressure_systolic: Option<String>,
}

/// Builds the row for one subject, or `None` when the graph lacks a Patient
/// or an Encounter.
pub fn summary_row(graph: &SubjectGraph) -> Option<SummaryRow> {
    let patient = graph.patient()?;
    let encounter = graph.encounter()?;

    let heart_rate = graph
        .observation_by_text(ObservationKind::HeartRate.concept().display)
        .and_then(|observation| observation.value_quantity())
        .map(|quantity| quantity.value.to_string());
    let blood_pressure_systolic = graph
        .observation_by_text(ObservationKind::BloodPressure.concept().display)
        .and_then(|observation| observation.component_by_text(SYSTOLIC_BLOOD_PRESSURE.display))
        .map(|component| component.value_quantity.value.to_string());

    Some(SummaryRow {
        patient_id: patient.id.to_string(),
        birth_date: patient.birth_date.to_string(),
        gender: patient.gender.clone(),
        encounter_type: encounter.class.display.clone(),
        heart_rate,
        blood_pressure_systolic,
    })
}

/// One row per subject that has both a Patient and an Encounter, in dataset
/// order.
pub fn summarize(dataset: &Dataset) -> Vec<SummaryRow> {
    dataset.iter().filter_map(summary_row).collect()
}

/// Writes `rows` as CSV with a header row. With no rows the file is created
/// empty, without a header.
pub fn write_summary_csv(rows: &[SummaryRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::io(parent, source))?;
    }

    if rows.is_empty() {
        warn!(path = %path.display(), "No patient rows available for CSV export");
        return fs::write(path, "").map_err(|source| OutputError::io(path, source));
    }

    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer
        .flush()
        .map_err(|source| OutputError::io(path, source))?;
    info!(path = %path.display(), rows = rows.len(), "Saved CSV summary");
    Ok(())
}

/// Summarizes `dataset` and writes the CSV; returns the number of data rows.
pub fn export_csv_summary(dataset: &Dataset, path: &Path) -> Result<usize> {
    let rows = summarize(dataset);
    write_summary_csv(&rows, path)?;
    Ok(rows.len())
}
