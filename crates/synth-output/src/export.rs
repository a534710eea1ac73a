//! Persisting subject graphs and datasets to disk.
//!
//! Every resource is validated before it is written. Invalid resources are
//! logged and left out of both the resource files and the bundles.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use synth_model::{Dataset, SubjectGraph};
use synth_validate::{check_graph_references, validate_resource};

use crate::bundle::bundle;
use crate::error::{OutputError, Result};
use crate::options::ExportOptions;

/// File name of a per-subject Bundle.
pub const SUBJECT_BUNDLE_FILE: &str = "bundle.json";

/// File name of the aggregate Bundle at the dataset root.
pub const DATASET_BUNDLE_FILE: &str = "synthetic_bundle.json";

/// What was written for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectExport {
    pub directory: PathBuf,
    pub bundle_path: PathBuf,
    pub resource_files: Vec<PathBuf>,
    pub accepted: usize,
    pub rejected: usize,
}

/// What was written for a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetExport {
    pub subjects: Vec<SubjectExport>,
    pub bundle_path: PathBuf,
}

impl DatasetExport {
    pub fn total_accepted(&self) -> usize {
        self.subjects.iter().map(|subject| subject.accepted).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.subjects.iter().map(|subject| subject.rejected).sum()
    }
}

/// Writes validated resources, per-subject bundles and aggregate bundles.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Writes each valid resource of `graph` to `{type}_{id}.json` under
    /// `destination`, followed by a `bundle.json` over the same resources.
    pub fn export_subject_graph(
        &self,
        graph: &SubjectGraph,
        destination: &Path,
    ) -> Result<SubjectExport> {
        self.write_subject(graph, destination)
            .map(|(export, _accepted)| export)
    }

    /// Exports each subject to `patient_NNN` (1-based, in dataset order) under
    /// `destination_root`, then writes `synthetic_bundle.json` over every
    /// accepted resource of every subject.
    pub fn export_dataset(
        &self,
        dataset: &Dataset,
        destination_root: &Path,
    ) -> Result<DatasetExport> {
        create_dir(destination_root)?;

        let mut subjects = Vec::with_capacity(dataset.len());
        let mut all_accepted = Vec::new();
        for (index, graph) in dataset.iter().enumerate() {
            let folder = destination_root.join(subject_folder_name(index + 1));
            let (export, accepted) = self.write_subject(graph, &folder)?;
            subjects.push(export);
            all_accepted.extend(accepted);
        }

        let bundle_path = destination_root.join(DATASET_BUNDLE_FILE);
        let total = all_accepted.len();
        self.write_bundle(all_accepted, &bundle_path)?;
        info!(path = %bundle_path.display(), resources = total, "Saved dataset bundle");

        Ok(DatasetExport {
            subjects,
            bundle_path,
        })
    }

    /// Wraps `resources` into a Bundle and writes it to `path`, creating the
    /// parent directory if needed.
    pub fn write_bundle<I>(&self, resources: I, path: &Path) -> Result<PathBuf>
    where
        I: IntoIterator<Item = Value>,
    {
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        let document = bundle(resources, self.options.bundle_type);
        self.write_json(&document, path)?;
        Ok(path.to_path_buf())
    }

    fn write_subject(
        &self,
        graph: &SubjectGraph,
        destination: &Path,
    ) -> Result<(SubjectExport, Vec<Value>)> {
        create_dir(destination)?;

        for dangling in check_graph_references(graph) {
            warn!(
                resource_type = %dangling.resource_type,
                resource_id = %dangling.resource_id,
                field = dangling.field,
                reference = %dangling.reference,
                "Reference target is not part of the subject graph"
            );
        }

        let mut accepted = Vec::new();
        let mut resource_files = Vec::new();
        let mut rejected = 0;
        for resource in graph {
            let value = resource.to_value()?;
            if !validate_resource(&value) {
                warn!(
                    resource_type = %resource.resource_type(),
                    resource_id = %resource.id(),
                    "Skipping invalid resource"
                );
                rejected += 1;
                continue;
            }
            let file_name = format!(
                "{}_{}.json",
                resource.resource_type().as_str().to_lowercase(),
                resource.id()
            );
            let path = destination.join(file_name);
            self.write_json(&value, &path)?;
            debug!(path = %path.display(), "Wrote resource");
            resource_files.push(path);
            accepted.push(value);
        }

        let bundle_path = destination.join(SUBJECT_BUNDLE_FILE);
        self.write_bundle(accepted.iter().cloned(), &bundle_path)?;
        info!(path = %bundle_path.display(), accepted = accepted.len(), rejected, "Saved bundle");

        let export = SubjectExport {
            directory: destination.to_path_buf(),
            bundle_path,
            resource_files,
            accepted: accepted.len(),
            rejected,
        };
        Ok((export, accepted))
    }

    fn write_json<T: Serialize>(&self, document: &T, path: &Path) -> Result<()> {
        let rendered = if self.options.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };
        let json = rendered.map_err(|source| OutputError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, format!("{json}\n")).map_err(|source| OutputError::io(path, source))
    }
}

/// Folder name of the `index`-th subject (1-based).
pub fn subject_folder_name(index: usize) -> String {
    format!("patient_{index:03}")
}

fn create_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| OutputError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_names_are_zero_padded() {
        assert_eq!(subject_folder_name(1), "patient_001");
        assert_eq!(subject_folder_name(42), "patient_042");
        assert_eq!(subject_folder_name(1234), "patient_1234");
    }
}
