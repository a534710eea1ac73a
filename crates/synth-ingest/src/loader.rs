//! Loading resources from an exported directory tree.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info};

use crate::discovery::list_json_files;
use crate::error::Result;

/// Why a file was left out of the loaded resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be read.
    Unreadable(String),
    /// The file is not valid JSON.
    InvalidJson(String),
    /// The document is not a JSON object.
    NotAnObject,
    /// The document is itself a Bundle.
    Bundle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(message) => write!(f, "unreadable: {message}"),
            SkipReason::InvalidJson(message) => write!(f, "invalid JSON: {message}"),
            SkipReason::NotAnObject => f.write_str("not a JSON object"),
            SkipReason::Bundle => f.write_str("bundle"),
        }
    }
}

/// A file that was found but not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Resources loaded from a directory tree, in path order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestResult {
    pub resources: Vec<Value>,
    pub skipped: Vec<SkippedFile>,
}

impl IngestResult {
    pub fn into_resources(self) -> Vec<Value> {
        self.resources
    }
}

/// Loads every non-Bundle JSON object under `dir`.
///
/// Files that cannot be read or parsed are logged and skipped; only a
/// missing or unreadable directory fails the whole run.
pub fn load_resources_from_dir(dir: &Path) -> Result<IngestResult> {
    let files = list_json_files(dir)?;
    info!(path = %dir.display(), files = files.len(), "Loading resources");

    let mut result = IngestResult::default();
    for path in files {
        match load_resource(&path) {
            Ok(resource) => result.resources.push(resource),
            Err(SkipReason::Bundle) => {
                debug!(path = %path.display(), "Skipping bundle");
                result.skipped.push(SkippedFile {
                    path,
                    reason: SkipReason::Bundle,
                });
            }
            Err(reason) => {
                error!(path = %path.display(), %reason, "Skipping file");
                result.skipped.push(SkippedFile { path, reason });
            }
        }
    }
    Ok(result)
}

fn load_resource(path: &Path) -> std::result::Result<Value, SkipReason> {
    let text = fs::read_to_string(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    let value: Value =
        serde_json::from_str(&text).map_err(|e| SkipReason::InvalidJson(e.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(SkipReason::NotAnObject);
    };
    if object.get("resourceType").and_then(Value::as_str) == Some("Bundle") {
        return Err(SkipReason::Bundle);
    }
    Ok(value)
}
