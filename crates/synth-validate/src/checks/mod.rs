//! Structural checks, run in a fixed order; the first failure wins.

pub mod references;
pub mod structure;

use serde_json::{Map, Value};

use crate::issue::ValidationIssue;

/// Runs every check against one resource.
///
/// Order: resource type, required fields, empty id, reference fields.
pub fn run_all(resource: &Value) -> Result<(), ValidationIssue> {
    let Some(object) = resource.as_object() else {
        return Err(ValidationIssue::MissingResourceType);
    };
    let resource_type = structure::resource_type(object)?;
    structure::check_required(object, resource_type)?;
    structure::check_id(object, resource_type)?;
    references::check_references(object, resource_type)
}

/// Returns the `resourceType` tag of an object, if it is a non-empty string.
pub(crate) fn resource_type_of(object: &Map<String, Value>) -> Option<&str> {
    object
        .get("resourceType")
        .and_then(Value::as_str)
        .filter(|tag| !tag.is_empty())
}
