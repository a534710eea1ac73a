use serde_json::{Map, Value};

use crate::issue::ValidationIssue;
use crate::rules::{REFERENCE_FIELDS, is_well_formed_reference};

/// Each present reference field must be `{reference: "<Type>/<id>"}`.
pub fn check_references(
    object: &Map<String, Value>,
    resource_type: &str,
) -> Result<(), ValidationIssue> {
    for field in REFERENCE_FIELDS {
        let Some(value) = object.get(field) else {
            continue;
        };
        let Some(reference) = value.as_object().and_then(|inner| inner.get("reference")) else {
            return Err(ValidationIssue::ReferenceNotObject {
                resource_type: resource_type.to_string(),
                field,
            });
        };
        let well_formed = reference.as_str().is_some_and(is_well_formed_reference);
        if !well_formed {
            let reference = match reference {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            return Err(ValidationIssue::MalformedReference {
                resource_type: resource_type.to_string(),
                field,
                reference,
            });
        }
    }
    Ok(())
}
