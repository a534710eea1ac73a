use serde_json::{Map, Value};

use super::resource_type_of;
use crate::issue::ValidationIssue;
use crate::rules::required_fields;

pub fn resource_type(object: &Map<String, Value>) -> Result<&str, ValidationIssue> {
    resource_type_of(object).ok_or(ValidationIssue::MissingResourceType)
}

/// Every field the type requires must be present (any value, even null).
pub fn check_required(
    object: &Map<String, Value>,
    resource_type: &str,
) -> Result<(), ValidationIssue> {
    let missing: Vec<&'static str> = required_fields(resource_type)
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationIssue::MissingFields {
            resource_type: resource_type.to_string(),
            fields: missing,
        })
    }
}

/// A present `id` must not be null or an empty string.
pub fn check_id(object: &Map<String, Value>, resource_type: &str) -> Result<(), ValidationIssue> {
    let empty = match object.get("id") {
        None => false,
        Some(Value::Null) => true,
        Some(Value::String(id)) => id.is_empty(),
        Some(_) => false,
    };
    if empty {
        Err(ValidationIssue::EmptyId {
            resource_type: resource_type.to_string(),
        })
    } else {
        Ok(())
    }
}
