//! Validation issue types.
//!
//! Each variant names the resource type it was raised for and carries only
//! the data needed to explain the rejection.

use serde::Serialize;
use thiserror::Error;

/// Why a resource was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum ValidationIssue {
    /// `resourceType` is absent, empty or not a string.
    #[error("missing resourceType")]
    MissingResourceType,

    /// One or more required fields are absent.
    #[error("resource {resource_type} missing required fields: {}", .fields.join(", "))]
    MissingFields {
        resource_type: String,
        fields: Vec<&'static str>,
    },

    /// `id` is present but empty.
    #[error("resource {resource_type} has empty id")]
    EmptyId { resource_type: String },

    /// A reference field is not an object with a `reference` key.
    #[error("resource {resource_type} has invalid reference in {field}")]
    ReferenceNotObject {
        resource_type: String,
        field: &'static str,
    },

    /// A reference string does not have the `<Type>/<id>` form.
    #[error("resource {resource_type} reference {field} is not in <Type>/<id> form: {reference}")]
    MalformedReference {
        resource_type: String,
        field: &'static str,
        reference: String,
    },
}

impl ValidationIssue {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationIssue::MissingResourceType => "missing-resource-type",
            ValidationIssue::MissingFields { .. } => "missing-fields",
            ValidationIssue::EmptyId { .. } => "empty-id",
            ValidationIssue::ReferenceNotObject { .. } => "reference-not-object",
            ValidationIssue::MalformedReference { .. } => "malformed-reference",
        }
    }

    pub fn resource_type(&self) -> Option<&str> {
        match self {
            ValidationIssue::MissingResourceType => None,
            ValidationIssue::MissingFields { resource_type, .. }
            | ValidationIssue::EmptyId { resource_type }
            | ValidationIssue::ReferenceNotObject { resource_type, .. }
            | ValidationIssue::MalformedReference { resource_type, .. } => {
                Some(resource_type.as_str())
            }
        }
    }

    /// The reference field involved, for reference issues.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationIssue::ReferenceNotObject { field, .. }
            | ValidationIssue::MalformedReference { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub fn is_reference_issue(&self) -> bool {
        self.field().is_some()
    }
}
