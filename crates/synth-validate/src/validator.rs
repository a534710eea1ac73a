//! Accept/reject decisions over resources in their JSON form.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::checks::run_all;
use crate::issue::ValidationIssue;

/// Returns the first structural issue of `resource`, if any.
pub fn check_resource(resource: &Value) -> Result<(), ValidationIssue> {
    run_all(resource)
}

/// Returns true if the resource passes every structural check.
///
/// Rejections are logged with the resource type, id and reason.
pub fn validate_resource(resource: &Value) -> bool {
    match check_resource(resource) {
        Ok(()) => true,
        Err(issue) => {
            error!(
                resource_type = issue.resource_type().unwrap_or("-"),
                resource_id = resource_id(resource).unwrap_or("-"),
                code = issue.code(),
                "{issue}"
            );
            false
        }
    }
}

/// True iff every resource validates. Every element is checked, so every
/// failure is reported.
pub fn validate_collection<'a, I>(resources: I) -> bool
where
    I: IntoIterator<Item = &'a Value>,
{
    resources
        .into_iter()
        .fold(true, |valid, resource| validate_resource(resource) && valid)
}

/// One rejected resource within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub index: usize,
    pub resource_id: Option<String>,
    pub issue: ValidationIssue,
}

/// Outcome of validating a collection, keeping every rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionReport {
    pub accepted: Vec<usize>,
    pub rejected: Vec<Rejection>,
}

impl CollectionReport {
    pub fn is_valid(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Validates each resource and records which were accepted or rejected.
pub fn validate_collection_report<'a, I>(resources: I) -> CollectionReport
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut report = CollectionReport::default();
    for (index, resource) in resources.into_iter().enumerate() {
        match check_resource(resource) {
            Ok(()) => report.accepted.push(index),
            Err(issue) => {
                let resource_id = resource_id(resource).map(str::to_string);
                error!(
                    index,
                    resource_id = resource_id.as_deref().unwrap_or("-"),
                    code = issue.code(),
                    "{issue}"
                );
                report.rejected.push(Rejection {
                    index,
                    resource_id,
                    issue,
                });
            }
        }
    }
    report
}

fn resource_id(resource: &Value) -> Option<&str> {
    resource.get("id").and_then(Value::as_str)
}
