//! Structural validation for generated resources.
//!
//! Gates what gets persisted: required-field presence per resource type,
//! non-empty ids, and well-formed `<Type>/<id>` references. Rejections are
//! local decisions; nothing here returns a hard error.

pub mod checks;
pub mod graph;
pub mod issue;
pub mod rules;
pub mod validator;

pub use graph::{DanglingReference, check_graph_references};
pub use issue::ValidationIssue;
pub use rules::{REFERENCE_PATTERN, is_well_formed_reference, required_fields};
pub use validator::{
    CollectionReport, Rejection, check_resource, validate_collection, validate_collection_report,
    validate_resource,
};
