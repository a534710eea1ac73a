//! Per-type required fields and the reference pattern.

use std::sync::LazyLock;

use regex::Regex;
use synth_model::ResourceType;

/// `<ResourceType>/<id>` with an id of 1 to 64 id-safe characters.
pub static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+/[A-Za-z0-9\-.]{1,64}$").expect("Invalid reference regex")
});

/// Reference-bearing fields checked on every resource, in check order.
pub const REFERENCE_FIELDS: [&str; 3] = ["subject", "patient", "encounter"];

/// Fields required on resources of an unmodelled type.
pub const DEFAULT_REQUIRED: &[&str] = &["resourceType", "id"];

/// Returns the required fields for a `resourceType` tag.
pub fn required_fields(resource_type: &str) -> &'static [&'static str] {
    let Ok(kind) = resource_type.parse::<ResourceType>() else {
        return DEFAULT_REQUIRED;
    };
    match kind {
        ResourceType::Patient => &["resourceType", "id", "name", "gender", "birthDate"],
        ResourceType::Practitioner => &["resourceType", "id", "name"],
        ResourceType::Encounter => &["resourceType", "id", "status", "class", "subject"],
        ResourceType::Observation => &["resourceType", "id", "status", "code", "subject"],
        ResourceType::Condition => &["resourceType", "id", "code", "subject"],
        ResourceType::Procedure => &["resourceType", "id", "status", "code", "subject"],
        ResourceType::MedicationRequest => &[
            "resourceType",
            "id",
            "status",
            "intent",
            "medicationCodeableConcept",
            "subject",
        ],
        ResourceType::DiagnosticReport => &["resourceType", "id", "status", "code", "subject"],
        ResourceType::AllergyIntolerance => &["resourceType", "id", "code", "patient"],
        ResourceType::Bundle => DEFAULT_REQUIRED,
    }
}

/// Returns true if `reference` has the `<Type>/<id>` form.
pub fn is_well_formed_reference(reference: &str) -> bool {
    REFERENCE_PATTERN.is_match(reference)
}
