use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Closed set of resource kinds a record graph may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Patient,
    Practitioner,
    Encounter,
    Observation,
    Condition,
    Procedure,
    MedicationRequest,
    DiagnosticReport,
    AllergyIntolerance,
    Bundle,
}

impl ResourceType {
    pub const ALL: [ResourceType; 10] = [
        ResourceType::Patient,
        ResourceType::Practitioner,
        ResourceType::Encounter,
        ResourceType::Observation,
        ResourceType::Condition,
        ResourceType::Procedure,
        ResourceType::MedicationRequest,
        ResourceType::DiagnosticReport,
        ResourceType::AllergyIntolerance,
        ResourceType::Bundle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Patient => "Patient",
            ResourceType::Practitioner => "Practitioner",
            ResourceType::Encounter => "Encounter",
            ResourceType::Observation => "Observation",
            ResourceType::Condition => "Condition",
            ResourceType::Procedure => "Procedure",
            ResourceType::MedicationRequest => "MedicationRequest",
            ResourceType::DiagnosticReport => "DiagnosticReport",
            ResourceType::AllergyIntolerance => "AllergyIntolerance",
            ResourceType::Bundle => "Bundle",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ModelError;

    /// Resource type tags are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownResourceType(s.to_string()))
    }
}
