//! Typed payloads for the nine clinical resource kinds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datatypes::{
    Address, CodeableConcept, Coding, ContactPoint, DisplayReference, Extension, HumanName,
    Identifier, Period, Quantity, Reference, Timestamp,
};
use crate::ids::ResourceId;

/// Sampled height and weight carried alongside the Patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurements {
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: ResourceId,
    pub identifier: Vec<Identifier>,
    pub name: Vec<HumanName>,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub extension: Vec<Extension>,
    pub address: Vec<Address>,
    pub telecom: Vec<ContactPoint>,
    pub body_measurements: BodyMeasurements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub identifier: Vec<Identifier>,
    pub code: CodeableConcept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: ResourceId,
    pub name: Vec<HumanName>,
    pub qualification: Vec<Qualification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterParticipant {
    pub individual: Reference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterLocation {
    pub location: DisplayReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: ResourceId,
    pub status: String,
    pub class: Coding,
    #[serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,
    pub subject: Reference,
    pub participant: Vec<EncounterParticipant>,
    pub period: Period,
    pub location: Vec<EncounterLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    pub code: CodeableConcept,
    pub value_quantity: Quantity,
}

/// The value shape of an Observation, flattened into the resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservationValue {
    Components {
        component: Vec<ObservationComponent>,
    },
    Quantity {
        #[serde(rename = "valueQuantity")]
        value_quantity: Quantity,
    },
    Text {
        #[serde(rename = "valueString")]
        value_string: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: ResourceId,
    pub status: String,
    pub category: Vec<CodeableConcept>,
    pub code: CodeableConcept,
    pub subject: Reference,
    pub encounter: Reference,
    pub effective_date_time: Timestamp,
    #[serde(flatten)]
    pub value: ObservationValue,
}

impl Observation {
    /// Returns the single quantity value, if this observation has one.
    pub fn value_quantity(&self) -> Option<&Quantity> {
        match &self.value {
            ObservationValue::Quantity { value_quantity } => Some(value_quantity),
            _ => None,
        }
    }

    /// Returns the component whose code text equals `text`.
    pub fn component_by_text(&self, text: &str) -> Option<&ObservationComponent> {
        match &self.value {
            ObservationValue::Components { component } => {
                component.iter().find(|part| part.code.text == text)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: ResourceId,
    pub clinical_status: CodeableConcept,
    pub verification_status: CodeableConcept,
    pub code: CodeableConcept,
    pub subject: Reference,
    pub recorded_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procedure {
    pub id: ResourceId,
    pub status: String,
    pub code: CodeableConcept,
    pub subject: Reference,
    pub encounter: Reference,
    pub performed_period: Period,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dosage {
    pub sequence: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequest {
    pub id: ResourceId,
    pub status: String,
    pub intent: String,
    pub medication_codeable_concept: CodeableConcept,
    pub subject: Reference,
    pub authored_on: Timestamp,
    pub dosage_instruction: Vec<Dosage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub id: ResourceId,
    pub status: String,
    pub code: CodeableConcept,
    pub subject: Reference,
    pub encounter: Reference,
    pub result: Vec<Reference>,
    pub issued: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionSeverity {
    Mild,
    Moderate,
    Severe,
}

impl ReactionSeverity {
    pub const ALL: [ReactionSeverity; 3] = [
        ReactionSeverity::Mild,
        ReactionSeverity::Moderate,
        ReactionSeverity::Severe,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub manifestation: Vec<CodeableConcept>,
    pub severity: ReactionSeverity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntolerance {
    pub id: ResourceId,
    pub clinical_status: CodeableConcept,
    pub verification_status: CodeableConcept,
    pub code: CodeableConcept,
    pub patient: Reference,
    pub reaction: Vec<Reaction>,
}
