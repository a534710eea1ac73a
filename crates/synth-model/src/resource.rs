use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::datatypes::Reference;
use crate::error::Result;
use crate::ids::ResourceId;
use crate::resource_type::ResourceType;
use crate::resources::{
    AllergyIntolerance, Condition, DiagnosticReport, Encounter, MedicationRequest, Observation,
    Patient, Practitioner, Procedure,
};

/// A generated clinical resource, tagged on the wire by `resourceType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Patient(Patient),
    Practitioner(Practitioner),
    Encounter(Encounter),
    Observation(Observation),
    Condition(Condition),
    Procedure(Procedure),
    MedicationRequest(MedicationRequest),
    DiagnosticReport(DiagnosticReport),
    AllergyIntolerance(AllergyIntolerance),
}

impl Resource {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Resource::Patient(_) => ResourceType::Patient,
            Resource::Practitioner(_) => ResourceType::Practitioner,
            Resource::Encounter(_) => ResourceType::Encounter,
            Resource::Observation(_) => ResourceType::Observation,
            Resource::Condition(_) => ResourceType::Condition,
            Resource::Procedure(_) => ResourceType::Procedure,
            Resource::MedicationRequest(_) => ResourceType::MedicationRequest,
            Resource::DiagnosticReport(_) => ResourceType::DiagnosticReport,
            Resource::AllergyIntolerance(_) => ResourceType::AllergyIntolerance,
        }
    }

    pub fn id(&self) -> &ResourceId {
        match self {
            Resource::Patient(inner) => &inner.id,
            Resource::Practitioner(inner) => &inner.id,
            Resource::Encounter(inner) => &inner.id,
            Resource::Observation(inner) => &inner.id,
            Resource::Condition(inner) => &inner.id,
            Resource::Procedure(inner) => &inner.id,
            Resource::MedicationRequest(inner) => &inner.id,
            Resource::DiagnosticReport(inner) => &inner.id,
            Resource::AllergyIntolerance(inner) => &inner.id,
        }
    }

    /// Returns a reference pointing at this resource.
    pub fn reference(&self) -> Reference {
        Reference::to(self.resource_type(), self.id())
    }

    /// Every outgoing reference, paired with the field it was found in.
    pub fn outgoing_references(&self) -> Vec<(&'static str, &Reference)> {
        let mut refs = Vec::new();
        match self {
            Resource::Patient(_) | Resource::Practitioner(_) => {}
            Resource::Encounter(inner) => {
                refs.push(("subject", &inner.subject));
                for participant in &inner.participant {
                    refs.push(("participant", &participant.individual));
                }
            }
            Resource::Observation(inner) => {
                refs.push(("subject", &inner.subject));
                refs.push(("encounter", &inner.encounter));
            }
            Resource::Condition(inner) => {
                refs.push(("subject", &inner.subject));
                if let Some(encounter) = &inner.encounter {
                    refs.push(("encounter", encounter));
                }
            }
            Resource::Procedure(inner) => {
                refs.push(("subject", &inner.subject));
                refs.push(("encounter", &inner.encounter));
            }
            Resource::MedicationRequest(inner) => {
                refs.push(("subject", &inner.subject));
                if let Some(requester) = &inner.requester {
                    refs.push(("requester", requester));
                }
                if let Some(encounter) = &inner.encounter {
                    refs.push(("encounter", encounter));
                }
            }
            Resource::DiagnosticReport(inner) => {
                refs.push(("subject", &inner.subject));
                refs.push(("encounter", &inner.encounter));
                for result in &inner.result {
                    refs.push(("result", result));
                }
            }
            Resource::AllergyIntolerance(inner) => {
                refs.push(("patient", &inner.patient));
            }
        }
        refs
    }

    /// Converts the resource into its open JSON form.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parses a typed resource back out of its JSON form.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Resource {
                fn from(inner: $variant) -> Self {
                    Resource::$variant(inner)
                }
            }
        )*
    };
}

impl_from_payload!(
    Patient,
    Practitioner,
    Encounter,
    Observation,
    Condition,
    Procedure,
    MedicationRequest,
    DiagnosticReport,
    AllergyIntolerance,
);
