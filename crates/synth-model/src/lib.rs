//! Typed resource model for synthetic clinical record graphs.
//!
//! Each resource kind has its own payload struct; [`Resource`] is the sum
//! type tagged by `resourceType` on the wire. Validation and bundling work on
//! the open JSON form returned by [`Resource::to_value`].

pub mod datatypes;
pub mod error;
pub mod graph;
pub mod ids;
pub mod resource;
pub mod resource_type;
pub mod resources;

pub use datatypes::{
    Address, CodeableConcept, Coding, ContactPoint, DisplayReference, Extension, HumanName,
    Identifier, Period, Quantity, QuantityValue, Reference, Timestamp, coded_concept, reference,
};
pub use error::{ModelError, Result};
pub use graph::{Dataset, SubjectGraph};
pub use ids::{ResourceId, random_uuid};
pub use resource::Resource;
pub use resource_type::ResourceType;
pub use resources::{
    AllergyIntolerance, BodyMeasurements, Condition, DiagnosticReport, Dosage, Encounter,
    EncounterLocation, EncounterParticipant, MedicationRequest, Observation, ObservationComponent,
    ObservationValue, Patient, Practitioner, Procedure, Qualification, Reaction, ReactionSeverity,
};
