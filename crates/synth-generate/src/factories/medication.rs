use rand::Rng;
use synth_model::{
    CodeableConcept, Dosage, MedicationRequest, Reference, ResourceId, ResourceType, Timestamp,
};
use synth_terminology::catalog::MEDICATIONS;

use crate::context::GenerationContext;

/// Creates an active MedicationRequest order for a common therapy.
pub fn create_medication_request(
    ctx: &mut GenerationContext,
    patient_id: &ResourceId,
    practitioner_id: Option<&ResourceId>,
    encounter_id: Option<&ResourceId>,
) -> MedicationRequest {
    let medication = MEDICATIONS.choose(ctx.rng());
    let id = ctx.new_id();
    let tablets: u8 = ctx.rng().gen_range(1..=2);

    MedicationRequest {
        id,
        status: "active".to_string(),
        intent: "order".to_string(),
        medication_codeable_concept: CodeableConcept::from(medication),
        subject: Reference::to(ResourceType::Patient, patient_id),
        authored_on: Timestamp::now(),
        dosage_instruction: vec![Dosage {
            sequence: 1,
            text: format!("Take {tablets} tablet(s) by mouth daily"),
        }],
        requester: practitioner_id.map(|id| Reference::to(ResourceType::Practitioner, id)),
        encounter: encounter_id.map(|id| Reference::to(ResourceType::Encounter, id)),
    }
}
