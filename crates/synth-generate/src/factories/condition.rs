use synth_model::{CodeableConcept, Condition, Reference, ResourceId, ResourceType, Timestamp};
use synth_terminology::catalog::{CONDITION_ACTIVE, CONDITION_CONFIRMED, CONDITIONS};

use crate::context::GenerationContext;

/// Creates an active, confirmed Condition recorded now.
pub fn create_condition(
    ctx: &mut GenerationContext,
    patient_id: &ResourceId,
    encounter_id: Option<&ResourceId>,
) -> Condition {
    let code = CONDITIONS.choose(ctx.rng());
    Condition {
        id: ctx.new_id(),
        clinical_status: CodeableConcept::from(&CONDITION_ACTIVE),
        verification_status: CodeableConcept::from(&CONDITION_CONFIRMED),
        code: CodeableConcept::from(code),
        subject: Reference::to(ResourceType::Patient, patient_id),
        recorded_date: Timestamp::now(),
        encounter: encounter_id.map(|id| Reference::to(ResourceType::Encounter, id)),
    }
}
