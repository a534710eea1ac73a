use rand::Rng;
use synth_model::{CodeableConcept, Procedure, Reference, ResourceId, ResourceType};
use synth_terminology::catalog::PROCEDURES;

use super::current_period;
use crate::context::GenerationContext;

/// Creates a completed Procedure performed now, lasting one to three hours.
pub fn create_procedure(
    ctx: &mut GenerationContext,
    patient_id: &ResourceId,
    encounter_id: &ResourceId,
) -> Procedure {
    let id = ctx.new_id();
    let code = PROCEDURES.choose(ctx.rng());
    let hours = ctx.rng().gen_range(1..=3);
    Procedure {
        id,
        status: "completed".to_string(),
        code: CodeableConcept::from(code),
        subject: Reference::to(ResourceType::Patient, patient_id),
        encounter: Reference::to(ResourceType::Encounter, encounter_id),
        performed_period: current_period(hours),
    }
}
