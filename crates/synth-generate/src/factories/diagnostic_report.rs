use synth_model::{
    CodeableConcept, DiagnosticReport, Reference, ResourceId, ResourceType, Timestamp,
};
use synth_terminology::catalog::DIAGNOSTIC_REPORTS;

use crate::context::GenerationContext;

/// Creates a final DiagnosticReport whose results are exactly `observation_ids`.
pub fn create_diagnostic_report(
    ctx: &mut GenerationContext,
    patient_id: &ResourceId,
    encounter_id: &ResourceId,
    observation_ids: &[ResourceId],
) -> DiagnosticReport {
    let code = DIAGNOSTIC_REPORTS.choose(ctx.rng());
    let id = ctx.new_id();
    DiagnosticReport {
        id,
        status: "final".to_string(),
        code: CodeableConcept::from(code),
        subject: Reference::to(ResourceType::Patient, patient_id),
        encounter: Reference::to(ResourceType::Encounter, encounter_id),
        result: observation_ids
            .iter()
            .map(|obs_id| Reference::to(ResourceType::Observation, obs_id))
            .collect(),
        issued: Timestamp::now(),
    }
}
