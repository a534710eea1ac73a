use chrono::TimeDelta;
use rand::Rng;
use synth_model::{
    CodeableConcept, Coding, DisplayReference, Encounter, EncounterLocation,
    EncounterParticipant, Reference, ResourceId, ResourceType,
};
use synth_terminology::catalog::ENCOUNTER_CLASS;

use super::build_period;
use crate::context::GenerationContext;

const LOOKBACK_SECONDS: i64 = 2 * 365 * 24 * 60 * 60;

/// Creates a finished Encounter for the patient, attended by the practitioner
/// when one is given.
pub fn create_encounter(
    ctx: &mut GenerationContext,
    patient_id: &ResourceId,
    practitioner_id: Option<&ResourceId>,
) -> Encounter {
    let id = ctx.new_id();
    let class = ENCOUNTER_CLASS.choose(ctx.rng());
    let offset = ctx.rng().gen_range(0..=LOOKBACK_SECONDS);
    let start = ctx.anchor() - TimeDelta::seconds(offset);
    let hours = ctx.rng().gen_range(1..=72);
    let company = ctx.demographic(|provider, rng| provider.company(rng));

    let participant = practitioner_id
        .map(|practitioner| EncounterParticipant {
            individual: Reference::to(ResourceType::Practitioner, practitioner),
        })
        .into_iter()
        .collect();

    Encounter {
        id,
        status: "finished".to_string(),
        class: Coding::from(class),
        type_: vec![CodeableConcept::from(class)],
        subject: Reference::to(ResourceType::Patient, patient_id),
        participant,
        period: build_period(start, hours),
        location: vec![EncounterLocation {
            location: DisplayReference {
                display: format!("{company} Medical Center"),
            },
        }],
    }
}
