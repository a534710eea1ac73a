use rand::seq::SliceRandom;
use synth_model::{
    AllergyIntolerance, CodeableConcept, Reaction, ReactionSeverity, Reference, ResourceId,
    ResourceType,
};
use synth_terminology::catalog::{
    ALLERGENS, ALLERGY_ACTIVE, ALLERGY_CONFIRMED, REACTION_MANIFESTATIONS,
};

use crate::context::GenerationContext;

/// Creates an AllergyIntolerance with a random allergen and severity.
pub fn create_allergy_intolerance(
    ctx: &mut GenerationContext,
    patient_id: &ResourceId,
) -> AllergyIntolerance {
    let allergen = ALLERGENS.choose(ctx.rng());
    let id = ctx.new_id();
    let manifestation = REACTION_MANIFESTATIONS.choose(ctx.rng());
    let severity = ReactionSeverity::ALL
        .choose(ctx.rng())
        .copied()
        .unwrap_or(ReactionSeverity::Mild);

    AllergyIntolerance {
        id,
        clinical_status: CodeableConcept::from(&ALLERGY_ACTIVE),
        verification_status: CodeableConcept::from(&ALLERGY_CONFIRMED),
        code: CodeableConcept::from(allergen),
        patient: Reference::to(ResourceType::Patient, patient_id),
        reaction: vec![Reaction {
            manifestation: vec![CodeableConcept::from(manifestation)],
            severity,
        }],
    }
}
