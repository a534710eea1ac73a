use synth_model::{CodeableConcept, HumanName, Identifier, Practitioner, Qualification};
use synth_terminology::catalog::DOCTOR_OF_MEDICINE;
use synth_terminology::systems::NPI_IDENTIFIER;

use crate::context::GenerationContext;

const NPI_PATTERN: &str = "#######";

/// Creates a Practitioner with an NPI-identified MD qualification.
pub fn create_practitioner(ctx: &mut GenerationContext) -> Practitioner {
    let id = ctx.new_id();
    let name = HumanName {
        family: ctx.demographic(|provider, rng| provider.last_name(rng)),
        given: vec![ctx.demographic(|provider, rng| provider.first_name(rng))],
    };
    let npi = ctx.demographic(|provider, rng| provider.bothify(rng, NPI_PATTERN));

    Practitioner {
        id,
        name: vec![name],
        qualification: vec![Qualification {
            identifier: vec![Identifier {
                use_: None,
                system: NPI_IDENTIFIER.to_string(),
                value: npi,
            }],
            code: CodeableConcept::from(&DOCTOR_OF_MEDICINE),
        }],
    }
}
