use synth_model::{
    Address, BodyMeasurements, CodeableConcept, ContactPoint, Extension, HumanName, Identifier,
    Patient,
};
use synth_terminology::catalog::{ETHNICITY, GENDER};
use synth_terminology::systems::{MRN_IDENTIFIER, US_CORE_ETHNICITY_EXTENSION};

use crate::context::{GenerationContext, round1};

const MAX_AGE_YEARS: u32 = 90;
const MRN_PATTERN: &str = "??#####";

/// Creates a Patient with demographics and age-correlated body measurements.
pub fn create_patient(ctx: &mut GenerationContext) -> Patient {
    let id = ctx.new_id();
    let gender = GENDER.choose(ctx.rng()).code.to_string();
    let today = ctx.anchor().date_naive();
    let birth_date =
        ctx.demographic(|provider, rng| provider.date_of_birth(rng, today, MAX_AGE_YEARS));
    let age = (today - birth_date).num_days() / 365;
    let body_measurements = body_measurements_for_age(ctx, age);
    let mrn = ctx.unique_identifier(MRN_PATTERN);

    let name = HumanName {
        family: ctx.demographic(|provider, rng| provider.last_name(rng)),
        given: vec![ctx.demographic(|provider, rng| provider.first_name(rng))],
    };
    let ethnicity = CodeableConcept::from(ETHNICITY.choose(ctx.rng()));
    let address = Address {
        line: vec![ctx.demographic(|provider, rng| provider.street_address(rng))],
        city: ctx.demographic(|provider, rng| provider.city(rng)),
        state: ctx.demographic(|provider, rng| provider.state_abbr(rng)),
        postal_code: ctx.demographic(|provider, rng| provider.postcode(rng)),
        country: "USA".to_string(),
    };
    let telecom = vec![
        ContactPoint {
            system: "phone".to_string(),
            value: ctx.demographic(|provider, rng| provider.phone_number(rng)),
            use_: "mobile".to_string(),
        },
        ContactPoint {
            system: "email".to_string(),
            value: ctx.demographic(|provider, rng| provider.email(rng)),
            use_: "home".to_string(),
        },
    ];

    Patient {
        id,
        identifier: vec![Identifier {
            use_: Some("official".to_string()),
            system: MRN_IDENTIFIER.to_string(),
            value: mrn,
        }],
        name: vec![name],
        gender,
        birth_date,
        extension: vec![Extension {
            url: US_CORE_ETHNICITY_EXTENSION.to_string(),
            value_codeable_concept: ethnicity,
        }],
        address: vec![address],
        telecom,
        body_measurements,
    }
}

/// Gaussian weight/height around `20 + 0.8·age` kg and `120 + 1.2·age` cm.
///
/// Values are not clamped and can be implausible at the extremes.
pub fn body_measurements_for_age(ctx: &mut GenerationContext, age: i64) -> BodyMeasurements {
    let age = age as f64;
    let weight_kg = round1(ctx.gaussian(20.0 + age * 0.8, 10.0));
    let height_cm = round1(ctx.gaussian(120.0 + age * 1.2, 8.0));
    BodyMeasurements {
        height_cm,
        weight_kg,
    }
}
