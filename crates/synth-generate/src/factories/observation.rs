use std::fmt;
use std::str::FromStr;

use synth_model::{
    CodeableConcept, Observation, ObservationComponent, ObservationValue, Quantity,
    QuantityValue, Reference, ResourceId, ResourceType, Timestamp,
};
use synth_terminology::ObservationKind;
use synth_terminology::catalog::{
    DIASTOLIC_BLOOD_PRESSURE, SYSTOLIC_BLOOD_PRESSURE, VITAL_SIGNS_CATEGORY,
};

use crate::context::{GenerationContext, round1};

const PLACEHOLDER_VALUE: &str = "Synthetic observation";

/// An observation type requested from the generator.
///
/// Recognized kinds carry a catalog code and a sampled value; anything else
/// becomes a text-only placeholder observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObservationType {
    Recognized(ObservationKind),
    Other(String),
}

impl ObservationType {
    /// All recognized kinds, in catalog order.
    pub fn recognized() -> Vec<ObservationType> {
        ObservationKind::ALL
            .into_iter()
            .map(ObservationType::Recognized)
            .collect()
    }

    pub fn kind(&self) -> Option<ObservationKind> {
        match self {
            ObservationType::Recognized(kind) => Some(*kind),
            ObservationType::Other(_) => None,
        }
    }
}

impl From<ObservationKind> for ObservationType {
    fn from(kind: ObservationKind) -> Self {
        ObservationType::Recognized(kind)
    }
}

impl FromStr for ObservationType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<ObservationKind>() {
            Ok(kind) => ObservationType::Recognized(kind),
            Err(_) => ObservationType::Other(s.trim().to_string()),
        })
    }
}

impl fmt::Display for ObservationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationType::Recognized(kind) => write!(f, "{kind}"),
            ObservationType::Other(name) => f.write_str(name),
        }
    }
}

/// Sampling model for a single-quantity vital sign.
struct VitalModel {
    mean: f64,
    std_dev: f64,
    unit: &'static str,
    integer: bool,
}

const SYSTOLIC: VitalModel = VitalModel {
    mean: 120.0,
    std_dev: 15.0,
    unit: "mmHg",
    integer: true,
};
const DIASTOLIC: VitalModel = VitalModel {
    mean: 80.0,
    std_dev: 10.0,
    unit: "mmHg",
    integer: true,
};

fn vital_model(kind: ObservationKind) -> Option<VitalModel> {
    let (mean, std_dev, unit, integer) = match kind {
        ObservationKind::BloodPressure => return None,
        ObservationKind::HeartRate => (72.0, 8.0, "beats/min", true),
        ObservationKind::Temperature => (98.6, 0.7, "F", false),
        ObservationKind::Glucose => (100.0, 25.0, "mg/dL", false),
        ObservationKind::Cholesterol => (190.0, 35.0, "mg/dL", false),
        ObservationKind::Spo2 => (97.0, 2.0, "%", false),
    };
    Some(VitalModel {
        mean,
        std_dev,
        unit,
        integer,
    })
}

fn sample(ctx: &mut GenerationContext, model: &VitalModel) -> Quantity {
    let raw = ctx.gaussian(model.mean, model.std_dev);
    let value = if model.integer {
        QuantityValue::Integer(raw.trunc() as i64)
    } else {
        QuantityValue::Decimal(round1(raw))
    };
    Quantity::new(value, model.unit)
}

/// Samples the value shape for an observation type.
pub fn observation_value(
    ctx: &mut GenerationContext,
    observation_type: &ObservationType,
) -> ObservationValue {
    let Some(kind) = observation_type.kind() else {
        return ObservationValue::Text {
            value_string: PLACEHOLDER_VALUE.to_string(),
        };
    };
    match vital_model(kind) {
        Some(model) => ObservationValue::Quantity {
            value_quantity: sample(ctx, &model),
        },
        None => {
            let systolic = sample(ctx, &SYSTOLIC);
            let diastolic = sample(ctx, &DIASTOLIC);
            ObservationValue::Components {
                component: vec![
                    ObservationComponent {
                        code: CodeableConcept::from(&SYSTOLIC_BLOOD_PRESSURE),
                        value_quantity: systolic,
                    },
                    ObservationComponent {
                        code: CodeableConcept::from(&DIASTOLIC_BLOOD_PRESSURE),
                        value_quantity: diastolic,
                    },
                ],
            }
        }
    }
}

/// Creates a final vital-signs Observation for the patient and encounter.
pub fn create_observation(
    ctx: &mut GenerationContext,
    patient_id: &ResourceId,
    encounter_id: &ResourceId,
    observation_type: &ObservationType,
) -> Observation {
    let id = ctx.new_id();
    let code = match observation_type {
        ObservationType::Recognized(kind) => CodeableConcept::from(kind.concept()),
        ObservationType::Other(name) => CodeableConcept::text_only(name.clone()),
    };
    let value = observation_value(ctx, observation_type);

    Observation {
        id,
        status: "final".to_string(),
        category: vec![CodeableConcept::from(&VITAL_SIGNS_CATEGORY)],
        code,
        subject: Reference::to(ResourceType::Patient, patient_id),
        encounter: Reference::to(ResourceType::Encounter, encounter_id),
        effective_date_time: Timestamp::now(),
        value,
    }
}
