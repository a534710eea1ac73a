//! The terminology catalog.
//!
//! Every coded value a generated resource can carry is listed here. The
//! catalog is plain `const` data, so it is fixed at compile time and shared
//! read-only by the whole process.

use crate::concept::{Concept, ConceptSet};
use crate::systems::{
    ADMINISTRATIVE_GENDER, ALLERGY_CLINICAL, ALLERGY_VERIFICATION, CDC_RACE_ETHNICITY,
    CONDITION_CLINICAL, CONDITION_VERIFICATION, CPT, ICD_10, LOINC, OBSERVATION_CATEGORY, RXNORM,
    SNOMED_CT, V2_DEGREE, V3_ACT_CODE,
};

pub const GENDER: ConceptSet = ConceptSet::new(
    "gender",
    &[
        Concept::new(ADMINISTRATIVE_GENDER, "male", "Male"),
        Concept::new(ADMINISTRATIVE_GENDER, "female", "Female"),
        Concept::new(ADMINISTRATIVE_GENDER, "other", "Other"),
    ],
);

pub const ENCOUNTER_CLASS: ConceptSet = ConceptSet::new(
    "encounter",
    &[
        Concept::new(V3_ACT_CODE, "AMB", "ambulatory"),
        Concept::new(V3_ACT_CODE, "IMP", "inpatient encounter"),
        Concept::new(V3_ACT_CODE, "EMER", "emergency"),
    ],
);

pub const CONDITIONS: ConceptSet = ConceptSet::new(
    "conditions",
    &[
        Concept::new(ICD_10, "E11", "Type 2 diabetes mellitus"),
        Concept::new(ICD_10, "I10", "Essential (primary) hypertension"),
        Concept::new(ICD_10, "J45", "Asthma"),
    ],
);

pub const MEDICATIONS: ConceptSet = ConceptSet::new(
    "medications",
    &[
        Concept::new(RXNORM, "860975", "Metformin 500 MG"),
        Concept::new(RXNORM, "617314", "Lisinopril 10 MG"),
        Concept::new(RXNORM, "198211", "Simvastatin 20 MG"),
    ],
);

pub const PROCEDURES: ConceptSet = ConceptSet::new(
    "procedures",
    &[
        Concept::new(CPT, "93000", "Electrocardiogram"),
        Concept::new(CPT, "71020", "Chest x-ray"),
    ],
);

/// Observation codes, in the order of [`crate::ObservationKind::ALL`].
pub const OBSERVATIONS: ConceptSet = ConceptSet::new(
    "observations",
    &[
        Concept::new(LOINC, "85354-9", "Blood pressure panel"),
        Concept::new(LOINC, "8867-4", "Heart rate"),
        Concept::new(LOINC, "8310-5", "Body temperature"),
        Concept::new(LOINC, "2339-0", "Glucose [Mass/volume] in Blood"),
        Concept::new(LOINC, "2093-3", "Cholesterol"),
        Concept::new(
            LOINC,
            "59408-5",
            "Oxygen saturation in Arterial blood by Pulse oximetry",
        ),
    ],
);

pub const SYSTOLIC_BLOOD_PRESSURE: Concept =
    Concept::new(LOINC, "8480-6", "Systolic blood pressure");
pub const DIASTOLIC_BLOOD_PRESSURE: Concept =
    Concept::new(LOINC, "8462-4", "Diastolic blood pressure");

pub const BLOOD_PRESSURE_COMPONENTS: ConceptSet = ConceptSet::new(
    "blood-pressure-components",
    &[SYSTOLIC_BLOOD_PRESSURE, DIASTOLIC_BLOOD_PRESSURE],
);

pub const DIAGNOSTIC_REPORTS: ConceptSet = ConceptSet::new(
    "diagnostic-reports",
    &[
        Concept::new(LOINC, "58410-2", "Complete blood count"),
        Concept::new(LOINC, "24323-8", "Lipid panel"),
        Concept::new(LOINC, "2093-3", "Cholesterol"),
    ],
);

pub const ALLERGENS: ConceptSet = ConceptSet::new(
    "allergens",
    &[
        Concept::new(SNOMED_CT, "91935009", "Peanut"),
        Concept::new(SNOMED_CT, "235719002", "Penicillin"),
        Concept::new(SNOMED_CT, "300916003", "Latex"),
    ],
);

pub const REACTION_MANIFESTATIONS: ConceptSet = ConceptSet::new(
    "reaction-manifestations",
    &[Concept::new(SNOMED_CT, "271807003", "Rash")],
);

pub const ETHNICITY: ConceptSet = ConceptSet::new(
    "ethnicity",
    &[
        Concept::new(CDC_RACE_ETHNICITY, "2135-2", "Hispanic or Latino"),
        Concept::new(CDC_RACE_ETHNICITY, "2186-5", "Not Hispanic or Latino"),
    ],
);

pub const CONDITION_ACTIVE: Concept = Concept::new(CONDITION_CLINICAL, "active", "Active");
pub const CONDITION_CONFIRMED: Concept =
    Concept::new(CONDITION_VERIFICATION, "confirmed", "Confirmed");
pub const ALLERGY_ACTIVE: Concept = Concept::new(ALLERGY_CLINICAL, "active", "Active");
pub const ALLERGY_CONFIRMED: Concept = Concept::new(ALLERGY_VERIFICATION, "confirmed", "Confirmed");
pub const VITAL_SIGNS_CATEGORY: Concept =
    Concept::new(OBSERVATION_CATEGORY, "vital-signs", "Vital Signs");
pub const DOCTOR_OF_MEDICINE: Concept = Concept::new(V2_DEGREE, "MD", "Doctor of Medicine");

/// Fixed status and category concepts stamped on resources.
pub const STATUSES: ConceptSet = ConceptSet::new(
    "statuses",
    &[
        CONDITION_ACTIVE,
        CONDITION_CONFIRMED,
        ALLERGY_ACTIVE,
        ALLERGY_CONFIRMED,
        VITAL_SIGNS_CATEGORY,
        DOCTOR_OF_MEDICINE,
    ],
);

/// All concept sets in the catalog.
pub const ALL_SETS: &[ConceptSet] = &[
    GENDER,
    ENCOUNTER_CLASS,
    CONDITIONS,
    MEDICATIONS,
    PROCEDURES,
    OBSERVATIONS,
    BLOOD_PRESSURE_COMPONENTS,
    DIAGNOSTIC_REPORTS,
    ALLERGENS,
    REACTION_MANIFESTATIONS,
    ETHNICITY,
    STATUSES,
];

/// Looks up a concept by its system/code pair.
pub fn lookup(system: &str, code: &str) -> Option<&'static Concept> {
    ALL_SETS
        .iter()
        .flat_map(ConceptSet::concepts)
        .find(|concept| concept.system == system && concept.code == code)
}

/// Returns true if the system/code pair is listed in the catalog.
pub fn contains(system: &str, code: &str) -> bool {
    lookup(system, code).is_some()
}

/// Returns the concept set with the given domain name.
pub fn set_by_name(name: &str) -> Option<&'static ConceptSet> {
    ALL_SETS.iter().find(|set| set.name() == name)
}
