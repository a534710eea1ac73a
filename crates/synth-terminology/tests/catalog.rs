//! Tests for the terminology catalog.

use std::collections::HashSet;

use synth_terminology::catalog::{
    ALL_SETS, BLOOD_PRESSURE_COMPONENTS, CONDITIONS, ENCOUNTER_CLASS, GENDER, OBSERVATIONS,
    PROCEDURES,
};
use synth_terminology::systems::{ADMINISTRATIVE_GENDER, LOINC};
use synth_terminology::{ObservationKind, contains, lookup, set_by_name};

#[test]
fn gender_set_is_male_female_other() {
    let codes: Vec<&str> = GENDER.concepts().iter().map(|c| c.code).collect();
    assert_eq!(codes, ["male", "female", "other"]);
    assert!(
        GENDER
            .concepts()
            .iter()
            .all(|c| c.system == ADMINISTRATIVE_GENDER)
    );
}

#[test]
fn every_set_is_non_empty_with_unique_codes() {
    for set in ALL_SETS {
        assert!(!set.is_empty(), "{} is empty", set.name());
        let mut seen = HashSet::new();
        for concept in set.concepts() {
            assert!(
                seen.insert((concept.system, concept.code)),
                "duplicate {} in {}",
                concept.code,
                set.name()
            );
        }
    }
}

#[test]
fn set_names_are_unique() {
    let mut seen = HashSet::new();
    for set in ALL_SETS {
        assert!(seen.insert(set.name()), "duplicate set {}", set.name());
    }
}

#[test]
fn lookup_finds_concepts_by_system_and_code() {
    let concept = lookup(LOINC, "8867-4").expect("heart rate");
    assert_eq!(concept.display, "Heart rate");
    assert!(contains(LOINC, "8480-6"));
    assert!(!contains(LOINC, "E11"));
    assert!(lookup("urn:unknown", "male").is_none());
}

#[test]
fn set_by_name_resolves_domains() {
    assert_eq!(set_by_name("conditions").map(|s| s.len()), Some(CONDITIONS.len()));
    assert_eq!(set_by_name("procedures").map(|s| s.len()), Some(2));
    assert!(set_by_name("vaccines").is_none());
}

#[test]
fn observation_kinds_map_onto_observation_set_in_order() {
    let codes: Vec<&str> = ObservationKind::ALL
        .iter()
        .map(|kind| kind.concept().code)
        .collect();
    let expected: Vec<&str> = OBSERVATIONS.concepts().iter().map(|c| c.code).collect();
    assert_eq!(codes, expected);
    assert_eq!(ObservationKind::HeartRate.concept().display, "Heart rate");
    assert_eq!(
        ObservationKind::BloodPressure.concept().display,
        "Blood pressure panel"
    );
}

#[test]
fn observation_kind_parses_keys() {
    for kind in ObservationKind::ALL {
        assert_eq!(kind.as_str().parse::<ObservationKind>(), Ok(kind));
    }
    assert_eq!("Heart-Rate".parse::<ObservationKind>(), Ok(ObservationKind::HeartRate));
    assert!("weight".parse::<ObservationKind>().is_err());
}

#[test]
fn only_blood_pressure_has_components() {
    let with_components: Vec<ObservationKind> = ObservationKind::ALL
        .into_iter()
        .filter(ObservationKind::has_components)
        .collect();
    assert_eq!(with_components, [ObservationKind::BloodPressure]);
    assert_eq!(BLOOD_PRESSURE_COMPONENTS.len(), 2);
}

#[test]
fn encounter_classes_use_act_codes() {
    let displays: Vec<&str> = ENCOUNTER_CLASS
        .concepts()
        .iter()
        .map(|c| c.display)
        .collect();
    assert_eq!(displays, ["ambulatory", "inpatient encounter", "emergency"]);
}
