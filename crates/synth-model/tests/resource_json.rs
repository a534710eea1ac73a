//! Wire-shape tests for typed resources.

use chrono::{TimeZone, Utc};
use serde_json::json;

use synth_model::{
    CodeableConcept, ModelError, Observation, ObservationComponent, ObservationValue, Quantity,
    QuantityValue, Reference, Resource, ResourceId, ResourceType, SubjectGraph, Timestamp,
    coded_concept,
};
use synth_terminology::catalog::{SYSTOLIC_BLOOD_PRESSURE, VITAL_SIGNS_CATEGORY};

fn id(value: &str) -> ResourceId {
    ResourceId::new(value).expect("valid id")
}

fn fixed_time() -> Timestamp {
    Timestamp::from(
        Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
            .single()
            .expect("valid instant"),
    )
}

fn heart_rate(obs_id: &str, beats: i64) -> Observation {
    Observation {
        id: id(obs_id),
        status: "final".to_string(),
        category: vec![CodeableConcept::from(&VITAL_SIGNS_CATEGORY)],
        code: coded_concept("http://loinc.org", "8867-4", "Heart rate"),
        subject: Reference::to(ResourceType::Patient, &id("p1")),
        encounter: Reference::to(ResourceType::Encounter, &id("e1")),
        effective_date_time: fixed_time(),
        value: ObservationValue::Quantity {
            value_quantity: Quantity::new(QuantityValue::Integer(beats), "beats/min"),
        },
    }
}

#[test]
fn reference_is_type_slash_id() {
    let reference = Reference::to(ResourceType::MedicationRequest, &id("abc-1"));
    assert_eq!(reference.reference, "MedicationRequest/abc-1");
    assert_eq!(reference.parts(), Some(("MedicationRequest", "abc-1")));
    assert_eq!(reference.target_id(), Some("abc-1"));
}

#[test]
fn coded_concept_repeats_display_as_text() {
    let concept = coded_concept("http://snomed.info/sct", "271807003", "Rash");
    let value = serde_json::to_value(&concept).expect("serialize");
    assert_eq!(
        value,
        json!({
            "coding": [{"system": "http://snomed.info/sct", "code": "271807003", "display": "Rash"}],
            "text": "Rash"
        })
    );
}

#[test]
fn observation_serializes_with_resource_type_and_flattened_value() {
    let resource = Resource::from(heart_rate("o1", 71));
    let value = resource.to_value().expect("to value");
    assert_eq!(value["resourceType"], "Observation");
    assert_eq!(value["id"], "o1");
    assert_eq!(value["subject"]["reference"], "Patient/p1");
    assert_eq!(value["effectiveDateTime"], "2024-05-06T07:08:09+00:00");
    assert_eq!(value["valueQuantity"], json!({"value": 71, "unit": "beats/min"}));
    assert!(value.get("value").is_none());
    assert!(value.get("component").is_none());
}

#[test]
fn component_observation_round_trips_through_json() {
    let mut observation = heart_rate("o2", 0);
    observation.code = coded_concept("http://loinc.org", "85354-9", "Blood pressure panel");
    observation.value = ObservationValue::Components {
        component: vec![ObservationComponent {
            code: CodeableConcept::from(&SYSTOLIC_BLOOD_PRESSURE),
            value_quantity: Quantity::new(QuantityValue::Integer(118), "mmHg"),
        }],
    };
    let resource = Resource::from(observation);
    let value = resource.to_value().expect("to value");
    assert_eq!(value["component"][0]["valueQuantity"]["value"], 118);

    let back = Resource::from_value(value).expect("from value");
    assert_eq!(back, resource);
    let Resource::Observation(parsed) = back else {
        panic!("expected observation");
    };
    let systolic = parsed
        .component_by_text("Systolic blood pressure")
        .expect("systolic component");
    assert_eq!(systolic.value_quantity.value, QuantityValue::Integer(118));
}

#[test]
fn unknown_resource_type_is_a_model_error() {
    let err = "Medication".parse::<ResourceType>().unwrap_err();
    assert!(matches!(err, ModelError::UnknownResourceType(_)));
    insta::assert_snapshot!(err.to_string(), @"unknown resource type: Medication");
    assert_eq!("Bundle".parse::<ResourceType>().ok(), Some(ResourceType::Bundle));
}

#[test]
fn subject_graph_finds_last_observation_by_text() {
    let graph = SubjectGraph::from_resources(vec![
        Resource::from(heart_rate("o1", 60)),
        Resource::from(heart_rate("o2", 80)),
    ]);
    assert!(graph.patient().is_none());
    assert!(graph.encounter().is_none());
    assert_eq!(graph.observations().count(), 2);
    let found = graph.observation_by_text("Heart rate").expect("heart rate");
    assert_eq!(found.id.as_str(), "o2");
    assert!(graph.observation_by_text("Body temperature").is_none());
}

#[test]
fn outgoing_references_name_their_fields() {
    let resource = Resource::from(heart_rate("o1", 60));
    let fields: Vec<(&str, &str)> = resource
        .outgoing_references()
        .into_iter()
        .map(|(field, reference)| (field, reference.reference.as_str()))
        .collect();
    assert_eq!(
        fields,
        [("subject", "Patient/p1"), ("encounter", "Encounter/e1")]
    );
}
