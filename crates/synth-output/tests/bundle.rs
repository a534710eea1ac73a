//! Bundle assembly over JSON resources.

use proptest::prelude::*;
use serde_json::{Value, json};

use synth_output::{Bundle, BundleType, bundle};

#[test]
fn bundle_wraps_resources_with_urn_addresses() {
    let resources = vec![
        json!({"resourceType": "Patient", "id": "p1"}),
        json!({"resourceType": "Encounter", "id": "e1"}),
    ];
    let document = bundle(resources.clone(), BundleType::Collection);

    let value = serde_json::to_value(&document).expect("serialize");
    assert_eq!(value["resourceType"], "Bundle");
    assert_eq!(value["type"], "collection");
    assert_eq!(value["entry"][0]["fullUrl"], "urn:uuid:p1");
    assert_eq!(value["entry"][1]["fullUrl"], "urn:uuid:e1");
    assert_eq!(document.resources().cloned().collect::<Vec<_>>(), resources);
}

#[test]
fn bundle_type_is_written_in_wire_form() {
    let document = bundle(Vec::new(), BundleType::TransactionResponse);
    insta::assert_snapshot!(
        serde_json::to_string(&document).expect("serialize"),
        @r#"{"resourceType":"Bundle","type":"transaction-response","entry":[]}"#
    );
}

#[test]
fn id_less_resource_is_not_backfilled() {
    let document = bundle(vec![json!({"resourceType": "Patient"})], BundleType::Collection);
    assert_eq!(document.len(), 1);
    assert!(document.entry[0].full_url.starts_with("urn:uuid:"));
    assert!(document.entry[0].resource.get("id").is_none());
}

#[test]
fn bundle_round_trips_through_json() {
    let document = bundle(vec![json!({"resourceType": "Patient", "id": "p1"})], BundleType::Batch);
    let text = serde_json::to_string(&document).expect("serialize");
    let parsed: Bundle = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(parsed, document);
}

fn resource_strategy() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["Patient", "Observation", "Condition"]),
        prop::option::of("[a-z0-9-]{1,12}"),
    )
        .prop_map(|(resource_type, id)| match id {
            Some(id) => json!({"resourceType": resource_type, "id": id}),
            None => json!({"resourceType": resource_type}),
        })
}

proptest! {
    #[test]
    fn bundle_preserves_length_and_order(resources in prop::collection::vec(resource_strategy(), 0..16)) {
        let document = bundle(resources.clone(), BundleType::Collection);
        prop_assert_eq!(document.len(), resources.len());
        for (entry, resource) in document.entry.iter().zip(&resources) {
            prop_assert_eq!(&entry.resource, resource);
            if let Some(id) = resource.get("id").and_then(Value::as_str) {
                prop_assert_eq!(entry.full_url.clone(), format!("urn:uuid:{id}"));
            }
        }
    }
}
