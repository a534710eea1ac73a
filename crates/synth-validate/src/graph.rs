//! Referential integrity within one subject graph.

use std::collections::HashSet;

use serde::Serialize;
use synth_model::{ResourceType, SubjectGraph};

/// A reference whose target is not present in the same graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub resource_type: ResourceType,
    pub resource_id: String,
    pub field: &'static str,
    pub reference: String,
}

/// Lists every outgoing reference of the graph whose `<Type>/<id>` target
/// does not name a resource in the same graph.
pub fn check_graph_references(graph: &SubjectGraph) -> Vec<DanglingReference> {
    let present: HashSet<String> = graph
        .resources()
        .iter()
        .map(|resource| resource.reference().reference)
        .collect();

    let mut dangling = Vec::new();
    for resource in graph.resources() {
        for (field, reference) in resource.outgoing_references() {
            if !present.contains(&reference.reference) {
                dangling.push(DanglingReference {
                    resource_type: resource.resource_type(),
                    resource_id: resource.id().to_string(),
                    field,
                    reference: reference.reference.clone(),
                });
            }
        }
    }
    dangling
}
