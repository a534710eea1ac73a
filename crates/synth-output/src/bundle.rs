//! Bundle assembly.
//!
//! [`bundle`] wraps resources in their JSON form into a single container
//! resource. It performs no validation; callers decide which resources are
//! eligible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use synth_model::ResourceType;
use uuid::Uuid;

/// The `type` of a Bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    #[default]
    Collection,
}

impl BundleType {
    pub const ALL: [BundleType; 9] = [
        BundleType::Document,
        BundleType::Message,
        BundleType::Transaction,
        BundleType::TransactionResponse,
        BundleType::Batch,
        BundleType::BatchResponse,
        BundleType::History,
        BundleType::Searchset,
        BundleType::Collection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BundleType::Document => "document",
            BundleType::Message => "message",
            BundleType::Transaction => "transaction",
            BundleType::TransactionResponse => "transaction-response",
            BundleType::Batch => "batch",
            BundleType::BatchResponse => "batch-response",
            BundleType::History => "history",
            BundleType::Searchset => "searchset",
            BundleType::Collection => "collection",
        }
    }
}

impl fmt::Display for BundleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        BundleType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown bundle type: {s}"))
    }
}

/// One addressed entry of a Bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    pub full_url: String,
    pub resource: Value,
}

/// A container resource over an ordered list of resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: ResourceType,
    #[serde(rename = "type")]
    pub bundle_type: BundleType,
    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    pub fn len(&self) -> usize {
        self.entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }

    /// The embedded resources, in entry order.
    pub fn resources(&self) -> impl Iterator<Item = &Value> {
        self.entry.iter().map(|entry| &entry.resource)
    }
}

/// Wraps `resources` into a Bundle, preserving their order.
///
/// Each entry's `fullUrl` is `urn:uuid:<id>`. A resource without an id gets
/// a fresh random UUID for its `fullUrl`; the resource itself is not changed.
pub fn bundle<I>(resources: I, bundle_type: BundleType) -> Bundle
where
    I: IntoIterator<Item = Value>,
{
    let entry = resources
        .into_iter()
        .map(|resource| BundleEntry {
            full_url: full_url(&resource),
            resource,
        })
        .collect();
    Bundle {
        resource_type: ResourceType::Bundle,
        bundle_type,
        entry,
    }
}

/// Returns the `urn:uuid:` address of a resource.
pub fn full_url(resource: &Value) -> String {
    match resource.get("id") {
        Some(Value::String(id)) if !id.is_empty() => format!("urn:uuid:{id}"),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            format!("urn:uuid:{}", Uuid::new_v4())
        }
        Some(other) => format!("urn:uuid:{other}"),
    }
}
