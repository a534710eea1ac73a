//! Shared data types embedded in resources.
//!
//! These mirror the small subset of clinical datatypes the generator emits:
//! references, coded concepts, quantities, periods and demographic parts.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use synth_terminology::Concept;

use crate::ResourceType;
use crate::ids::ResourceId;

/// Pointer to another resource as `"<ResourceType>/<id>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,
}

impl Reference {
    pub fn to(resource_type: ResourceType, id: &ResourceId) -> Self {
        Self {
            reference: format!("{resource_type}/{id}"),
        }
    }

    /// Splits the reference into its type and id parts.
    pub fn parts(&self) -> Option<(&str, &str)> {
        self.reference.split_once('/')
    }

    /// Returns the referenced id, if the reference has a `/` separator.
    pub fn target_id(&self) -> Option<&str> {
        self.parts().map(|(_, id)| id)
    }
}

/// Builds a reference to `id` of the given resource type.
pub fn reference(resource_type: ResourceType, id: &ResourceId) -> Reference {
    Reference::to(resource_type, id)
}

/// Display-only pointer (no resolvable target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayReference {
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
}

impl From<&Concept> for Coding {
    fn from(concept: &Concept) -> Self {
        Self {
            system: concept.system.to_string(),
            code: concept.code.to_string(),
            display: concept.display.to_string(),
        }
    }
}

/// Terminology-backed value: one coding plus its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,
    pub text: String,
}

impl CodeableConcept {
    /// A concept carrying only display text and no coding.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            coding: Vec::new(),
            text: text.into(),
        }
    }

    /// Returns the first coding's code, if any.
    pub fn first_code(&self) -> Option<&str> {
        self.coding.first().map(|coding| coding.code.as_str())
    }
}

impl From<&Concept> for CodeableConcept {
    fn from(concept: &Concept) -> Self {
        Self {
            coding: vec![Coding::from(concept)],
            text: concept.display.to_string(),
        }
    }
}

/// Builds `{coding: [{system, code, display}], text: display}`.
pub fn coded_concept(system: &str, code: &str, display: &str) -> CodeableConcept {
    CodeableConcept {
        coding: vec![Coding {
            system: system.to_string(),
            code: code.to_string(),
            display: display.to_string(),
        }],
        text: display.to_string(),
    }
}

/// Numeric quantity value; integer vitals stay integers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityValue {
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityValue::Integer(value) => write!(f, "{value}"),
            QuantityValue::Decimal(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: QuantityValue,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: QuantityValue, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// UTC instant serialized as RFC 3339 with second precision and `+00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| Self(parsed.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: Timestamp,
    pub end: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanName {
    pub family: String,
    pub given: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,
    pub system: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub system: String,
    pub value: String,
    #[serde(rename = "use")]
    pub use_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line: Vec<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub url: String,
    pub value_codeable_concept: CodeableConcept,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_uses_offset_and_whole_seconds() {
        let instant = Utc
            .with_ymd_and_hms(2024, 3, 1, 8, 30, 0)
            .single()
            .expect("valid instant");
        let stamp = Timestamp::from(instant);
        assert_eq!(stamp.to_string(), "2024-03-01T08:30:00+00:00");
        let json = serde_json::to_string(&stamp).expect("serialize");
        let back: Timestamp = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, stamp);
    }

    #[test]
    fn integer_quantities_stay_integers() {
        let value = serde_json::to_value(QuantityValue::Integer(72)).expect("serialize");
        assert!(value.is_i64());
        let value = serde_json::to_value(QuantityValue::Decimal(98.6)).expect("serialize");
        assert!(value.is_f64());
    }

    #[test]
    fn text_only_concept_omits_coding() {
        let value = serde_json::to_value(CodeableConcept::text_only("demo")).expect("serialize");
        assert_eq!(value, serde_json::json!({"text": "demo"}));
    }
}
