//! Recognized vital-sign observation kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::OBSERVATIONS;
use crate::concept::Concept;

/// An observation type the catalog carries a code for.
///
/// Every subject graph holds one Observation per kind, in the order of
/// [`ObservationKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationKind {
    BloodPressure,
    HeartRate,
    Temperature,
    Glucose,
    Cholesterol,
    Spo2,
}

impl ObservationKind {
    pub const ALL: [ObservationKind; 6] = [
        ObservationKind::BloodPressure,
        ObservationKind::HeartRate,
        ObservationKind::Temperature,
        ObservationKind::Glucose,
        ObservationKind::Cholesterol,
        ObservationKind::Spo2,
    ];

    /// Returns the snake-case key used on the command line and in options.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationKind::BloodPressure => "blood_pressure",
            ObservationKind::HeartRate => "heart_rate",
            ObservationKind::Temperature => "temperature",
            ObservationKind::Glucose => "glucose",
            ObservationKind::Cholesterol => "cholesterol",
            ObservationKind::Spo2 => "spo2",
        }
    }

    /// Returns the LOINC concept coding this kind.
    pub fn concept(&self) -> &'static Concept {
        let idx = match self {
            ObservationKind::BloodPressure => 0,
            ObservationKind::HeartRate => 1,
            ObservationKind::Temperature => 2,
            ObservationKind::Glucose => 3,
            ObservationKind::Cholesterol => 4,
            ObservationKind::Spo2 => 5,
        };
        &OBSERVATIONS.concepts()[idx]
    }

    /// Returns true for kinds whose value is split into components.
    pub fn has_components(&self) -> bool {
        matches!(self, ObservationKind::BloodPressure)
    }
}

impl fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationKind {
    type Err = String;

    /// Parses a kind key (case-insensitive, `-` accepted for `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        ObservationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown observation kind: {s}"))
    }
}
