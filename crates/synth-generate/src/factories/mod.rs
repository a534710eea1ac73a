//! One factory per clinical resource kind.
//!
//! Factories take the related ids they point at and never fail; the
//! orchestrator guarantees those ids exist before calling them.

pub mod allergy;
pub mod condition;
pub mod diagnostic_report;
pub mod encounter;
pub mod medication;
pub mod observation;
pub mod patient;
pub mod practitioner;
pub mod procedure;

use chrono::{DateTime, TimeDelta, Utc};
use synth_model::{Period, Timestamp};

pub use allergy::create_allergy_intolerance;
pub use condition::create_condition;
pub use diagnostic_report::create_diagnostic_report;
pub use encounter::create_encounter;
pub use medication::create_medication_request;
pub use observation::{ObservationType, create_observation};
pub use patient::create_patient;
pub use practitioner::create_practitioner;
pub use procedure::create_procedure;

/// A period starting at `start` and lasting `hours`.
pub fn build_period(start: DateTime<Utc>, hours: i64) -> Period {
    Period {
        start: Timestamp::from(start),
        end: Timestamp::from(start + TimeDelta::hours(hours)),
    }
}

/// A period starting at the current wall-clock time.
pub fn current_period(hours: i64) -> Period {
    build_period(Utc::now(), hours)
}
