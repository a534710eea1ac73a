//! Terminology catalog for synthetic clinical records.
//!
//! Each clinical domain (gender, encounter class, conditions, medications,
//! procedures, observations, allergens, ...) is a [`ConceptSet`] of coded
//! concepts. Generated resources only ever carry codes listed here.

pub mod catalog;
pub mod concept;
pub mod observation;
pub mod systems;

pub use catalog::{contains, lookup, set_by_name};
pub use concept::{Concept, ConceptSet};
pub use observation::ObservationKind;
