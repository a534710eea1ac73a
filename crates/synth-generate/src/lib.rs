//! Synthetic subject graph generation.
//!
//! [`SubjectGraphGenerator`] drives one factory per resource kind in
//! dependency order and threads the generated ids between them. Randomness
//! and demographic values are injected through [`GenerationContext`], never
//! read from process-global state.

pub mod context;
pub mod demographics;
pub mod error;
pub mod factories;
pub mod generator;
pub mod options;

pub use context::GenerationContext;
pub use demographics::{BuiltinDemographics, DemographicProvider};
pub use error::{GenerateError, Result};
pub use factories::ObservationType;
pub use generator::SubjectGraphGenerator;
pub use options::GeneratorOptions;
