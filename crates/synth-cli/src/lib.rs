//! CLI library components for fhir-synth.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
