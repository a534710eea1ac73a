//! Configuration options for subject graph generation.

use chrono::{DateTime, Utc};

use crate::factories::observation::ObservationType;

/// Options controlling generation.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Reference instant for sampled dates (birth dates, encounter periods).
    /// Defaults to the wall clock when the generator is built.
    pub anchor: Option<DateTime<Utc>>,

    /// Observation types emitted per subject, in order.
    pub observation_types: Vec<ObservationType>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            seed: None,
            anchor: None,
            observation_types: ObservationType::recognized(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_observation_types(mut self, types: Vec<ObservationType>) -> Self {
        self.observation_types = types;
        self
    }
}
