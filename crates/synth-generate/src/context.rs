use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};
use synth_model::ResourceId;
use tracing::warn;

use crate::demographics::DemographicProvider;

const MAX_UNIQUE_ATTEMPTS: usize = 1_000;

/// State threaded through every factory call: the random source, the
/// demographic provider, the anchor instant, and identifiers that must stay
/// unique for the lifetime of one generator.
pub struct GenerationContext {
    rng: StdRng,
    demographics: Box<dyn DemographicProvider>,
    anchor: DateTime<Utc>,
    issued_mrns: HashSet<String>,
}

impl GenerationContext {
    pub fn new(
        seed: Option<u64>,
        anchor: DateTime<Utc>,
        demographics: Box<dyn DemographicProvider>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            demographics,
            anchor,
            issued_mrns: HashSet::new(),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn new_id(&mut self) -> ResourceId {
        ResourceId::random(&mut self.rng)
    }

    /// Runs `f` with the demographic provider and the random source.
    pub fn demographic<T>(
        &mut self,
        f: impl FnOnce(&dyn DemographicProvider, &mut dyn RngCore) -> T,
    ) -> T {
        f(self.demographics.as_ref(), &mut self.rng)
    }

    /// One draw from a normal distribution.
    ///
    /// A non-finite or negative `std_dev` degrades to returning `mean`.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => mean,
        }
    }

    /// Fills `pattern` until a value not yet issued by this context comes up.
    pub fn unique_identifier(&mut self, pattern: &str) -> String {
        let mut candidate = String::new();
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            candidate = self.demographic(|provider, rng| provider.bothify(rng, pattern));
            if self.issued_mrns.insert(candidate.clone()) {
                return candidate;
            }
        }
        warn!(pattern, "unique identifier space exhausted, reusing value");
        candidate
    }
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::BuiltinDemographics;

    fn context(seed: u64) -> GenerationContext {
        GenerationContext::new(Some(seed), Utc::now(), Box::new(BuiltinDemographics))
    }

    #[test]
    fn unique_identifiers_do_not_repeat() {
        let mut ctx = context(1);
        let mut seen = HashSet::new();
        for _ in 0..300 {
            assert!(seen.insert(ctx.unique_identifier("??#####")));
        }
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(98.64), 98.6);
        assert_eq!(round1(-3.26), -3.3);
        assert_eq!(round1(120.0), 120.0);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = context(9);
        let mut b = context(9);
        assert_eq!(a.gaussian(72.0, 8.0), b.gaussian(72.0, 8.0));
        assert_eq!(a.new_id(), b.new_id());
    }
}
