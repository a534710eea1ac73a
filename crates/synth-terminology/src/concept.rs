//! Coded concepts and ordered concept sets.

use rand::Rng;
use serde::Serialize;

/// A single coded concept: terminology system URI, code, and display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Concept {
    pub system: &'static str,
    pub code: &'static str,
    pub display: &'static str,
}

impl Concept {
    pub const fn new(system: &'static str, code: &'static str, display: &'static str) -> Self {
        Self {
            system,
            code,
            display,
        }
    }
}

/// An ordered, non-empty set of concepts for one clinical domain.
///
/// Every domain in the catalog (gender, encounter class, conditions, ...) is
/// expressed as a `ConceptSet`, so selection works the same way regardless
/// of how many entries a domain has or how it is keyed.
#[derive(Debug, Clone, Copy)]
pub struct ConceptSet {
    name: &'static str,
    concepts: &'static [Concept],
}

impl ConceptSet {
    /// Creates a concept set.
    ///
    /// Evaluated in const context by the catalog, so an empty set is a
    /// compile-time error rather than a runtime failure.
    pub const fn new(name: &'static str, concepts: &'static [Concept]) -> Self {
        assert!(!concepts.is_empty(), "concept set must not be empty");
        Self { name, concepts }
    }

    /// Domain name (e.g. "conditions").
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn concepts(&self) -> &'static [Concept] {
        self.concepts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Draws one concept uniformly.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static Concept {
        &self.concepts[rng.gen_range(0..self.concepts.len())]
    }

    /// Draws one concept by roulette-wheel selection over `weights`.
    ///
    /// Weights pair positionally with the set's concepts; missing weights
    /// count as zero and negative weights are clamped to zero. When the draw
    /// lands past the cumulative total (rounding, or all-zero weights) the
    /// last concept is returned.
    pub fn choose_weighted<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        weights: &[f64],
    ) -> &'static Concept {
        let total: f64 = self
            .concepts
            .iter()
            .enumerate()
            .map(|(idx, _)| weight_at(weights, idx))
            .sum();
        let last = &self.concepts[self.concepts.len() - 1];
        if total <= 0.0 {
            return last;
        }
        let draw = rng.gen_range(0.0..=total);
        let mut cumulative = 0.0;
        for (idx, concept) in self.concepts.iter().enumerate() {
            let weight = weight_at(weights, idx);
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            if draw <= cumulative {
                return concept;
            }
        }
        last
    }
}

fn weight_at(weights: &[f64], idx: usize) -> f64 {
    weights.get(idx).copied().unwrap_or(0.0).max(0.0)
}
