//! Parent selection strategies.
//!
//! Selection decides which individuals of the previous generation become
//! parents. The strategies form a small closed family dispatched by
//! `match`; swapping one in is a config-time choice, not a runtime plug-in
//! surface.

use rand::Rng;

use super::types::{Fitness, Individual};

/// Selection strategy for choosing parents.
///
/// All strategies assume **minimisation** (lower penalty = better).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament over `k` *distinct* entrants; the lowest penalty wins,
    /// and the earliest-drawn entrant wins ties — deterministic given the
    /// RNG stream.
    ///
    /// `k = 2` (binary tournament, the default) applies light pressure and
    /// preserves diversity; larger `k` converges faster at the risk of
    /// premature convergence.
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Weights are inverted penalties, floored at 1 so a population of
    /// equals is sampled uniformly.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(2)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from an empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
        }
    }
}

/// Tournament among `k` distinct entrants.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let entrants = rand::seq::index::sample(rng, n, k.clamp(1, n));

    let mut best = entrants.index(0);
    for i in 1..entrants.len() {
        let idx = entrants.index(i);
        if population[idx].fitness() < population[best].fitness() {
            best = idx;
        }
    }
    best
}

/// Roulette wheel over inverted penalties.
///
/// weight_i = max_penalty − penalty_i + 1, so the best individual carries
/// the largest weight and every individual keeps a nonzero chance.
fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let penalties: Vec<f64> = population
        .iter()
        .map(|ind| ind.fitness().to_f64())
        .collect();
    let max_penalty = penalties.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let weights: Vec<f64> = penalties.iter().map(|&p| max_penalty - p + 1.0).collect();
    let total: f64 = weights.iter().sum();

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
