//! Bridge between the rostering domain and the GA engine.
//!
//! [`RosterGaProblem`] owns the immutable problem description plus the
//! operator and progress settings, and implements
//! [`GaProblem`](crate::ga::GaProblem) on top of the chromosome operators
//! and the penalty evaluator.

use rand::Rng;

use super::chromosome::{cell_mutation, row_crossover, ShiftChromosome};
use super::fitness;
use super::model::RosterProblem;
use crate::ga::GaProblem;

/// Default probability that one cell is redrawn during mutation.
pub const CELL_MUTATION_RATE: f64 = 0.01;

type ProgressSink = Box<dyn Fn(usize, i64) + Send + Sync>;

/// GA problem definition for shift rostering.
///
/// # Example
///
/// ```
/// use shift_scheduler::ga::{GaConfig, GaRunner};
/// use shift_scheduler::roster::{Role, RosterGaProblem, RosterProblem};
/// use std::collections::HashMap;
///
/// let problem = RosterProblem::new(vec![Role::Staff; 8], HashMap::new(), 5)?;
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(10)
///     .with_seed(7);
/// let result = GaRunner::run(&RosterGaProblem::new(problem), &config);
/// assert!(result.best_fitness >= 0);
/// # Ok::<(), shift_scheduler::RosterError>(())
/// ```
pub struct RosterGaProblem {
    problem: RosterProblem,
    mutation_rate: f64,
    progress_every: usize,
    progress: Option<ProgressSink>,
}

impl RosterGaProblem {
    /// Wraps a validated problem description with default settings:
    /// [`CELL_MUTATION_RATE`] and no progress reporting.
    pub fn new(problem: RosterProblem) -> Self {
        Self {
            problem,
            mutation_rate: CELL_MUTATION_RATE,
            progress_every: 0,
            progress: None,
        }
    }

    /// Sets the per-cell mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Reports progress every `every` generations (`0` = silent).
    ///
    /// Without a custom sink, progress goes to stderr as
    /// `generation N: best penalty P`.
    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    /// Replaces the default stderr progress line with a custom sink.
    pub fn with_progress(mut self, sink: impl Fn(usize, i64) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// The wrapped problem description.
    pub fn problem(&self) -> &RosterProblem {
        &self.problem
    }
}

impl GaProblem for RosterGaProblem {
    type Individual = ShiftChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> ShiftChromosome {
        ShiftChromosome::random(&self.problem, rng)
    }

    fn evaluate(&self, individual: &ShiftChromosome) -> i64 {
        fitness::penalty(&self.problem, individual)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &ShiftChromosome,
        parent2: &ShiftChromosome,
        rng: &mut R,
    ) -> ShiftChromosome {
        row_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut ShiftChromosome, rng: &mut R) {
        cell_mutation(individual, &self.problem, self.mutation_rate, rng);
    }

    fn on_generation(&self, generation: usize, best_fitness: i64) {
        if self.progress_every == 0 || generation % self.progress_every != 0 {
            return;
        }
        match &self.progress {
            Some(sink) => sink(generation, best_fitness),
            None => eprintln!("generation {generation}: best penalty {best_fitness}"),
        }
    }
}
