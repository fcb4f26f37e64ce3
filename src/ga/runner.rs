//! GA evolutionary loop.
//!
//! [`GaRunner`] drives initialise → evaluate → preserve elite → select →
//! recombine → mutate → replace. Within a generation, every child slot is
//! independent: the previous population is read-only, each slot owns its
//! RNG stream and the child it is producing, and the only synchronisation
//! point is the generation barrier.

use rayon::prelude::*;

use super::config::GaConfig;
use super::rng;
use super::types::{Fitness, GaProblem, Individual};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual of the final generation.
    pub best: I,

    /// Its fitness (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness after initialisation and after each generation —
    /// `generations + 1` entries, non-increasing thanks to elitism.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42));
/// println!("best penalty: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion and returns the best individual found.
    ///
    /// Deterministic given `config.seed`, for any worker count: every
    /// child slot derives its own RNG stream from (seed, generation,
    /// slot), so neither thread scheduling nor the size of the rayon pool
    /// can perturb the outcome.
    ///
    /// # Panics
    /// Panics if the configuration is invalid; call [`GaConfig::validate`]
    /// first for a descriptive error.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        config.validate().expect("invalid GaConfig");

        let master_seed = config.seed.unwrap_or_else(rand::random);
        let pop_size = config.population_size;

        // Generation 0: random individuals, evaluated in their slots.
        let mut population: Vec<P::Individual> =
            run_slots(config.parallel, pop_size, |slot| {
                let mut slot_rng = rng::stream_rng(master_seed, 0, slot as u64);
                let mut individual = problem.create_individual(&mut slot_rng);
                let fitness = problem.evaluate(&individual);
                individual.set_fitness(fitness);
                individual
            });

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(population[best_index(&population)].fitness().to_f64());

        for generation in 1..=config.max_generations {
            // The incumbent elite takes slot 0 of the next generation
            // unchanged; only a strictly better child ever displaces it,
            // so the best penalty cannot increase and ties keep the
            // incumbent.
            let elite = population[best_index(&population)].clone();

            // Each remaining slot draws two parents from the read-only
            // previous generation, recombines, mutates, and evaluates.
            let children: Vec<P::Individual> =
                run_slots(config.parallel, pop_size - 1, |slot| {
                    let mut slot_rng =
                        rng::stream_rng(master_seed, generation as u64, slot as u64);
                    let p1 = config.selection.select(&population, &mut slot_rng);
                    let p2 = config.selection.select(&population, &mut slot_rng);
                    let mut child =
                        problem.crossover(&population[p1], &population[p2], &mut slot_rng);
                    problem.mutate(&mut child, &mut slot_rng);
                    let fitness = problem.evaluate(&child);
                    child.set_fitness(fitness);
                    child
                });

            let mut next = Vec::with_capacity(pop_size);
            next.push(elite);
            next.extend(children);
            population = next;

            let best_fitness = population[best_index(&population)].fitness();
            fitness_history.push(best_fitness.to_f64());
            problem.on_generation(generation, best_fitness);
        }

        let best = population[best_index(&population)].clone();
        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            fitness_history,
        }
    }
}

/// Runs `task` once per slot index, serially or on the rayon pool.
///
/// The two paths produce identical vectors because each slot's randomness
/// comes from its own stream, not from execution order.
fn run_slots<T, F>(parallel: bool, slots: usize, task: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    if parallel {
        (0..slots).into_par_iter().map(|slot| task(slot)).collect()
    } else {
        (0..slots).map(|slot| task(slot)).collect()
    }
}

/// Index of the lowest-fitness individual; the earliest index wins ties.
fn best_index<I: Individual>(population: &[I]) -> usize {
    let mut best = 0;
    for i in 1..population.len() {
        if population[i].fitness() < population[best].fitness() {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
