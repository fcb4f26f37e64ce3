//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic engine and the rostering domain (or any
//! other problem plugged into it).

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimisation).
///
/// The primary implementation is `i64`, for integer penalty scores;
/// `f64` is provided for problems with continuous objectives.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for freshly created, not-yet-evaluated individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for history recording and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for i64 {
    fn worst() -> Self {
        i64::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The engine calls
/// [`GaProblem::evaluate`] to compute fitness, then stores it via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimisation problem.
///
/// Implementors supply the four domain-specific operations:
///
/// 1. **Initialisation**: how to create random individuals
/// 2. **Evaluation**: how to compute a penalty
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb an individual in place
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync`: the runner creates and evaluates
/// individuals on the rayon pool, sharing the problem read-only.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    ///
    /// Called once per slot when the initial population is built. The
    /// result should be valid, not necessarily good.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be pure: no I/O, no shared mutable state. The engine calls it
    /// concurrently for distinct individuals. Lower values are better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child by recombining two parents.
    ///
    /// Parents are never altered. The default implementation clones the
    /// first parent (no recombination).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the current best fitness.
    ///
    /// The hook for progress reporting. The default implementation is a
    /// no-op; implementors decide the cadence. Failures must be swallowed,
    /// not raised.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
