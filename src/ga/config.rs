//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that control the evolutionary loop.

use thiserror::Error;

use super::selection::Selection;

/// Configuration for one GA run.
///
/// # Defaults
///
/// ```
/// use shift_scheduler::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert!(config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use shift_scheduler::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(1000)
///     .with_selection(Selection::Tournament(3))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals alive per generation.
    ///
    /// One slot is the elite carried over unchanged; the remaining
    /// `population_size − 1` slots are refilled with children each
    /// generation. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. There is no early termination.
    pub max_generations: usize,

    /// Strategy for picking parents.
    pub selection: Selection,

    /// Whether to spread child production and evaluation over the rayon
    /// pool. Results are identical either way; this is purely a speed
    /// toggle.
    pub parallel: bool,

    /// Master seed for reproducibility. `None` draws a fresh seed, making
    /// the run deterministic only with respect to itself.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            selection: Selection::default(),
            parallel: true,
            seed: None,
        }
    }
}

/// Rejection of an unusable [`GaConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GaConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("at least one generation is required")]
    NoGenerations,
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Enables or disables the parallel harness.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaConfigError> {
        if self.population_size < 2 {
            return Err(GaConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(GaConfigError::NoGenerations);
        }
        Ok(())
    }
}
