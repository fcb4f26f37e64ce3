//! Genetic Algorithm engine.
//!
//! A generic, minimising GA built on trait-based abstractions. The domain
//! plugs in by implementing [`GaProblem`], which specifies how to create,
//! evaluate, recombine, and mutate individuals; [`GaRunner`] owns the
//! evolutionary loop and the parallel harness.
//!
//! # Core Traits
//!
//! - [`Individual`]: a candidate solution carrying its fitness
//! - [`GaProblem`]: problem definition — initialisation, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: loop parameters (population size, generations, selection,
//!   parallelism, seed)
//! - [`GaRunner`]: executes the loop with single-individual elitism
//! - [`GaResult`]: best individual plus the per-generation fitness history
//!
//! # Determinism
//!
//! Every child slot of every generation draws from its own RNG stream
//! derived in [`rng`] from the master seed, so a seeded run reproduces
//! exactly regardless of worker count.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
pub mod rng;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, GaConfigError};
pub use rng::{create_rng, stream_rng, GaRng};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
