//! Shift rostering domain.
//!
//! Defines the problem description ([`RosterProblem`]), the matrix
//! chromosome and its variation operators, the penalty evaluator with its
//! named weights, the bridge implementing
//! [`GaProblem`](crate::ga::GaProblem), and a post-run violation audit.
//!
//! The domain knows nothing about calendars, weekdays, staff names, or
//! file formats — callers feed it role tags and per-cell preferences and
//! render the returned matrix themselves.

mod chromosome;
mod fitness;
mod model;
mod problem;
mod report;

pub use chromosome::{cell_mutation, row_crossover, ShiftChromosome};
pub use fitness::{
    penalty, BALANCE_WEIGHT, COVERAGE_WEIGHT, MAX_WORK_RUN, MIN_COVERAGE, NIGHT_REST_WEIGHT,
    OVERWORK_WEIGHT, PREFERENCE_WEIGHT,
};
pub use model::{Preference, Role, RosterProblem, Shift};
pub use problem::{RosterGaProblem, CELL_MUTATION_RATE};
pub use report::{audit, Violation, ViolationKind};
