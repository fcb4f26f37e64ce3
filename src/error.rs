//! Boundary errors.
//!
//! Every error is raised while the problem description is being checked,
//! before the first generation runs. Once the evolutionary loop starts the
//! core cannot fail.

use thiserror::Error;

use crate::ga::GaConfigError;

/// Rejection of an invalid rostering request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("staff count must be at least 1")]
    ZeroStaff,

    #[error("horizon must span at least one day")]
    ZeroDays,

    #[error("expected {expected} role tags, got {actual}")]
    RoleCountMismatch { expected: usize, actual: usize },

    #[error(
        "preference for staff {staff} on day {day} is outside the {staff_count}x{days} roster"
    )]
    PreferenceOutOfRange {
        staff: usize,
        day: usize,
        staff_count: usize,
        days: usize,
    },

    #[error("unknown preference tag: {0:?}")]
    UnknownPreference(String),

    #[error(transparent)]
    Config(#[from] GaConfigError),
}
