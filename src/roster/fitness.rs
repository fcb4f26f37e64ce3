//! Penalty evaluation.
//!
//! The score of a roster is the weighted sum of five violation classes.
//! The weight ordering *is* the constraint hierarchy: stated day-off and
//! shift-type requests dominate coverage, coverage dominates the rest
//! rules, and workload balance is a pure tie-breaker. Tuning a weight is a
//! one-line edit here; nothing else encodes the hierarchy.
//!
//! Role-specific coverage minima would slot into the coverage term, keyed
//! by [`super::model::Role`]; the default rule is one global floor per
//! shift kind.

use super::chromosome::ShiftChromosome;
use super::model::{RosterProblem, Shift};

/// Penalty per cell that contradicts a stated preference.
pub const PREFERENCE_WEIGHT: i64 = 100;

/// Penalty per missing head below [`MIN_COVERAGE`], per shift kind, per day.
pub const COVERAGE_WEIGHT: i64 = 50;

/// Penalty per worked day beyond [`MAX_WORK_RUN`] in one unbroken run.
pub const OVERWORK_WEIGHT: i64 = 20;

/// Penalty per morning scheduled one or two days after a night shift.
pub const NIGHT_REST_WEIGHT: i64 = 30;

/// Penalty per unit of absolute deviation from the mean workload.
pub const BALANCE_WEIGHT: i64 = 1;

/// Minimum staff on duty per shift kind (morning and night), every day.
pub const MIN_COVERAGE: usize = 5;

/// Longest run of consecutive work days that goes unpenalised.
pub const MAX_WORK_RUN: usize = 6;

/// Total penalty of `plan` under `problem`.
///
/// Lower is better; `0` is the (usually unreachable) ideal. Pure: no I/O,
/// no shared mutable state, deterministic — distinct plans can be scored
/// concurrently.
pub fn penalty(problem: &RosterProblem, plan: &ShiftChromosome) -> i64 {
    preference_penalty(problem, plan)
        + coverage_penalty(problem, plan)
        + overwork_penalty(plan)
        + night_rest_penalty(plan)
        + balance_penalty(plan)
}

/// Each cell assigned against a stated preference.
fn preference_penalty(problem: &RosterProblem, plan: &ShiftChromosome) -> i64 {
    let mut violations = 0i64;
    for ((staff, day), pref) in problem.preferences() {
        if !pref.allows(plan.get(staff, day)) {
            violations += 1;
        }
    }
    PREFERENCE_WEIGHT * violations
}

/// Heads missing below the floor, per day and shift kind.
fn coverage_penalty(problem: &RosterProblem, plan: &ShiftChromosome) -> i64 {
    let mut shortfall = 0usize;
    for day in 0..problem.days() {
        let mut morning = 0usize;
        let mut night = 0usize;
        for staff in 0..problem.staff_count() {
            match plan.get(staff, day) {
                Shift::Morning => morning += 1,
                Shift::Night => night += 1,
                Shift::Rest => {}
            }
        }
        shortfall += MIN_COVERAGE.saturating_sub(morning) + MIN_COVERAGE.saturating_sub(night);
    }
    COVERAGE_WEIGHT * shortfall as i64
}

/// Days worked beyond [`MAX_WORK_RUN`] in each maximal run of work days.
fn overwork_penalty(plan: &ShiftChromosome) -> i64 {
    let mut excess = 0usize;
    for staff in 0..plan.staff_count() {
        let mut run = 0usize;
        for &shift in plan.row(staff) {
            if shift.is_work() {
                run += 1;
            } else {
                excess += run.saturating_sub(MAX_WORK_RUN);
                run = 0;
            }
        }
        excess += run.saturating_sub(MAX_WORK_RUN);
    }
    OVERWORK_WEIGHT * excess as i64
}

/// Mornings on the first or second day after a night shift. The two days
/// are checked independently; near the end of the horizon there are simply
/// fewer checks.
fn night_rest_penalty(plan: &ShiftChromosome) -> i64 {
    let days = plan.days();
    let mut violations = 0i64;
    for staff in 0..plan.staff_count() {
        let row = plan.row(staff);
        for day in 0..days {
            if row[day] != Shift::Night {
                continue;
            }
            if day + 1 < days && row[day + 1] == Shift::Morning {
                violations += 1;
            }
            if day + 2 < days && row[day + 2] == Shift::Morning {
                violations += 1;
            }
        }
    }
    NIGHT_REST_WEIGHT * violations
}

/// Σᵢ |workᵢ − mean work|, accumulated in staff-count units so the
/// arithmetic stays integral: Σᵢ |S·workᵢ − Σwork| / S.
fn balance_penalty(plan: &ShiftChromosome) -> i64 {
    let staff = plan.staff_count() as i64;
    let work: Vec<i64> = (0..plan.staff_count())
        .map(|i| plan.row(i).iter().filter(|s| s.is_work()).count() as i64)
        .collect();
    let total: i64 = work.iter().sum();
    let deviation: i64 = work.iter().map(|&w| (w * staff - total).abs()).sum();
    BALANCE_WEIGHT * deviation / staff
}
