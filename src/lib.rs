//! Constraint-optimising shift roster generator.
//!
//! Builds monthly work schedules for a small-to-medium workforce under hard
//! and soft constraints: per-cell day-off and shift-type requests, daily
//! headcount floors per shift kind, consecutive-work limits, and recovery
//! time after night shifts. The search is a genetic algorithm over
//! `staff × days` matrices of `{rest, morning, night}` assignments.
//!
//! # Architecture
//!
//! - [`ga`]: generic minimising GA engine — traits, selection, seeded
//!   parallel harness. Contains no rostering concepts.
//! - [`roster`]: the rostering domain — problem description, matrix
//!   chromosome, penalty evaluator, and the [`ga::GaProblem`] bridge.
//!
//! Spreadsheets, calendars, staff names, and rendering are the caller's
//! concern; this crate neither reads nor writes files.
//!
//! # Usage
//!
//! The whole pipeline behind one call:
//!
//! ```
//! use std::collections::HashMap;
//! use shift_scheduler::run_genetic_algorithm;
//!
//! let roles: Vec<String> = ["Chief", "Leader", "Staff", "Staff", "Assist", "Assist"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut constraints = HashMap::new();
//! constraints.insert((0, 0), "NG".to_string());
//!
//! let (schedule, score) = run_genetic_algorithm(&roles, &constraints, 3, 6, 20, 5)?;
//! assert_eq!(schedule.len(), 6);
//! assert_eq!(schedule[0].len(), 3);
//! assert_eq!(schedule[0][0], 0); // the requested day off is honoured
//! assert!(score <= 0);
//! # Ok::<(), shift_scheduler::RosterError>(())
//! ```
//!
//! For seeding, custom selection, or a custom progress sink, compose the
//! typed API instead: build a [`roster::RosterProblem`], wrap it in a
//! [`roster::RosterGaProblem`], and hand it to [`ga::GaRunner`] with a
//! [`ga::GaConfig`].

pub mod error;
pub mod ga;
pub mod roster;

use std::collections::HashMap;

pub use error::RosterError;

use ga::{GaConfig, GaRunner};
use roster::{Preference, Role, RosterGaProblem, RosterProblem};

/// Generates a roster for `staff` people over `days` days.
///
/// `roles` carries one tag per staff member (unknown tags are accepted);
/// `constraints` maps `(staff_index, day_index)` to one of the preference
/// tags `"NG"`, `"NO_NIGHT"`, `"NO_MORNING"` — anything else is rejected.
///
/// Returns the best schedule found as a matrix of wire codes
/// (`0` rest, `1` morning, `2` night) together with its score. The score
/// is the negated penalty: higher is better and `0` is the ideal.
///
/// Progress is reported on stderr every `max(1, generations / 10)`
/// generations. All input validation happens before the first generation;
/// once the loop starts the call cannot fail.
pub fn run_genetic_algorithm(
    roles: &[String],
    constraints: &HashMap<(usize, usize), String>,
    days: usize,
    staff: usize,
    population: usize,
    generations: usize,
) -> Result<(Vec<Vec<u8>>, i64), RosterError> {
    if roles.len() != staff {
        return Err(RosterError::RoleCountMismatch {
            expected: staff,
            actual: roles.len(),
        });
    }

    let roles: Vec<Role> = roles.iter().map(|tag| Role::from_tag(tag)).collect();

    let mut preferences = HashMap::with_capacity(constraints.len());
    for (&cell, tag) in constraints {
        preferences.insert(cell, Preference::from_tag(tag)?);
    }

    let problem = RosterProblem::new(roles, preferences, days)?;

    let config = GaConfig::default()
        .with_population_size(population)
        .with_max_generations(generations);
    config.validate()?;

    let ga = RosterGaProblem::new(problem).with_progress_every((generations / 10).max(1));
    let result = GaRunner::run(&ga, &config);

    Ok((result.best.to_matrix(), -result.best_fitness))
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GaResult;
    use crate::roster::{audit, ShiftChromosome, ViolationKind};
    use proptest::prelude::*;

    /// Staffing used by the feasibility scenarios: two chiefs, two leaders,
    /// three staff, three assistants.
    fn ward_roles() -> Vec<Role> {
        let mut roles = vec![Role::Chief; 2];
        roles.extend(vec![Role::Leader; 2]);
        roles.extend(vec![Role::Staff; 3]);
        roles.extend(vec![Role::Assist; 3]);
        roles
    }

    fn ward_tags() -> Vec<String> {
        ward_roles().iter().map(|r| r.tag().to_string()).collect()
    }

    fn solve(
        roles: Vec<Role>,
        preferences: HashMap<(usize, usize), Preference>,
        days: usize,
        population: usize,
        generations: usize,
        seed: u64,
    ) -> GaResult<ShiftChromosome> {
        let problem = RosterProblem::new(roles, preferences, days).unwrap();
        let config = GaConfig::default()
            .with_population_size(population)
            .with_max_generations(generations)
            .with_seed(seed);
        GaRunner::run(&RosterGaProblem::new(problem), &config)
    }

    fn shift_counts(matrix: &[Vec<u8>], day: usize) -> (usize, usize) {
        let morning = matrix.iter().filter(|row| row[day] == 1).count();
        let night = matrix.iter().filter(|row| row[day] == 2).count();
        (morning, night)
    }

    fn longest_work_run(row: &[u8]) -> usize {
        let mut longest = 0;
        let mut run = 0;
        for &cell in row {
            if cell != 0 {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        longest
    }

    // ---- Boundary validation ----

    #[test]
    fn rejects_unknown_preference_tag() {
        let mut constraints = HashMap::new();
        constraints.insert((0, 0), "MAYBE".to_string());

        let err =
            run_genetic_algorithm(&ward_tags(), &constraints, 3, 10, 20, 5).unwrap_err();
        assert_eq!(err, RosterError::UnknownPreference("MAYBE".into()));
    }

    #[test]
    fn rejects_out_of_range_preference() {
        let mut constraints = HashMap::new();
        constraints.insert((10, 0), "NG".to_string());

        let err =
            run_genetic_algorithm(&ward_tags(), &constraints, 3, 10, 20, 5).unwrap_err();
        assert!(matches!(err, RosterError::PreferenceOutOfRange { staff: 10, .. }));
    }

    #[test]
    fn rejects_role_count_mismatch() {
        let err =
            run_genetic_algorithm(&ward_tags(), &HashMap::new(), 3, 9, 20, 5).unwrap_err();
        assert_eq!(
            err,
            RosterError::RoleCountMismatch {
                expected: 9,
                actual: 10,
            }
        );
    }

    #[test]
    fn rejects_empty_dimensions() {
        let no_roles: Vec<String> = vec![];
        assert_eq!(
            run_genetic_algorithm(&no_roles, &HashMap::new(), 3, 0, 20, 5).unwrap_err(),
            RosterError::ZeroStaff
        );
        assert_eq!(
            run_genetic_algorithm(&ward_tags(), &HashMap::new(), 0, 10, 20, 5).unwrap_err(),
            RosterError::ZeroDays
        );
    }

    #[test]
    fn rejects_degenerate_hyperparameters() {
        assert!(matches!(
            run_genetic_algorithm(&ward_tags(), &HashMap::new(), 3, 10, 1, 5).unwrap_err(),
            RosterError::Config(_)
        ));
        assert!(matches!(
            run_genetic_algorithm(&ward_tags(), &HashMap::new(), 3, 10, 20, 0).unwrap_err(),
            RosterError::Config(_)
        ));
    }

    #[test]
    fn accepts_unknown_role_tags() {
        let roles: Vec<String> = (0..6).map(|i| format!("Contractor{i}")).collect();
        let (schedule, _score) =
            run_genetic_algorithm(&roles, &HashMap::new(), 4, 6, 10, 3).unwrap();
        assert_eq!(schedule.len(), 6);
    }

    // ---- End-to-end scenarios ----

    #[test]
    fn trivial_feasibility_covers_every_day() {
        // Ten staff over three days: both shift floors are satisfiable with
        // everyone working, so the GA should find full coverage and leave
        // at most the workload tie-breaker on the score.
        let result = solve(ward_roles(), HashMap::new(), 3, 200, 50, 42);
        let matrix = result.best.to_matrix();

        for day in 0..3 {
            let (morning, night) = shift_counts(&matrix, day);
            assert!(morning >= 5, "day {day}: {morning} mornings");
            assert!(night >= 5, "day {day}: {night} nights");
        }
        assert!(
            result.best_fitness <= 10,
            "expected at most the imbalance tie-breaker, got penalty {}",
            result.best_fitness
        );
    }

    #[test]
    fn hard_day_off_is_honoured() {
        let mut constraints = HashMap::new();
        constraints.insert((0, 0), "NG".to_string());

        let (schedule, _score) =
            run_genetic_algorithm(&ward_tags(), &constraints, 3, 200, 50, 10).unwrap();
        assert_eq!(schedule[0][0], 0);
    }

    #[test]
    fn shift_type_requests_are_honoured() {
        let mut constraints = HashMap::new();
        constraints.insert((1, 1), "NO_NIGHT".to_string());
        constraints.insert((2, 2), "NO_MORNING".to_string());

        let (schedule, _score) =
            run_genetic_algorithm(&ward_tags(), &constraints, 3, 200, 50, 10).unwrap();
        assert!(schedule[1][1] == 0 || schedule[1][1] == 1);
        assert!(schedule[2][2] == 0 || schedule[2][2] == 2);
    }

    #[test]
    fn infeasible_coverage_still_returns_best_effort() {
        // Four staff can never reach the floors; the run must still finish
        // with the unavoidable shortfall priced in and the best penalty
        // never getting worse across generations.
        let roles = vec![Role::Chief, Role::Leader, Role::Staff, Role::Assist];
        let result = solve(roles, HashMap::new(), 7, 100, 100, 42);

        assert!(result.best_fitness > 0);
        for window in result.fitness_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn consecutive_work_pressure_caps_runs() {
        let result = solve(vec![Role::Staff; 14], HashMap::new(), 14, 500, 500, 42);
        let matrix = result.best.to_matrix();

        for (staff, row) in matrix.iter().enumerate() {
            let run = longest_work_run(row);
            assert!(run < 8, "staff {staff} works {run} days in a row");
        }
    }

    #[test]
    fn no_morning_directly_after_night() {
        let result = solve(vec![Role::Staff; 20], HashMap::new(), 10, 500, 500, 42);
        let matrix = result.best.to_matrix();

        for (staff, row) in matrix.iter().enumerate() {
            for day in 0..row.len() - 1 {
                assert!(
                    !(row[day] == 2 && row[day + 1] == 1),
                    "staff {staff} goes night into morning on day {day}"
                );
            }
        }
    }

    // ---- Cross-cutting properties ----

    #[test]
    fn deterministic_given_seed() {
        let a = solve(ward_roles(), HashMap::new(), 5, 60, 30, 7);
        let b = solve(ward_roles(), HashMap::new(), 5, 60, 30, 7);

        assert_eq!(a.best.to_matrix(), b.best.to_matrix());
        assert_eq!(a.best_fitness, b.best_fitness);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn preferences_never_violated_when_satisfiable() {
        // Initialisation and mutation draw under the preference guard and
        // crossover moves whole rows, so stated requests survive the whole
        // run whenever a satisfying schedule exists at all.
        let mut preferences = HashMap::new();
        preferences.insert((0, 0), Preference::DayOff);
        preferences.insert((3, 2), Preference::DayOff);
        preferences.insert((5, 1), Preference::NoNight);
        preferences.insert((8, 4), Preference::NoMorning);

        let problem = RosterProblem::new(vec![Role::Staff; 12], preferences, 5).unwrap();
        let config = GaConfig::default()
            .with_population_size(150)
            .with_max_generations(60)
            .with_seed(42);
        let result = GaRunner::run(&RosterGaProblem::new(problem.clone()), &config);

        let ignored = audit(&problem, &result.best)
            .into_iter()
            .filter(|v| v.kind == ViolationKind::PreferenceIgnored)
            .count();
        assert_eq!(ignored, 0);
    }

    #[test]
    fn coverage_pressure_fills_every_day() {
        let result = solve(vec![Role::Staff; 12], HashMap::new(), 6, 300, 150, 42);
        let matrix = result.best.to_matrix();

        for day in 0..6 {
            let (morning, night) = shift_counts(&matrix, day);
            assert!(
                morning >= 5 && night >= 5,
                "day {day} under-covered: {morning} mornings, {night} nights"
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(12))]

        #[test]
        fn returned_matrix_always_matches_dimensions(
            staff in 1usize..7,
            days in 1usize..7,
            population in 2usize..8,
            generations in 1usize..4,
        ) {
            let roles = vec!["Staff".to_string(); staff];
            let (matrix, _score) = run_genetic_algorithm(
                &roles,
                &HashMap::new(),
                days,
                staff,
                population,
                generations,
            )
            .unwrap();

            prop_assert_eq!(matrix.len(), staff);
            for row in &matrix {
                prop_assert_eq!(row.len(), days);
                for &cell in row {
                    prop_assert!(cell <= 2);
                }
            }
        }
    }
}
