//! Post-run audit of a finished roster.
//!
//! Re-checks a schedule against the problem and lists every concrete issue
//! the penalty function charges for, as typed findings a front-end can
//! render directly. Pure and side-effect free; an empty result means the
//! roster is clean.

use super::chromosome::ShiftChromosome;
use super::fitness::{MAX_WORK_RUN, MIN_COVERAGE};
use super::model::{RosterProblem, Shift};

/// Category of one audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViolationKind {
    /// A stated preference was overridden.
    PreferenceIgnored,
    /// A day is below the coverage floor for morning or night.
    Understaffed,
    /// A run of work days longer than allowed.
    Overwork,
    /// Morning duty too soon after a night shift.
    ShortRest,
}

/// One audit finding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// Finding category.
    pub kind: ViolationKind,
    /// Human-readable description, staff and days zero-indexed.
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Audits `plan` against `problem`.
///
/// Per-staff findings come first (ordered by staff, then day), followed by
/// per-day coverage findings.
pub fn audit(problem: &RosterProblem, plan: &ShiftChromosome) -> Vec<Violation> {
    let days = problem.days();
    let mut findings = Vec::new();

    for staff in 0..problem.staff_count() {
        let row = plan.row(staff);

        for day in 0..days {
            if let Some(pref) = problem.preference(staff, day) {
                if !pref.allows(row[day]) {
                    findings.push(Violation::new(
                        ViolationKind::PreferenceIgnored,
                        format!("staff {staff} is scheduled against their request on day {day}"),
                    ));
                }
            }
        }

        let mut run = 0usize;
        for day in 0..=days {
            if day < days && row[day].is_work() {
                run += 1;
                continue;
            }
            if run > MAX_WORK_RUN {
                findings.push(Violation::new(
                    ViolationKind::Overwork,
                    format!(
                        "staff {staff} works {run} days in a row ending on day {}",
                        day - 1
                    ),
                ));
            }
            run = 0;
        }

        for day in 0..days {
            if row[day] != Shift::Night {
                continue;
            }
            if day + 1 < days && row[day + 1] == Shift::Morning {
                findings.push(Violation::new(
                    ViolationKind::ShortRest,
                    format!(
                        "staff {staff} has a morning shift the day after a night shift (day {})",
                        day + 1
                    ),
                ));
            }
            if day + 2 < days && row[day + 2] == Shift::Morning {
                findings.push(Violation::new(
                    ViolationKind::ShortRest,
                    format!(
                        "staff {staff} has a morning shift two days after a night shift (day {})",
                        day + 2
                    ),
                ));
            }
        }
    }

    for day in 0..days {
        let mut morning = 0usize;
        let mut night = 0usize;
        for staff in 0..problem.staff_count() {
            match plan.get(staff, day) {
                Shift::Morning => morning += 1,
                Shift::Night => night += 1,
                Shift::Rest => {}
            }
        }
        if morning < MIN_COVERAGE {
            findings.push(Violation::new(
                ViolationKind::Understaffed,
                format!("day {day} has {morning} on the morning shift (needs {MIN_COVERAGE})"),
            ));
        }
        if night < MIN_COVERAGE {
            findings.push(Violation::new(
                ViolationKind::Understaffed,
                format!("day {day} has {night} on the night shift (needs {MIN_COVERAGE})"),
            ));
        }
    }

    findings
}
