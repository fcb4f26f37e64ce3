//! Dense matrix chromosome and its variation operators.
//!
//! # Encoding
//!
//! A row-major `staff × days` matrix of [`Shift`] codes. A staff member's
//! row is the unit of recombination: splitting inside a row would shatter
//! rest patterns that took generations to assemble, so crossover exchanges
//! whole rows and only mutation edits single cells.
//!
//! Initialisation and mutation both draw cells *conditioned on the cell's
//! preference*. Together with row-level crossover this means no operator
//! can ever introduce a preference violation.

use rand::Rng;

use super::model::{Preference, RosterProblem, Shift};
use crate::ga::Individual;

/// One candidate roster: a `staff × days` assignment matrix.
///
/// Lower penalty = better (minimisation convention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftChromosome {
    /// Row-major cells, `staff * days` long.
    genes: Vec<Shift>,
    days: usize,
    penalty: i64,
}

impl Individual for ShiftChromosome {
    type Fitness = i64;

    fn fitness(&self) -> i64 {
        self.penalty
    }

    fn set_fitness(&mut self, fitness: i64) {
        self.penalty = fitness;
    }
}

impl ShiftChromosome {
    /// Draws a random roster, each cell conditioned on its preference so
    /// generation 0 already starts near the feasible region.
    pub fn random<R: Rng>(problem: &RosterProblem, rng: &mut R) -> Self {
        let staff = problem.staff_count();
        let days = problem.days();
        let mut genes = Vec::with_capacity(staff * days);
        for i in 0..staff {
            for d in 0..days {
                genes.push(random_shift(problem.preference(i, d), rng));
            }
        }
        Self {
            genes,
            days,
            penalty: i64::MAX,
        }
    }

    /// Builds a chromosome from explicit rows.
    ///
    /// # Panics
    /// Panics if `rows` is empty or ragged.
    pub fn from_rows(rows: Vec<Vec<Shift>>) -> Self {
        let days = rows.first().map_or(0, Vec::len);
        assert!(days > 0, "rows must cover at least one day");
        let mut genes = Vec::with_capacity(rows.len() * days);
        for row in &rows {
            assert_eq!(row.len(), days, "all rows must cover the same horizon");
            genes.extend_from_slice(row);
        }
        Self {
            genes,
            days,
            penalty: i64::MAX,
        }
    }

    pub fn get(&self, staff: usize, day: usize) -> Shift {
        self.genes[staff * self.days + day]
    }

    pub fn staff_count(&self) -> usize {
        self.genes.len() / self.days
    }

    pub fn days(&self) -> usize {
        self.days
    }

    /// One staff member's assignments over the whole horizon.
    pub fn row(&self, staff: usize) -> &[Shift] {
        &self.genes[staff * self.days..(staff + 1) * self.days]
    }

    /// Wire-format matrix (`0` rest, `1` morning, `2` night).
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.staff_count())
            .map(|i| self.row(i).iter().map(|s| s.code()).collect())
            .collect()
    }
}

/// Uniform row-wise crossover: the child takes each staff row from either
/// parent with equal probability. Parents are left untouched.
pub fn row_crossover<R: Rng>(
    p1: &ShiftChromosome,
    p2: &ShiftChromosome,
    rng: &mut R,
) -> ShiftChromosome {
    debug_assert_eq!(p1.genes.len(), p2.genes.len());
    debug_assert_eq!(p1.days, p2.days);

    let mut genes = Vec::with_capacity(p1.genes.len());
    for i in 0..p1.staff_count() {
        let donor = if rng.random_bool(0.5) { p1 } else { p2 };
        genes.extend_from_slice(donor.row(i));
    }
    ShiftChromosome {
        genes,
        days: p1.days,
        penalty: i64::MAX,
    }
}

/// Per-cell mutation: each cell is redrawn with probability `rate`, under
/// the same preference guard as initialisation.
pub fn cell_mutation<R: Rng>(
    chromosome: &mut ShiftChromosome,
    problem: &RosterProblem,
    rate: f64,
    rng: &mut R,
) {
    let days = chromosome.days;
    for idx in 0..chromosome.genes.len() {
        if rng.random_bool(rate) {
            let pref = problem.preference(idx / days, idx % days);
            chromosome.genes[idx] = random_shift(pref, rng);
        }
    }
}

/// Uniform draw over the shifts the preference admits.
fn random_shift<R: Rng>(preference: Option<Preference>, rng: &mut R) -> Shift {
    match preference {
        Some(Preference::DayOff) => Shift::Rest,
        Some(Preference::NoNight) => pick(&[Shift::Rest, Shift::Morning], rng),
        Some(Preference::NoMorning) => pick(&[Shift::Rest, Shift::Night], rng),
        None => pick(&[Shift::Rest, Shift::Morning, Shift::Night], rng),
    }
}

fn pick<R: Rng>(pool: &[Shift], rng: &mut R) -> Shift {
    pool[rng.random_range(0..pool.len())]
}
