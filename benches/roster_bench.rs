//! Criterion benchmarks for the rostering GA.
//!
//! A synthetic 30-staff month approximates the production workload. The
//! evaluator is measured on its own because population × generations
//! multiplies its cost — it dominates a full run long before populations
//! reach the tens of thousands.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shift_scheduler::ga::{create_rng, GaConfig, GaRunner};
use shift_scheduler::roster::{
    penalty, Preference, Role, RosterGaProblem, RosterProblem, ShiftChromosome,
};

/// A ward-sized instance with a sprinkling of requests.
fn month_problem(staff: usize, days: usize) -> RosterProblem {
    let roles = (0..staff)
        .map(|i| match i % 4 {
            0 => Role::Chief,
            1 => Role::Leader,
            2 => Role::Staff,
            _ => Role::Assist,
        })
        .collect();

    let mut preferences = HashMap::new();
    for i in 0..staff {
        let pref = match i % 3 {
            0 => Preference::DayOff,
            1 => Preference::NoNight,
            _ => Preference::NoMorning,
        };
        preferences.insert((i, (i * 7) % days), pref);
    }

    RosterProblem::new(roles, preferences, days).expect("valid instance")
}

fn bench_penalty(c: &mut Criterion) {
    let mut group = c.benchmark_group("penalty");

    for (staff, days) in [(10usize, 7usize), (30, 30), (60, 30)] {
        let problem = month_problem(staff, days);
        let mut rng = create_rng(42);
        let plan = ShiftChromosome::random(&problem, &mut rng);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("s{staff}_d{days}")),
            &(problem, plan),
            |b, (problem, plan)| b.iter(|| penalty(black_box(problem), black_box(plan))),
        );
    }
    group.finish();
}

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_roster");
    group.sample_size(10);

    for (pop, gens) in [(100usize, 20usize), (500, 10)] {
        let problem = RosterGaProblem::new(month_problem(30, 30));
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gens)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("p{pop}_g{gens}")),
            &(problem, config),
            |b, (problem, config)| {
                b.iter(|| black_box(GaRunner::run(black_box(problem), black_box(config))))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_penalty, bench_ga_run);
criterion_main!(benches);
