//! Criterion benchmarks for the scheduler and the assignment optimizer.
//!
//! Instances are synthetic grids of beds and staff rosters so the numbers
//! measure search overhead only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_allocate::cp::BacktrackingScheduler;
use u_allocate::ga::{optimize_assignment, GaConfig, OptimizerConfig};
use u_allocate::model::{Coord, Demand, Resource, ResourcePool};

// ===========================================================================
// Instances
// ===========================================================================

fn bed_grid(n: usize) -> ResourcePool {
    ResourcePool::new(
        (0..n)
            .map(|i| {
                let bed = Resource::new(format!("b{i}")).at(Coord::new((i % 10) as i64, (i / 10) as i64));
                if i % 4 == 0 {
                    bed.with_capability("critical-care")
                } else {
                    bed
                }
            })
            .collect(),
    )
}

fn patients(n: usize) -> Vec<Demand> {
    (0..n)
        .map(|i| {
            let p = Demand::new(format!("p{i}")).at(Coord::new((i * 7 % 10) as i64, (i * 3 % 10) as i64));
            if i % 5 == 0 {
                p.requires("critical-care")
            } else {
                p
            }
        })
        .collect()
}

fn roster(surgeons: usize) -> ResourcePool {
    let mut staff: Vec<Resource> = (0..surgeons)
        .map(|i| Resource::new(format!("dr{i}")).with_capability("surgeon").with_capacity(8))
        .collect();
    staff.extend(
        (0..surgeons).map(|i| Resource::new(format!("an{i}")).with_capability("anesthetist").with_capacity(8)),
    );
    ResourcePool::new(staff)
}

fn surgeries(n: usize) -> Vec<Demand> {
    (0..n)
        .map(|i| {
            Demand::new(format!("op{i}"))
                .requires("surgeon")
                .requires("anesthetist")
                .with_duration(1 + (i % 3) as u32)
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_optimizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_bed_assignment");
    group.sample_size(10);

    for (demands, beds, pop, gen) in [(20usize, 30usize, 50usize, 50usize), (100, 120, 100, 50), (300, 300, 100, 30)] {
        let demands = patients(demands);
        let pool = bed_grid(beds);
        let config = OptimizerConfig {
            ga: GaConfig::default()
                .with_population_size(pop)
                .with_max_generations(gen)
                .with_seed(42),
            ..OptimizerConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_g{}", demands.len(), pop, gen), beds),
            &(demands, pool, config),
            |b, (d, p, c)| {
                b.iter(|| {
                    let result = optimize_assignment(black_box(d), black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_scheduler(c: &mut Criterion) {
    let mut group = c.benchmark_group("cp_surgery_day");
    group.sample_size(10);

    for &(ops, surgeons) in &[(6usize, 2usize), (12, 3), (20, 4)] {
        let demands = surgeries(ops);
        let pool = roster(surgeons);
        let slots: Vec<String> = (0..10).map(|h| format!("t{h}")).collect();
        let scheduler = BacktrackingScheduler::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("ops{ops}_staff{surgeons}")),
            &(demands, pool, slots),
            |b, (d, p, s)| {
                b.iter(|| {
                    let result = scheduler.schedule(black_box(p), black_box(d), black_box(s));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_optimizer, bench_scheduler);
criterion_main!(benches);
