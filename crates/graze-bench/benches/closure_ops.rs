//! Criterion micro-benchmarks for the region-closure engine.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use graze_bench::{ring_lattice, walk_profile};
use graze_core::AgentId;
use graze_engine::ClosureEngine;

/// Survey-step every node of a 10K-node ring lattice. Survey never
/// mutates, so one graph serves the whole run; the ceiling caps each
/// probe at 32 cells.
fn bench_survey_step_10k(c: &mut Criterion) {
    let mut graph = ring_lattice(10_000, 2_000, 42);
    let mut engine = ClosureEngine::new(AgentId(0));

    c.bench_function("survey_step_ring_lattice_10k", |b| {
        b.iter(|| {
            for i in 0..10_000u32 {
                let outcome = engine.survey_step(&mut graph, graze_core::NodeId(i), 32);
                black_box(&outcome);
            }
        });
    });
}

/// Committing walk over a fresh 1K-node lattice per iteration.
fn bench_committing_walk_1k(c: &mut Criterion) {
    let walk = walk_profile(1_000, 256, 7);

    c.bench_function("committing_walk_ring_lattice_1k", |b| {
        b.iter_batched(
            || (ring_lattice(1_000, 200, 42), ClosureEngine::new(AgentId(0))),
            |(mut graph, mut engine)| {
                for &node in &walk {
                    let outcome = engine.step(&mut graph, node, 32);
                    black_box(&outcome);
                }
                graph
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_survey_step_10k, bench_committing_walk_1k);
criterion_main!(benches);
