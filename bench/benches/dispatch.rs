//! Dispatch and scheduler benchmarks using Criterion.
//!
//! - Single dispatch passes over worlds of increasing size
//! - Full scheduler runs with a zero tick interval and no commands

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use roomsim_bench::{WorldConfig, generate_world};
use roomsim_engine::core::Tick;
use roomsim_engine::sim::command::GatedSource;
use roomsim_engine::sim::{Scheduler, SchedulerConfig, dispatch};

// =============================================================================
// Dispatch Benchmarks
// =============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for per_room in [10, 100, 1_000] {
        let config = WorldConfig {
            entities_per_room: per_room,
            ..Default::default()
        };
        group.throughput(Throughput::Elements(config.entity_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("single_pass", config.entity_count()),
            &config,
            |b, config| {
                let mut world = generate_world(config);
                let mut tick = Tick::ZERO;
                b.iter(|| {
                    black_box(dispatch(&mut world, tick));
                    tick = tick.next();
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Scheduler Benchmarks
// =============================================================================

fn bench_scheduler(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");
    let ticks = 100;
    group.throughput(Throughput::Elements(ticks));

    group.bench_function(BenchmarkId::new("run", ticks), |b| {
        let world_config = WorldConfig::default();
        b.iter(|| {
            let mut world = generate_world(&world_config);
            let (_sender, source) = GatedSource::new();
            let config = SchedulerConfig::default()
                .with_max_ticks(ticks)
                .with_tick_interval(Duration::ZERO);
            let mut scheduler = match Scheduler::new(config, source) {
                Ok(scheduler) => scheduler,
                Err(err) => panic!("invalid bench config: {}", err),
            };
            black_box(scheduler.run(&mut world));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_scheduler);
criterion_main!(benches);
