//! Benchmarks for the dungeon queue.
//!
//! Benchmarks cover:
//! - Round-robin selection and release on the instance pool
//! - Greedy party formation
//! - Party queue drain
//! - End-to-end runs with an instant executor

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use lfg_dungeon_queue::builders::CoordinatorBuilder;
use lfg_dungeon_queue::config::LfgConfig;
use lfg_dungeon_queue::core::{
    form_parties, InstancePool, InstantExecutor, PartyQueue, PlayerCounts,
};
use lfg_dungeon_queue::util::Console;

// ============================================================================
// Pool Benchmarks
// ============================================================================

fn bench_pool_acquire_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_acquire_release");

    for size in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let pool = InstancePool::new(size);
            b.iter(|| {
                if let Some(id) = pool.try_acquire() {
                    pool.release(black_box(id), 1).unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_pool_scan_nearly_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_scan_nearly_full");

    for size in [16usize, 256, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let pool = InstancePool::new(size);
            // Leave one free slot so every selection walks most of the ring.
            for _ in 0..size - 1 {
                pool.try_acquire();
            }
            b.iter(|| {
                let id = pool.try_acquire().unwrap();
                pool.release(black_box(id), 1).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_pool_contended(c: &mut Criterion) {
    c.bench_function("pool_contended_4_threads", |b| {
        b.iter(|| {
            let pool = Arc::new(InstancePool::new(4));
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let pool = Arc::clone(&pool);
                    thread::spawn(move || {
                        for _ in 0..250 {
                            if let Some(id) = pool.try_acquire() {
                                pool.release(id, 1).unwrap();
                            }
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });
}

// ============================================================================
// Party Benchmarks
// ============================================================================

fn bench_form_parties(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_parties");

    for count in [10u32, 1_000, 100_000] {
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(form_parties(PlayerCounts::new(count, count, count * 3))));
        });
    }
    group.finish();
}

fn bench_queue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_drain");

    for count in [100u32, 10_000] {
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let formation = form_parties(PlayerCounts::new(count, count, count * 3));
                let queue = PartyQueue::new(formation.parties);
                while let Some(party) = queue.dequeue() {
                    black_box(party);
                    queue.finish();
                }
            });
        });
    }
    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    group.sample_size(20);

    for instances in [1u32, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(instances),
            &instances,
            |b, &instances| {
                b.iter(|| {
                    let config = LfgConfig {
                        max_instances: instances,
                        num_tanks: 200,
                        num_healers: 200,
                        num_dps: 600,
                        min_clear_time: 1,
                        max_clear_time: 15,
                    };
                    let (console, _captured) = Console::in_memory();
                    let report = CoordinatorBuilder::new(config)
                        .with_executor(InstantExecutor)
                        .with_console(Arc::new(console))
                        .with_seed(1)
                        .build()
                        .run()
                        .unwrap();
                    black_box(report);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    pool_benches,
    bench_pool_acquire_release,
    bench_pool_scan_nearly_full,
    bench_pool_contended
);

criterion_group!(party_benches, bench_form_parties, bench_queue_drain);

criterion_group!(scenario_benches, bench_end_to_end);

criterion_main!(pool_benches, party_benches, scenario_benches);
