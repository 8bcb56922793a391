//! Basic benchmarks for the `parking_allocator` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use parking_allocator::{ClientId, ParkingAllocator, RawParkingAllocator, Vehicle, VehicleKind};
use spot_pool::SpotPool;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

const SPOTS: usize = 64;

fn vehicle() -> Vehicle {
    Vehicle::new(VehicleKind::Car, "BENCH-1")
}

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("pa_basic");

    let allocs_op = allocs.operation("raw_allocate_release_cycle");
    group.bench_function("raw_allocate_release_cycle", |b| {
        let mut raw = RawParkingAllocator::new(SpotPool::builder().floor(SPOTS).build());
        let client = ClientId::new(1);

        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                black_box(raw.allocate(black_box(client), vehicle()).unwrap());
                black_box(raw.release(black_box(client)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("locked_allocate_release_cycle");
    group.bench_function("locked_allocate_release_cycle", |b| {
        let allocator = ParkingAllocator::new(SpotPool::builder().floor(SPOTS).build());
        let client = ClientId::new(1);

        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                black_box(allocator.allocate(black_box(client), vehicle()).unwrap());
                black_box(allocator.release(black_box(client)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("occupancy_snapshot");
    group.bench_function("occupancy_snapshot", |b| {
        let allocator = ParkingAllocator::new(SpotPool::builder().floor(SPOTS).build());

        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                black_box(allocator.occupancy());
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
