//! Contention tests for the `parking_allocator` package.
//!
//! These drive many threads against one allocator and verify the concurrency guarantees:
//! a saturation burst grants exactly as many spots as were free, a same-client race grants
//! at most one session, and no observer ever witnesses a torn pool partition.

use std::sync::{Arc, Barrier};
use std::thread;

use parking_allocator::{AllocateError, ClientId, ParkingAllocator, Vehicle, VehicleKind};
use rand::Rng;
use spot_pool::SpotPool;

fn allocator(spots: usize) -> ParkingAllocator {
    ParkingAllocator::new(SpotPool::builder().floor(spots).build())
}

fn car(label: u64) -> Vehicle {
    Vehicle::new(VehicleKind::Car, format!("CAR-{label}"))
}

#[test]
fn saturation_burst_grants_exactly_the_free_spots() {
    const SPOTS: usize = 8;
    const CLIENTS: usize = 12;

    let allocator = allocator(SPOTS);
    let start = Arc::new(Barrier::new(CLIENTS));

    let handles: Vec<_> = (0..CLIENTS)
        .map(|i| {
            let allocator = allocator.clone();
            let start = Arc::clone(&start);

            thread::spawn(move || {
                let client = ClientId::new(u64::try_from(i).unwrap());

                start.wait();
                allocator.allocate(client, car(client.get()))
            })
        })
        .collect();

    let outcomes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let rejections = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Err(AllocateError::NoCapacity)))
        .count();

    assert_eq!(successes, SPOTS, "a burst must grant exactly the free spots");
    assert_eq!(rejections, CLIENTS - SPOTS);

    let occupancy = allocator.occupancy();
    assert_eq!(occupancy.occupied(), SPOTS);
    assert_eq!(occupancy.available(), 0);
}

#[test]
fn same_client_race_grants_at_most_one_session() {
    const RACERS: usize = 8;

    let allocator = allocator(4);
    let client = ClientId::new(1);
    let start = Arc::new(Barrier::new(RACERS));

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let allocator = allocator.clone();
            let start = Arc::clone(&start);

            thread::spawn(move || {
                start.wait();
                allocator.allocate(client, car(1)).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|granted| *granted)
        .count();

    assert_eq!(successes, 1, "one client may hold at most one session");
    assert_eq!(allocator.occupancy().occupied(), 1);
}

#[test]
fn concurrent_allocate_release_pairs_leave_no_residue() {
    const CLIENTS: usize = 16;
    const CYCLES: usize = 200;

    let allocator = allocator(CLIENTS);
    let start = Arc::new(Barrier::new(CLIENTS));

    let handles: Vec<_> = (0..CLIENTS)
        .map(|i| {
            let allocator = allocator.clone();
            let start = Arc::clone(&start);

            thread::spawn(move || {
                let client = ClientId::new(u64::try_from(i).unwrap());
                start.wait();

                for _ in 0..CYCLES {
                    // Capacity equals the client count, so every allocation must succeed.
                    allocator.allocate(client, car(client.get())).unwrap();
                    assert!(allocator.release(client));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let occupancy = allocator.occupancy();
    assert_eq!(occupancy.occupied(), 0);
    assert_eq!(occupancy.available(), CLIENTS);
}

#[test]
fn observer_never_witnesses_a_torn_partition() {
    const SPOTS: usize = 6;
    const CLIENTS: u64 = 20;
    const MUTATORS: usize = 4;
    const OPS_PER_MUTATOR: usize = 5_000;
    const OBSERVATIONS: usize = 20_000;

    let allocator = allocator(SPOTS);
    let start = Arc::new(Barrier::new(MUTATORS + 1));

    let mut handles: Vec<_> = (0..MUTATORS)
        .map(|_| {
            let allocator = allocator.clone();
            let start = Arc::clone(&start);

            thread::spawn(move || {
                let mut rng = rand::rng();
                start.wait();

                for _ in 0..OPS_PER_MUTATOR {
                    let client = ClientId::new(rng.random_range(0..CLIENTS));

                    if rng.random_bool(0.5) {
                        // Expected business outcomes only; anything else panics the test.
                        drop(allocator.allocate(client, car(client.get())));
                    } else {
                        allocator.release(client);
                    }
                }
            })
        })
        .collect();

    let observer = {
        let allocator = allocator.clone();
        let start = Arc::clone(&start);

        thread::spawn(move || {
            start.wait();

            for _ in 0..OBSERVATIONS {
                let occupancy = allocator.occupancy();

                // Conservation: no snapshot may ever show a spot lost or duplicated.
                assert_eq!(
                    occupancy.available() + occupancy.occupied(),
                    SPOTS,
                    "observed a torn partition"
                );
            }
        })
    };
    handles.push(observer);

    for handle in handles {
        handle.join().unwrap();
    }

    // Quiesce: release every client and verify the facility drains completely.
    for client in 0..CLIENTS {
        allocator.release(ClientId::new(client));
    }

    let occupancy = allocator.occupancy();
    assert_eq!(occupancy.available(), SPOTS);
    assert_eq!(occupancy.occupied(), 0);
}

#[test]
fn high_contention_churn_conserves_sessions_and_spots() {
    const SPOTS: usize = 3;
    const THREADS: usize = 8;
    const OPS_PER_THREAD: usize = 2_000;

    let allocator = allocator(SPOTS);
    let start = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let allocator = allocator.clone();
            let start = Arc::clone(&start);

            thread::spawn(move || {
                // Each thread owns one client, so every AlreadyActive outcome is a
                // genuine self-collision rather than cross-thread noise.
                let client = ClientId::new(u64::try_from(i).unwrap());
                let mut rng = rand::rng();
                start.wait();

                for _ in 0..OPS_PER_THREAD {
                    if rng.random_bool(0.6) {
                        match allocator.allocate(client, car(client.get())) {
                            Ok(_) | Err(AllocateError::NoCapacity) => {}
                            Err(AllocateError::AlreadyActive { client: c }) => {
                                assert_eq!(c, client);
                            }
                            Err(other) => panic!("unexpected outcome: {other}"),
                        }
                    } else {
                        allocator.release(client);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Active sessions and occupied spots must agree exactly once the dust settles.
    assert_eq!(allocator.active_sessions(), allocator.occupied_spots());
    assert_eq!(
        allocator.occupancy().available() + allocator.occupancy().occupied(),
        SPOTS
    );
}
