//! Example demonstrating `ParkingAllocator` under contention.
//!
//! More clients than spots race for the facility at once; exactly as many succeed as
//! there are spots, and the rest are told there is no capacity.

use std::sync::{Arc, Barrier};
use std::thread;

use parking_allocator::{ClientId, ParkingAllocator, Vehicle, VehicleKind};
use spot_pool::SpotPool;

const SPOTS: usize = 5;
const CLIENTS: usize = 8;

fn main() {
    let allocator = ParkingAllocator::new(SpotPool::builder().floor(SPOTS).build());
    let start = Arc::new(Barrier::new(CLIENTS));

    let handles: Vec<_> = (0..CLIENTS)
        .map(|i| {
            let allocator = allocator.clone();
            let start = Arc::clone(&start);

            thread::spawn(move || {
                let client = ClientId::new(u64::try_from(i).unwrap());
                let vehicle = Vehicle::new(VehicleKind::Car, format!("CAR-{i}"));

                start.wait();
                (client, allocator.allocate(client, vehicle))
            })
        })
        .collect();

    let mut granted = 0_usize;
    for handle in handles {
        let (client, outcome) = handle.join().unwrap();
        match outcome {
            Ok(session_id) => {
                granted = granted.saturating_add(1);
                println!("client {client}: granted session {session_id}");
            }
            Err(error) => println!("client {client}: {error}"),
        }
    }

    let occupancy = allocator.occupancy();
    println!(
        "\n{granted} of {CLIENTS} clients parked; occupancy {}/{}",
        occupancy.occupied(),
        occupancy.capacity()
    );

    assert_eq!(granted, SPOTS);
}
