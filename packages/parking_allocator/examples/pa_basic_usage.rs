//! Example demonstrating basic usage of `ParkingAllocator`.
//!
//! Walks one client through the full lifecycle: allocate, inspect the session, release,
//! and re-allocate, with the expected rejections along the way.

use parking_allocator::{AllocateError, ClientId, ParkingAllocator, Vehicle, VehicleKind};
use spot_pool::SpotPool;

fn main() {
    // A small facility: three spots on floor 1, two on floor 2.
    let allocator = ParkingAllocator::new(SpotPool::builder().floor(3).floor(2).build());
    println!("Facility opened with {} spots", allocator.capacity());

    let client = ClientId::new(1);
    let vehicle = Vehicle::new(VehicleKind::Car, "AB-123-CD");

    // Grant a spot.
    let session_id = allocator
        .allocate(client, vehicle.clone())
        .expect("the facility is empty");
    println!("Client {client} granted session {session_id}");

    let snapshot = allocator.session(client).expect("session is active");
    println!(
        "Session {} binds {} ({}) to spot {} on floor {}",
        snapshot.session_id(),
        snapshot.vehicle().plate(),
        snapshot.vehicle().kind(),
        snapshot.spot(),
        snapshot.floor()
    );

    // A second request from the same client is rejected; the session is untouched.
    match allocator.allocate(client, vehicle) {
        Err(AllocateError::AlreadyActive { client }) => {
            println!("Repeat request from client {client} rejected");
        }
        other => unreachable!("expected AlreadyActive, got {other:?}"),
    }

    // Release and immediately re-park.
    assert!(allocator.release(client));
    println!("Client {client} released; re-parking is always permitted");

    let second = allocator
        .allocate(client, Vehicle::new(VehicleKind::Car, "AB-123-CD"))
        .expect("a spot was just freed");
    println!("Client {client} granted a fresh session {second}");

    allocator.release(client);

    let occupancy = allocator.occupancy();
    println!(
        "Facility at close: {} available, {} occupied of {}",
        occupancy.available(),
        occupancy.occupied(),
        occupancy.capacity()
    );
}
