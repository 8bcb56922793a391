//! Example demonstrating basic usage of `SpotPool`.
//!
//! Builds a small two-floor pool, claims spots until it is full and releases them again,
//! showing how the two views stay in agreement throughout.

use spot_pool::SpotPool;

fn main() {
    // Three spots on floor 1, two on floor 2.
    let mut pool = SpotPool::builder().floor(3).floor(2).build();
    println!("Built a pool with {} spots", pool.capacity());

    // Claim every spot.
    let mut claimed = Vec::new();
    while let Some(spot) = pool.first_available() {
        pool.move_to_occupied(spot).expect("spot was just observed free");
        claimed.push(spot);
        println!(
            "Claimed spot {spot} (available: {}, occupied: {})",
            pool.available_count(),
            pool.occupied_count()
        );
    }

    assert!(pool.is_full());

    // A stale claim attempt is rejected cleanly.
    let stale = claimed.first().copied().expect("we claimed at least one spot");
    match pool.move_to_occupied(stale) {
        Ok(()) => unreachable!("the spot is occupied"),
        Err(error) => println!("Stale claim rejected: {error}"),
    }

    // Hand everything back.
    for spot in claimed {
        pool.move_to_available(spot).expect("spot was claimed above");
    }
    println!("All spots returned; {} available", pool.available_count());
}
