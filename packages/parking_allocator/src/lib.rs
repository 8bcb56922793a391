//! This package provides [`ParkingAllocator`], a thread-safe service that grants parking
//! spots from a fixed [`SpotPool`][spot_pool::SpotPool] to clients under concurrent demand.
//!
//! The allocator enforces three guarantees that cannot be provided by the pool alone:
//!
//! - A spot is granted to at most one client at a time.
//! - Each client holds at most one active [`ParkingSession`] at a time.
//! - The pool's available/occupied partition and the client registry never disagree,
//!   under arbitrary thread interleavings.
//!
//! The critical design point is that the client-registry check and the spot-state move
//! are fused into one atomic unit. Treating them as two independent steps reopens the
//! double-booking race this engine exists to close, so every operation on
//! [`ParkingAllocator`] runs under a single internal lock spanning both structures.
//!
//! # Features
//!
//! - **Atomic claim protocol**: No interleaving lets two clients believe they hold the
//!   same spot, or one client hold two spots.
//! - **Expected outcomes as values**: A full facility yields
//!   [`AllocateError::NoCapacity`], a repeat request yields
//!   [`AllocateError::AlreadyActive`]; neither is a panic or a system fault.
//! - **Idempotent release**: Releasing with nothing held is a safe no-op returning
//!   `false`.
//! - **Non-blocking**: `allocate` never waits for a spot to free up; callers needing
//!   wait-for-availability semantics layer that on outside.
//! - **Read-only introspection**: [`Occupancy`] snapshots are taken under the same lock,
//!   so an observer never witnesses a torn partition.
//!
//! # Example
//!
//! ```rust
//! use parking_allocator::{ClientId, ParkingAllocator, Vehicle, VehicleKind};
//! use spot_pool::SpotPool;
//!
//! let allocator = ParkingAllocator::new(SpotPool::builder().floor(3).floor(2).build());
//!
//! let client = ClientId::new(1);
//! let session = allocator
//!     .allocate(client, Vehicle::new(VehicleKind::Car, "AB-123-CD"))
//!     .unwrap();
//!
//! let snapshot = allocator.session(client).unwrap();
//! assert_eq!(snapshot.session_id(), session);
//!
//! assert!(allocator.release(client));
//! assert!(!allocator.release(client)); // Nothing held anymore; safe no-op.
//! ```
//!
//! # Thread safety
//!
//! [`ParkingAllocator`] is a cloneable handle to shared state; clone it freely into every
//! thread that needs to allocate or release. For single-threaded use without the locking
//! overhead, use [`RawParkingAllocator`] directly.

mod allocator;
mod client;
mod constants;
mod errors;
mod raw;
mod session;

pub use allocator::*;
pub use client::*;
pub use errors::*;
pub use raw::*;
pub use session::*;
