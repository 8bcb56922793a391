//! This package provides [`SpotPool`], a fixed-size pool of parking spots partitioned at all
//! times into two disjoint views: available and occupied.
//!
//! The pool is the state layer of a parking allocation engine. It knows nothing about clients
//! or sessions; it only guarantees that every spot is in exactly one view at every observable
//! point and that moves between the views are guarded against double-moves. The coordination
//! layer that serializes concurrent access lives above this package (see the
//! `parking_allocator` package).
//!
//! # Features
//!
//! - **Fixed population**: The set of spots is decided at build time and never changes.
//!   Spots are never destroyed or re-identified; only their availability changes.
//! - **Disjoint views**: A spot is in the available view or the occupied view, never both
//!   and never neither.
//! - **Guarded moves**: [`move_to_occupied()`][SpotPool::move_to_occupied] and
//!   [`move_to_available()`][SpotPool::move_to_available] fail with a [`VacancyError`]
//!   instead of corrupting state when the spot is not where the caller believed it was.
//! - **Read-only introspection**: Counts and spot lookups never expose a handle that could
//!   mutate pool state from the outside.
//!
//! # Example
//!
//! ```rust
//! use spot_pool::SpotPool;
//!
//! // Two floors: three spots on the first, two on the second.
//! let mut pool = SpotPool::builder().floor(3).floor(2).build();
//! assert_eq!(pool.capacity(), 5);
//! assert_eq!(pool.available_count(), 5);
//!
//! // Claim an arbitrary free spot.
//! let spot = pool.first_available().unwrap();
//! pool.move_to_occupied(spot).unwrap();
//! assert_eq!(pool.occupied_count(), 1);
//!
//! // Claiming the same spot again is rejected, not silently tolerated.
//! assert!(pool.move_to_occupied(spot).is_err());
//!
//! // Hand it back.
//! pool.move_to_available(spot).unwrap();
//! assert_eq!(pool.available_count(), 5);
//! ```
//!
//! # Thread safety
//!
//! [`SpotPool`] has no interior mutability; all mutation requires `&mut self`. To share one
//! pool between threads, wrap it in the synchronization primitive of the consuming layer so
//! that view moves and any related bookkeeping happen as one atomic unit.

mod builder;
mod errors;
mod pool;
mod spot;

pub use builder::*;
pub use errors::*;
pub use pool::*;
pub use spot::*;
