use std::sync::{Arc, Mutex};

use spot_pool::SpotPool;

use crate::constants::ERR_POISONED_LOCK;
use crate::{
    AllocateError, ClientId, Occupancy, RawParkingAllocator, SessionId, SessionSnapshot, Vehicle,
};

/// A thread-safe wrapper around [`RawParkingAllocator`] that serializes the claim/release
/// protocol across threads.
///
/// This type acts as a cloneable handle to a shared allocator instance. Multiple handles
/// can exist simultaneously, and the underlying allocator remains alive as long as at
/// least one handle exists.
///
/// Every operation acquires the allocator's single internal lock for its full duration,
/// so the registry check, the session insertion and the spot move of one `allocate` (and
/// the inverse steps of one `release`) form a single atomic unit. This is what rules out
/// double-booking: no interleaving exists in which two clients pass the checks for the
/// same spot. The lock is only ever held for the in-memory update; the allocator never
/// waits for a client inside it.
///
/// # Example
///
/// ```rust
/// use std::thread;
///
/// use parking_allocator::{ClientId, ParkingAllocator, Vehicle, VehicleKind};
/// use spot_pool::SpotPool;
///
/// let allocator = ParkingAllocator::new(SpotPool::builder().floor(4).build());
///
/// // Clone the handle to share across threads.
/// let allocator_clone = allocator.clone();
///
/// let handle = thread::spawn(move || {
///     let client = ClientId::new(1);
///     allocator_clone
///         .allocate(client, Vehicle::new(VehicleKind::Car, "AB-123"))
///         .unwrap();
///     allocator_clone.release(client)
/// });
///
/// assert!(handle.join().unwrap());
/// assert_eq!(allocator.occupancy().occupied(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ParkingAllocator {
    /// The shared allocator instance protected by a mutex for thread safety.
    inner: Arc<Mutex<RawParkingAllocator>>,
}

impl From<RawParkingAllocator> for ParkingAllocator {
    /// Creates a new [`ParkingAllocator`] from an existing single-threaded core.
    ///
    /// The provided core is consumed and wrapped in thread-safe reference counting.
    fn from(raw: RawParkingAllocator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(raw)),
        }
    }
}

impl ParkingAllocator {
    /// Creates an allocator managing the given pool.
    ///
    /// # Panics
    ///
    /// Panics if any spot in the pool is already occupied; see
    /// [`RawParkingAllocator::new()`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use parking_allocator::ParkingAllocator;
    /// use spot_pool::SpotPool;
    ///
    /// let allocator = ParkingAllocator::new(SpotPool::builder().floor(3).floor(2).build());
    /// assert_eq!(allocator.capacity(), 5);
    /// ```
    #[must_use]
    pub fn new(spots: SpotPool) -> Self {
        Self::from(RawParkingAllocator::new(spots))
    }

    /// Grants an arbitrary free spot to the client and records the session binding them.
    ///
    /// Atomic with respect to every other `allocate` and `release` on this allocator:
    /// a burst of concurrent calls against a pool with N free spots yields exactly N
    /// successes, and concurrent calls for the same client yield at most one.
    ///
    /// # Errors
    ///
    /// Returns [`AllocateError::NoCapacity`] when every spot is occupied at the instant
    /// of the call, or [`AllocateError::AlreadyActive`] when the client already holds an
    /// active session. Neither outcome mutates any state; see
    /// [`RawParkingAllocator::allocate()`].
    pub fn allocate(
        &self,
        client: ClientId,
        vehicle: Vehicle,
    ) -> Result<SessionId, AllocateError> {
        let mut raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.allocate(client, vehicle)
    }

    /// Ends the client's active session and returns its spot to the available view.
    ///
    /// Returns `true` iff an active session existed and was closed. Safe to call at any
    /// time, including concurrently with other operations and repeatedly for the same
    /// client; see [`RawParkingAllocator::release()`].
    pub fn release(&self, client: ClientId) -> bool {
        let mut raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.release(client)
    }

    /// Returns a read-only copy of the client's active session, if any.
    ///
    /// The copy is taken under the allocator lock, so its fields are mutually consistent;
    /// it does not stay current once returned.
    #[must_use]
    pub fn session(&self, client: ClientId) -> Option<SessionSnapshot> {
        let raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.active_session(client).map(SessionSnapshot::from)
    }

    /// Returns a consistent snapshot of the pool's occupancy.
    ///
    /// Taken under the allocator lock: `available() + occupied()` always equals
    /// `capacity()`, even while other threads are allocating and releasing.
    ///
    /// This operation may block if another thread is currently using the allocator.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        let raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.occupancy()
    }

    /// Returns the total number of spots managed by this allocator.
    #[must_use]
    pub fn capacity(&self) -> usize {
        let raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.capacity()
    }

    /// Returns the number of spots currently free.
    ///
    /// For a count that is consistent with the occupied count, use
    /// [`occupancy()`][Self::occupancy].
    #[must_use]
    pub fn available_spots(&self) -> usize {
        let raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.available_spots()
    }

    /// Returns the number of spots currently granted to clients.
    #[must_use]
    pub fn occupied_spots(&self) -> usize {
        let raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.occupied_spots()
    }

    /// Returns the number of active sessions.
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        let raw = self.inner.lock().expect(ERR_POISONED_LOCK);
        raw.active_sessions()
    }
}
