use foldhash::{HashMap, HashMapExt};
use spot_pool::SpotPool;

use crate::{AllocateError, ClientId, ParkingSession, SessionId, Vehicle};

/// The single-threaded core of the parking allocator.
///
/// Owns the [`SpotPool`] and the client registry and performs the claim/release protocol
/// under `&mut self`, which makes every operation trivially atomic for a single thread.
/// For shared use across threads, wrap it in [`ParkingAllocator`][crate::ParkingAllocator],
/// which funnels all access through one lock so the protocol stays atomic under
/// contention.
///
/// The registry holds at most one active session per client, and every session in the
/// registry is bound to a spot in the pool's occupied view. Those two facts are
/// established and torn down together, inside single calls, and are never observable
/// half-done.
///
/// # Example
///
/// ```rust
/// use parking_allocator::{ClientId, RawParkingAllocator, Vehicle, VehicleKind};
/// use spot_pool::SpotPool;
///
/// let mut allocator = RawParkingAllocator::new(SpotPool::builder().floor(2).build());
///
/// let client = ClientId::new(1);
/// allocator
///     .allocate(client, Vehicle::new(VehicleKind::Car, "AB-123"))
///     .unwrap();
///
/// assert_eq!(allocator.occupied_spots(), 1);
/// assert!(allocator.release(client));
/// assert_eq!(allocator.occupied_spots(), 0);
/// ```
#[derive(Debug)]
pub struct RawParkingAllocator {
    /// The facility's spots. The allocator is the sole mutator of the pool's views.
    spots: SpotPool,

    /// Active sessions keyed by client. At most one entry per client; this map is the
    /// commit point of the claim protocol. We use foldhash for better performance with
    /// small hash tables.
    sessions: HashMap<ClientId, ParkingSession>,

    /// The next session id to hand out. Never reused within this allocator instance.
    next_session_id: u64,
}

impl RawParkingAllocator {
    /// Creates an allocator managing the given pool.
    ///
    /// # Panics
    ///
    /// Panics if any spot in the pool is already occupied. The allocator must be the sole
    /// mutator of the pool's views from the start, otherwise occupied spots without a
    /// matching session would be unreleasable.
    #[must_use]
    pub fn new(spots: SpotPool) -> Self {
        assert_eq!(
            spots.occupied_count(),
            0,
            "the pool handed to an allocator must start fully available"
        );

        Self {
            spots,
            sessions: HashMap::new(),
            next_session_id: 1,
        }
    }

    /// Grants an arbitrary free spot to the client and records the session binding them.
    ///
    /// The selection policy is unspecified: any free spot satisfies any request. On
    /// success the spot is in the occupied view, the client holds exactly one active
    /// session and the returned session id is unique within this allocator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocateError::NoCapacity`] when every spot is occupied at the instant
    /// of the call; the caller may retry after someone releases. Returns
    /// [`AllocateError::AlreadyActive`] when the client already holds an active session;
    /// the existing session is untouched. Neither outcome mutates any state.
    pub fn allocate(
        &mut self,
        client: ClientId,
        vehicle: Vehicle,
    ) -> Result<SessionId, AllocateError> {
        let Some(spot) = self.spots.first_available() else {
            return Err(AllocateError::NoCapacity);
        };

        if self.sessions.contains_key(&client) {
            // Nothing was mutated yet; the speculative spot selection is simply abandoned.
            return Err(AllocateError::AlreadyActive { client });
        }

        let floor = self
            .spots
            .spot(spot)
            .expect("an id from the available view resolves to a spot")
            .floor();

        let session_id = self.mint_session_id();
        let session = ParkingSession::new(session_id, client, vehicle, spot, floor);

        // Commit point: from here on the client is recorded as holding the spot, and the
        // spot move below must succeed.
        let previous = self.sessions.insert(client, session);
        debug_assert!(previous.is_none(), "registry guard was checked above");

        // We hold exclusive access across the selection and the move, so the spot cannot
        // have been claimed in between; a failure here means the bookkeeping is corrupt.
        self.spots
            .move_to_occupied(spot)
            .expect("a spot observed free under exclusive access must still be free");

        Ok(session_id)
    }

    /// Ends the client's active session and returns its spot to the available view.
    ///
    /// Returns `true` iff an active session existed and was closed. Releasing with
    /// nothing held is a safe no-op returning `false`, so double-release never fails and
    /// never double-frees a spot. After a successful release the client may immediately
    /// allocate again.
    pub fn release(&mut self, client: ClientId) -> bool {
        let Some(mut session) = self.sessions.remove(&client) else {
            return false;
        };

        session.end();

        // The registry entry pointed at an occupied spot; the bookkeeping is corrupt if
        // the pool disagrees.
        self.spots
            .move_to_available(session.spot())
            .expect("a spot bound to an active session must be in the occupied view");

        true
    }

    /// Returns the client's active session, if any.
    #[must_use]
    pub fn active_session(&self, client: ClientId) -> Option<&ParkingSession> {
        self.sessions.get(&client)
    }

    /// Returns the total number of spots managed by this allocator.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.spots.capacity()
    }

    /// Returns the number of spots currently free.
    #[must_use]
    pub fn available_spots(&self) -> usize {
        self.spots.available_count()
    }

    /// Returns the number of spots currently granted to clients.
    #[must_use]
    pub fn occupied_spots(&self) -> usize {
        self.spots.occupied_count()
    }

    /// Returns the number of active sessions. Always equals
    /// [`occupied_spots()`][Self::occupied_spots].
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Returns a consistent snapshot of the pool's occupancy.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            available: self.spots.available_count(),
            occupied: self.spots.occupied_count(),
            capacity: self.spots.capacity(),
        }
    }

    fn mint_session_id(&mut self) -> SessionId {
        let id = SessionId::new(self.next_session_id);

        self.next_session_id = self
            .next_session_id
            .checked_add(1)
            .expect("session id space exhausted");

        id
    }
}

/// A consistent point-in-time view of the pool's occupancy, for monitoring and tests.
///
/// Both counts are read within one atomic unit, so `available() + occupied()` always
/// equals `capacity()` — an observer can never witness a spot mid-move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Occupancy {
    available: usize,
    occupied: usize,
    capacity: usize,
}

impl Occupancy {
    /// Returns the number of free spots at the time of the snapshot.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    /// Returns the number of granted spots at the time of the snapshot.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns the total number of spots, which is fixed for the allocator's lifetime.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
