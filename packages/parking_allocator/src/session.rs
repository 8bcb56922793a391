use std::fmt;
use std::time::{Duration, Instant};

use spot_pool::{Floor, SpotId};

use crate::{ClientId, Vehicle};

/// Identifies one parking session issued by an allocator.
///
/// Identifiers are unique within their allocator instance and are never reused, including
/// after the session ends.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the identifier.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    #[cfg_attr(test, mutants::skip)] // No API contract for the exact rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binds one client to one parking spot for a bounded interval.
///
/// Created by the allocator when a spot is granted and ended exactly once when the client
/// releases. A session is active while its end timestamp is unset; once set, the end
/// timestamp is immutable.
///
/// Sessions are passive records: all state transitions go through the allocator, which
/// guarantees that [`end()`][Self::end] is never called twice.
#[derive(Clone, Debug)]
pub struct ParkingSession {
    id: SessionId,
    client: ClientId,
    vehicle: Vehicle,
    spot: SpotId,
    floor: Floor,
    started_at: Instant,
    ended_at: Option<Instant>,
}

impl ParkingSession {
    pub(crate) fn new(
        id: SessionId,
        client: ClientId,
        vehicle: Vehicle,
        spot: SpotId,
        floor: Floor,
    ) -> Self {
        Self {
            id,
            client,
            vehicle,
            spot,
            floor,
            started_at: Instant::now(),
            ended_at: None,
        }
    }

    /// Returns the identifier of this session.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the client holding this session.
    #[must_use]
    pub fn client(&self) -> ClientId {
        self.client
    }

    /// Returns the vehicle this session was requested for.
    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Returns the spot bound to this session.
    #[must_use]
    pub fn spot(&self) -> SpotId {
        self.spot
    }

    /// Returns the floor of the bound spot.
    #[must_use]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Returns when this session started.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Returns whether this session is still active, i.e. has not been ended.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Returns how long this session has been running, or its final length once ended.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.ended_at.map_or_else(
            || self.started_at.elapsed(),
            |ended_at| ended_at.duration_since(self.started_at),
        )
    }

    /// Marks the session as ended.
    ///
    /// # Panics
    ///
    /// Panics if the session has already ended. The allocator removes a session from its
    /// registry in the same atomic unit that ends it, so reaching this panic indicates a
    /// bookkeeping bug, not a caller error.
    pub(crate) fn end(&mut self) {
        assert!(
            self.ended_at.is_none(),
            "session {} was ended twice",
            self.id
        );

        self.ended_at = Some(Instant::now());
    }
}

/// A read-only copy of a client's active session, taken at a single point in time.
///
/// Returned by [`ParkingAllocator::session()`][crate::ParkingAllocator::session] so
/// callers can display or record what a client holds without receiving any handle into
/// the allocator's internals.
#[derive(Clone, Debug)]
pub struct SessionSnapshot {
    session_id: SessionId,
    client: ClientId,
    vehicle: Vehicle,
    spot: SpotId,
    floor: Floor,
    started_at: Instant,
}

impl SessionSnapshot {
    /// Returns the identifier of the session.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Returns the client holding the session.
    #[must_use]
    pub fn client(&self) -> ClientId {
        self.client
    }

    /// Returns the vehicle the session was requested for.
    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Returns the spot bound to the session.
    #[must_use]
    pub fn spot(&self) -> SpotId {
        self.spot
    }

    /// Returns the floor of the bound spot.
    #[must_use]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Returns when the session started.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}

impl From<&ParkingSession> for SessionSnapshot {
    fn from(session: &ParkingSession) -> Self {
        Self {
            session_id: session.id(),
            client: session.client(),
            vehicle: session.vehicle().clone(),
            spot: session.spot(),
            floor: session.floor(),
            started_at: session.started_at(),
        }
    }
}
