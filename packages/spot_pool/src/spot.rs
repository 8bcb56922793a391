use std::fmt;

/// Identifies one parking spot within a [`SpotPool`][crate::SpotPool].
///
/// Identifiers are assigned by the pool builder, are unique within their pool and remain
/// valid for the lifetime of the pool. They carry no meaning across pools: an id obtained
/// from one pool must not be used with another.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SpotId(u32);

impl SpotId {
    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the identifier.
    ///
    /// Useful for display and logging; the value cannot be turned back into pool membership.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SpotId {
    #[cfg_attr(test, mutants::skip)] // No API contract for the exact rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The floor a parking spot is located on.
///
/// A pure grouping attribute, immutable for the spot's lifetime. The pool attaches no
/// semantics to it today; any free spot satisfies any request regardless of floor.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Floor(u8);

impl Floor {
    pub(crate) fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the floor, counted from 1.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Floor {
    #[cfg_attr(test, mutants::skip)] // No API contract for the exact rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One allocatable parking spot.
///
/// Spots are passive data: they are created once at pool build time and only their
/// availability flag ever changes, always through the pool's move operations. The flag is
/// guaranteed to agree with the view the spot currently lives in.
#[derive(Clone, Debug)]
pub struct Spot {
    id: SpotId,
    floor: Floor,
    available: bool,
}

impl Spot {
    pub(crate) fn new(id: SpotId, floor: Floor) -> Self {
        Self {
            id,
            floor,
            available: true,
        }
    }

    /// Returns the identifier of this spot.
    #[must_use]
    pub fn id(&self) -> SpotId {
        self.id
    }

    /// Returns the floor this spot is located on.
    #[must_use]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Returns whether this spot is currently free.
    ///
    /// Always agrees with the view the spot is in: `true` in the available view,
    /// `false` in the occupied view.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn mark_occupied(&mut self) {
        self.available = false;
    }

    pub(crate) fn mark_available(&mut self) {
        self.available = true;
    }
}
