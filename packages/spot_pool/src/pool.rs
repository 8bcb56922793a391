use foldhash::{HashMap, HashMapExt};

use crate::{Spot, SpotId, SpotPoolBuilder, VacancyError};

/// A fixed pool of parking spots, partitioned into an available view and an occupied view.
///
/// The partition is the pool's core promise: after every completed operation the two views
/// are disjoint, together they contain every spot the pool was built with, and each spot's
/// availability flag agrees with the view it is in. The move operations are the only
/// mutators and they refuse to proceed when a spot is not in the expected source view, so a
/// caller acting on a stale observation gets a clean [`VacancyError`] instead of a
/// corrupted partition.
///
/// # Example
///
/// ```rust
/// use spot_pool::SpotPool;
///
/// let mut pool = SpotPool::builder().floor(2).build();
///
/// let spot = pool.first_available().unwrap();
/// pool.move_to_occupied(spot).unwrap();
///
/// assert_eq!(pool.available_count(), 1);
/// assert_eq!(pool.occupied_count(), 1);
/// ```
///
/// # Thread safety
///
/// All mutation requires `&mut self`; the pool has no interior mutability. A coordination
/// layer that wants to combine a view move with its own bookkeeping (e.g. a session
/// registry) must guard both behind one synchronization primitive so the combination is a
/// single atomic unit.
#[derive(Debug)]
pub struct SpotPool {
    /// Total number of spots, fixed at build time. Equals the combined size of the two
    /// views at all times.
    capacity: usize,

    /// Spots currently free, keyed by id. We use foldhash for better performance with
    /// small hash tables.
    available: HashMap<SpotId, Spot>,

    /// Spots currently claimed, keyed by id. Disjoint from `available`.
    occupied: HashMap<SpotId, Spot>,
}

impl SpotPool {
    /// Returns a builder for declaring the pool's floors and spot counts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spot_pool::SpotPool;
    ///
    /// let pool = SpotPool::builder().floor(3).floor(2).build();
    /// assert_eq!(pool.capacity(), 5);
    /// ```
    pub fn builder() -> SpotPoolBuilder {
        SpotPoolBuilder::new()
    }

    pub(crate) fn new_inner(spots: Vec<Spot>) -> Self {
        let capacity = spots.len();

        let mut available = HashMap::with_capacity(capacity);
        for spot in spots {
            let previous = available.insert(spot.id(), spot);
            assert!(previous.is_none(), "builder produced a duplicate spot id");
        }

        Self {
            capacity,
            available,
            occupied: HashMap::new(),
        }
    }

    /// Returns the total number of spots in the pool.
    ///
    /// Fixed at build time; growing or shrinking a pool in use is not supported.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of spots currently in the available view.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Returns the number of spots currently in the occupied view.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Returns whether every spot is currently occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available.is_empty()
    }

    /// Returns an arbitrary spot from the available view, if any.
    ///
    /// The selection policy is deliberately unspecified: any free spot satisfies any
    /// request, so callers must not assume an ordering or fairness between calls.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spot_pool::SpotPool;
    ///
    /// let mut pool = SpotPool::builder().floor(1).build();
    ///
    /// let spot = pool.first_available().unwrap();
    /// pool.move_to_occupied(spot).unwrap();
    ///
    /// assert!(pool.first_available().is_none());
    /// ```
    #[must_use]
    pub fn first_available(&self) -> Option<SpotId> {
        self.available.keys().next().copied()
    }

    /// Returns a read-only view of a spot, looked up in whichever view it currently
    /// inhabits, or `None` if the id does not belong to this pool.
    #[must_use]
    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.available.get(&id).or_else(|| self.occupied.get(&id))
    }

    /// Returns an iterator over the ids of the spots currently in the available view,
    /// in unspecified order.
    #[must_use]
    pub fn available_ids(&self) -> impl Iterator<Item = SpotId> + '_ {
        self.available.keys().copied()
    }

    /// Moves a spot from the available view to the occupied view.
    ///
    /// The removal from one view and the insertion into the other are completed within
    /// this single `&mut self` call; no observer with a properly synchronized reference
    /// can see the spot in neither or both views.
    ///
    /// # Errors
    ///
    /// Returns [`VacancyError::NotAvailable`] when the spot is not currently in the
    /// available view, leaving the pool untouched. This is the guard against
    /// double-allocation: two callers may have observed the same free spot, but only the
    /// first move commits.
    pub fn move_to_occupied(&mut self, id: SpotId) -> Result<(), VacancyError> {
        let Some(mut spot) = self.available.remove(&id) else {
            return Err(VacancyError::NotAvailable { spot: id });
        };

        spot.mark_occupied();

        let previous = self.occupied.insert(id, spot);
        assert!(
            previous.is_none(),
            "spot {id} was present in both views; the partition invariant is broken"
        );

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Moves a spot from the occupied view back to the available view.
    ///
    /// The inverse of [`move_to_occupied()`][Self::move_to_occupied], with the same
    /// atomicity behavior.
    ///
    /// # Errors
    ///
    /// Returns [`VacancyError::NotOccupied`] when the spot is not currently in the
    /// occupied view, leaving the pool untouched. This is the guard against
    /// double-release.
    pub fn move_to_available(&mut self, id: SpotId) -> Result<(), VacancyError> {
        let Some(mut spot) = self.occupied.remove(&id) else {
            return Err(VacancyError::NotOccupied { spot: id });
        };

        spot.mark_available();

        let previous = self.available.insert(id, spot);
        assert!(
            previous.is_none(),
            "spot {id} was present in both views; the partition invariant is broken"
        );

        #[cfg(debug_assertions)]
        self.integrity_check();

        Ok(())
    }

    /// Asserts the partition invariants: disjoint views, conservation of the total spot
    /// count, and agreement between each spot's availability flag and its view.
    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    fn integrity_check(&self) {
        assert!(
            self.available
                .keys()
                .all(|id| !self.occupied.contains_key(id)),
            "available and occupied views intersect"
        );

        assert_eq!(
            self.available
                .len()
                .checked_add(self.occupied.len())
                .expect("view sizes cannot overflow usize"),
            self.capacity,
            "spots were lost or duplicated"
        );

        assert!(
            self.available.values().all(Spot::is_available),
            "a spot in the available view is flagged occupied"
        );
        assert!(
            self.occupied.values().all(|spot| !spot.is_available()),
            "a spot in the occupied view is flagged available"
        );
    }
}
