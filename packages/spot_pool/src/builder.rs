use crate::{Floor, Spot, SpotId, SpotPool};

/// Builder for creating an instance of [`SpotPool`].
///
/// Declare floors in order from the ground up; each declaration adds the given number of
/// spots on the next floor. Spot ids are assigned sequentially starting at 1, in
/// declaration order, and every spot starts out available.
///
/// # Examples
///
/// ```
/// use spot_pool::SpotPool;
///
/// // Three spots on floor 1, two spots on floor 2.
/// let pool = SpotPool::builder().floor(3).floor(2).build();
///
/// assert_eq!(pool.capacity(), 5);
/// ```
#[derive(Debug)]
#[must_use]
pub struct SpotPoolBuilder {
    /// Spot counts per floor, in declaration order.
    floors: Vec<usize>,
}

impl SpotPoolBuilder {
    pub(crate) fn new() -> Self {
        Self { floors: Vec::new() }
    }

    /// Adds a floor with the given number of spots.
    ///
    /// Floors are numbered from 1 in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use spot_pool::SpotPool;
    ///
    /// let pool = SpotPool::builder().floor(10).build();
    /// assert_eq!(pool.capacity(), 10);
    /// ```
    pub fn floor(mut self, spots: usize) -> Self {
        self.floors.push(spots);
        self
    }

    /// Builds the pool with the declared floors.
    ///
    /// A pool with no floors (or only empty floors) is permitted; it simply never has a
    /// spot to give out.
    ///
    /// # Panics
    ///
    /// Panics if more than `u8::MAX` floors were declared or the total spot count does not
    /// fit the id space.
    #[must_use]
    pub fn build(self) -> SpotPool {
        let mut spots = Vec::new();
        let mut next_id = 1_u32;

        for (floor_index, count) in self.floors.iter().enumerate() {
            let floor = Floor::new(
                u8::try_from(floor_index.wrapping_add(1)).expect("more floors than fit in u8"),
            );

            for _ in 0..*count {
                spots.push(Spot::new(SpotId::new(next_id), floor));
                next_id = next_id.checked_add(1).expect("spot id space exhausted");
            }
        }

        SpotPool::new_inner(spots)
    }
}
