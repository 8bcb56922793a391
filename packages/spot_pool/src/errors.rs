use thiserror::Error;

use crate::SpotId;

/// Errors that can occur when moving a spot between the pool's views.
///
/// Both variants are expected, recoverable outcomes: they are the pool's guard against
/// double-allocation and double-release races where a caller acted on a stale observation
/// of a spot's whereabouts. The pool state is untouched when one of these is returned.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum VacancyError {
    /// The spot was not in the available view, so it could not be moved to occupied.
    ///
    /// Typically means another caller claimed the spot after this caller observed it free.
    #[error("spot {spot} is not in the available view")]
    NotAvailable {
        /// The spot the move was attempted on.
        spot: SpotId,
    },

    /// The spot was not in the occupied view, so it could not be moved to available.
    ///
    /// Typically means the spot was already released.
    #[error("spot {spot} is not in the occupied view")]
    NotOccupied {
        /// The spot the move was attempted on.
        spot: SpotId,
    },
}
