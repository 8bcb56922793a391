use thiserror::Error;

use crate::ClientId;

/// Expected outcomes of a failed allocation attempt.
///
/// Neither variant is a system fault: a full facility and a repeat request are normal
/// business outcomes that the caller handles (retry later, or keep using the session it
/// already holds). The allocator's state is untouched when one of these is returned.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum AllocateError {
    /// Every spot was occupied at the instant of the call.
    ///
    /// The pool does not queue requests; callers wanting wait-for-availability semantics
    /// poll or layer a queue on top.
    #[error("no parking spot is available right now")]
    NoCapacity,

    /// The client already holds an active session.
    ///
    /// A client may hold at most one session at a time; the existing session is untouched
    /// by the rejected attempt.
    #[error("client {client} already holds an active parking session")]
    AlreadyActive {
        /// The client whose request was rejected.
        client: ClientId,
    },
}
