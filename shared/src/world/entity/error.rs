use thiserror::Error as ThisError;

use super::stable_id::StableId;

/// Snapshot data-integrity violations. These point at a bug in whatever assigned
/// the ids and are fatal to the snapshot's owner.
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum IntegrityError {
    /// The same stable id was found at more than one storage location
    #[error("Snapshot contains {} duplicated stable ids: {ids:?}", ids.len())]
    DuplicateStableIds { ids: Vec<StableId> },
}

/// Errors raised while assigning stable ids
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum IdentityError {
    /// Every sequence number of the session has been handed out
    #[error("Session {session:x} has exhausted its stable id sequence numbers")]
    SequenceExhausted { session: u64 },
}
