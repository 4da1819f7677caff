use thiserror::Error;

use super::entity::stable_id::StableId;

/// Errors raised when a change-set does not fit the world it is applied to. Any of
/// these means the two sides have drifted apart and need a reset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MirrorWorldError {
    /// The change-set removes an entity the world does not have
    #[error("Change-set removes entity {id:?} which does not exist in this world")]
    RemovedUnknownEntity { id: StableId },

    /// The change-set adds an entity the world already has
    #[error("Change-set adds entity {id:?} which already exists in this world")]
    AddedExistingEntity { id: StableId },

    /// The change-set changes an entity the world does not have
    #[error("Change-set changes entity {id:?} which does not exist in this world")]
    ChangedUnknownEntity { id: StableId },

    /// An added entity arrived without its content
    #[error("Change-set adds entity {id:?} without providing its content")]
    MissingContent { id: StableId },

    /// Content arrived for an entity that is neither added nor changed
    #[error("Change-set carries content for entity {id:?} which it neither adds nor changes")]
    UnexpectedContent { id: StableId },
}
