use super::{
    content::{ContentFingerprint, EntityContent},
    entity::{located_id::LocatedId, stable_id::StableId},
};

/// Read-only view of a world at one instant, as the differ consumes it.
///
/// Implementations are expected to answer each lookup in O(1) or O(log n) and to
/// have no side effects.
pub trait WorldSnapshot {
    /// Every live element with its storage location, sorted by stable id. A
    /// correctly maintained world never repeats an id here.
    fn located_ids(&self) -> Vec<LocatedId>;

    /// Full content of one element
    fn content(&self, id: &StableId) -> Option<EntityContent>;

    /// Every live stable id, ascending
    fn stable_ids(&self) -> Vec<StableId> {
        self.located_ids().into_iter().map(|entry| entry.id).collect()
    }

    /// Live stable ids accepted by `filter`, ascending
    fn stable_ids_matching(&self, filter: &dyn Fn(&StableId) -> bool) -> Vec<StableId> {
        self.stable_ids().into_iter().filter(|id| filter(id)).collect()
    }

    /// Structural hash of one element's content. Worlds that cache fingerprints
    /// should override this to avoid materializing the content.
    fn fingerprint(&self, id: &StableId) -> Option<ContentFingerprint> {
        self.content(id).map(|content| content.fingerprint())
    }
}
