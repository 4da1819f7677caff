use crate::world::{entity::stable_id::StableId, snapshot::WorldSnapshot};

/// Decides whether an entity present in both snapshots changed between them.
pub trait ContentComparator: Send + Sync {
    fn content_changed(
        &self,
        id: &StableId,
        previous: &dyn WorldSnapshot,
        current: &dyn WorldSnapshot,
    ) -> bool;
}

/// Compares structural hashes of the content. Cheap when the worlds cache their
/// fingerprints, and the only choice when the previous side keeps no content.
pub struct FingerprintComparator;

impl ContentComparator for FingerprintComparator {
    fn content_changed(
        &self,
        id: &StableId,
        previous: &dyn WorldSnapshot,
        current: &dyn WorldSnapshot,
    ) -> bool {
        previous.fingerprint(id) != current.fingerprint(id)
    }
}

/// Compares full content, component by component.
pub struct ContentEqualityComparator;

impl ContentComparator for ContentEqualityComparator {
    fn content_changed(
        &self,
        id: &StableId,
        previous: &dyn WorldSnapshot,
        current: &dyn WorldSnapshot,
    ) -> bool {
        previous.content(id) != current.content(id)
    }
}

impl<F> ContentComparator for F
where
    F: Fn(&StableId, &dyn WorldSnapshot, &dyn WorldSnapshot) -> bool + Send + Sync,
{
    fn content_changed(
        &self,
        id: &StableId,
        previous: &dyn WorldSnapshot,
        current: &dyn WorldSnapshot,
    ) -> bool {
        self(id, previous, current)
    }
}
