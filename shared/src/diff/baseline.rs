use log::warn;

use crate::world::{
    content::{ContentFingerprint, EntityContent},
    entity::{located_id::LocatedId, stable_id::StableId},
    snapshot::WorldSnapshot,
};

/// What a remote peer was last sent: every id with the fingerprint its content had.
///
/// A baseline acts as the "previous" snapshot of the next diff. It keeps no
/// content, so diff it with a fingerprint-based comparator.
#[derive(Clone, Debug, Default)]
pub struct Baseline {
    entries: Vec<(LocatedId, ContentFingerprint)>,
}

impl Baseline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(world: &dyn WorldSnapshot) -> Self {
        let located_ids = world.located_ids();
        let mut entries = Vec::with_capacity(located_ids.len());
        for located in located_ids {
            match world.fingerprint(&located.id) {
                Some(fingerprint) => entries.push((located, fingerprint)),
                None => warn!(
                    "Baseline: entity {:?} is listed but has no content, leaving it out",
                    located.id
                ),
            }
        }
        Self { entries }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, id: &StableId) -> Option<&(LocatedId, ContentFingerprint)> {
        self.entries
            .binary_search_by_key(id, |(located, _)| located.id)
            .ok()
            .map(|index| &self.entries[index])
    }
}

impl WorldSnapshot for Baseline {
    fn located_ids(&self) -> Vec<LocatedId> {
        self.entries.iter().map(|(located, _)| *located).collect()
    }

    fn content(&self, _: &StableId) -> Option<EntityContent> {
        None
    }

    fn fingerprint(&self, id: &StableId) -> Option<ContentFingerprint> {
        self.find(id).map(|(_, fingerprint)| *fingerprint)
    }
}
