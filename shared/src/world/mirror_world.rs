use std::collections::BTreeMap;

use log::debug;

use crate::diff::change_set::ChangeSet;

use super::{
    content::EntityContent,
    entity::{
        located_id::{EntityLocation, LocatedId},
        stable_id::StableId,
    },
    error::MirrorWorldError,
    snapshot::WorldSnapshot,
};

struct MirrorEntity {
    location: EntityLocation,
    content: EntityContent,
}

/// A world rebuilt purely from received change-sets, as the remote side keeps it.
pub struct MirrorWorld {
    entities: BTreeMap<StableId, MirrorEntity>,
    next_index: u32,
}

impl MirrorWorld {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_index: 0,
        }
    }

    /// Applies a change-set atomically: either every step fits and the world is
    /// updated, or nothing is touched and the mismatch is returned.
    ///
    /// Removals are applied before additions so an id can be recycled by the
    /// authoring side within one change-set.
    pub fn apply(&mut self, change_set: &ChangeSet) -> Result<(), MirrorWorldError> {
        self.check(change_set)?;

        for id in &change_set.removed {
            self.entities.remove(id);
        }

        for delta in &change_set.contents {
            match self.entities.get_mut(&delta.id) {
                Some(entity) => entity.content = delta.content.clone(),
                None => {
                    let location = EntityLocation::new(self.next_index, 0);
                    self.next_index += 1;
                    self.entities.insert(
                        delta.id,
                        MirrorEntity {
                            location,
                            content: delta.content.clone(),
                        },
                    );
                }
            }
        }

        debug!(
            "MirrorWorld: applied change-set (+{} -{} ~{}), now holding {} entities",
            change_set.added.len(),
            change_set.removed.len(),
            change_set.changed.len(),
            self.entities.len()
        );
        Ok(())
    }

    fn check(&self, change_set: &ChangeSet) -> Result<(), MirrorWorldError> {
        for id in &change_set.removed {
            if !self.entities.contains_key(id) {
                return Err(MirrorWorldError::RemovedUnknownEntity { id: *id });
            }
        }
        for id in &change_set.added {
            let recycled = change_set.removed.binary_search(id).is_ok();
            if self.entities.contains_key(id) && !recycled {
                return Err(MirrorWorldError::AddedExistingEntity { id: *id });
            }
            if change_set.content(id).is_none() {
                return Err(MirrorWorldError::MissingContent { id: *id });
            }
        }
        for id in &change_set.changed {
            if !self.entities.contains_key(id) {
                return Err(MirrorWorldError::ChangedUnknownEntity { id: *id });
            }
        }
        for delta in &change_set.contents {
            let listed = change_set.added.binary_search(&delta.id).is_ok()
                || change_set.changed.binary_search(&delta.id).is_ok();
            if !listed {
                return Err(MirrorWorldError::UnexpectedContent { id: delta.id });
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.next_index = 0;
    }

    pub fn contains(&self, id: &StableId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for MirrorWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldSnapshot for MirrorWorld {
    fn located_ids(&self) -> Vec<LocatedId> {
        self.entities
            .iter()
            .map(|(id, entity)| LocatedId::new(entity.location, *id))
            .collect()
    }

    fn content(&self, id: &StableId) -> Option<EntityContent> {
        self.entities.get(id).map(|entity| entity.content.clone())
    }
}
