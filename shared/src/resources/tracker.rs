use log::{debug, trace};

use super::{query::ResourceQuery, resource_id::ResourceId, resource_set_message::ResourceSetMessage};

/// Watches which resources a world has loaded and produces a
/// [`ResourceSetMessage`] only when that actually changes.
///
/// The tracker owns the set it last reported and must be driven by one tick
/// sequence at a time.
pub struct ResourceSetTracker {
    previous_loaded: Vec<ResourceId>,
    force_next: bool,
}

impl ResourceSetTracker {
    pub fn new() -> Self {
        Self {
            previous_loaded: Vec::new(),
            force_next: false,
        }
    }

    /// Queries `world` and returns a message if the loaded set differs from the one
    /// last reported, if anything was removed, or if the tracker was just reset.
    /// Returns `None` otherwise.
    pub fn tick(&mut self, world: &dyn ResourceQuery) -> Option<ResourceSetMessage> {
        let loaded = sorted_unique(world.loaded_resources());
        let removed = sorted_unique(world.removed_resources());

        if !self.force_next && loaded == self.previous_loaded && removed.is_empty() {
            trace!("ResourceSetTracker: {} resources, unchanged", loaded.len());
            return None;
        }

        debug!(
            "ResourceSetTracker: loaded set now {} resources, {} removed",
            loaded.len(),
            removed.len()
        );
        self.previous_loaded = loaded.clone();
        self.force_next = false;
        Some(ResourceSetMessage::new(loaded, removed))
    }

    /// Forgets the recorded set. The next tick always produces a message carrying
    /// the full loaded set, even an empty one.
    pub fn reset(&mut self) {
        debug!("ResourceSetTracker: reset");
        self.previous_loaded.clear();
        self.force_next = true;
    }

    pub fn previous_loaded(&self) -> &[ResourceId] {
        &self.previous_loaded
    }
}

impl Default for ResourceSetTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_unique(mut ids: Vec<ResourceId>) -> Vec<ResourceId> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
