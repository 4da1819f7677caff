use std::cmp::Ordering;

use log::trace;

use crate::world::{
    content::EntityContentDelta, entity::stable_id::StableId, snapshot::WorldSnapshot,
};

use super::{change_set::ChangeSet, comparator::ContentComparator};

/// Walks two ascending id sequences once and sorts every id into added, removed or,
/// when `content_changed` says so, changed.
///
/// Both inputs must be strictly ascending. That is checked in debug builds only;
/// release builds produce unspecified output for unsorted input.
pub fn merge_diff<F>(previous: &[StableId], current: &[StableId], mut content_changed: F) -> ChangeSet
where
    F: FnMut(&StableId) -> bool,
{
    debug_assert!(
        is_strictly_ascending(previous),
        "previous snapshot ids must be sorted and unique"
    );
    debug_assert!(
        is_strictly_ascending(current),
        "current snapshot ids must be sorted and unique"
    );

    let mut output = ChangeSet::new();
    let mut previous_index = 0;
    let mut current_index = 0;

    while previous_index < previous.len() && current_index < current.len() {
        let previous_id = previous[previous_index];
        let current_id = current[current_index];
        match previous_id.cmp(&current_id) {
            Ordering::Less => {
                output.removed.push(previous_id);
                previous_index += 1;
            }
            Ordering::Greater => {
                output.added.push(current_id);
                current_index += 1;
            }
            Ordering::Equal => {
                if content_changed(&current_id) {
                    output.changed.push(current_id);
                }
                previous_index += 1;
                current_index += 1;
            }
        }
    }

    output.removed.extend_from_slice(&previous[previous_index..]);
    output.added.extend_from_slice(&current[current_index..]);
    output
}

pub(crate) fn is_strictly_ascending(ids: &[StableId]) -> bool {
    ids.windows(2).all(|pair| pair[0] < pair[1])
}

/// Builds change-sets between snapshots.
///
/// Without a comparator, an entity present on both sides always counts as
/// unchanged; supply one to get content-level diffs.
pub struct ChangeSetBuilder {
    comparator: Option<Box<dyn ContentComparator>>,
    collect_contents: bool,
}

impl ChangeSetBuilder {
    pub fn new() -> Self {
        Self {
            comparator: None,
            collect_contents: true,
        }
    }

    pub fn with_comparator<C: ContentComparator + 'static>(mut self, comparator: C) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Only compute id sets, leaving [`ChangeSet::contents`] empty
    pub fn without_contents(mut self) -> Self {
        self.collect_contents = false;
        self
    }

    pub fn has_comparator(&self) -> bool {
        self.comparator.is_some()
    }

    /// Set arithmetic on ids alone. Ids present on both sides are unchanged.
    pub fn diff_ids(&self, previous: &[StableId], current: &[StableId]) -> ChangeSet {
        merge_diff(previous, current, |_| false)
    }

    pub fn diff_snapshots(
        &self,
        previous: &dyn WorldSnapshot,
        current: &dyn WorldSnapshot,
    ) -> ChangeSet {
        let previous_ids = previous.stable_ids();
        let current_ids = current.stable_ids();

        let mut output = match &self.comparator {
            Some(comparator) => merge_diff(&previous_ids, &current_ids, |id| {
                comparator.content_changed(id, previous, current)
            }),
            None => merge_diff(&previous_ids, &current_ids, |_| false),
        };

        if self.collect_contents {
            output.contents = collect_contents(&output, current);
        }

        trace!(
            "ChangeSetBuilder: {} -> {} entities gives +{} -{} ~{}",
            previous_ids.len(),
            current_ids.len(),
            output.added.len(),
            output.removed.len(),
            output.changed.len()
        );
        output
    }
}

impl Default for ChangeSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Contents are ordered by id so the receiver can binary search them
fn collect_contents(change_set: &ChangeSet, current: &dyn WorldSnapshot) -> Vec<EntityContentDelta> {
    let mut ids = Vec::with_capacity(change_set.added.len() + change_set.changed.len());
    ids.extend_from_slice(&change_set.added);
    ids.extend_from_slice(&change_set.changed);
    ids.sort_unstable();

    ids.into_iter()
        .filter_map(|id| {
            current
                .content(&id)
                .map(|content| EntityContentDelta { id, content })
        })
        .collect()
}
