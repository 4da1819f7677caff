use std::{panic, thread};

use log::debug;

use crate::world::entity::stable_id::StableId;

use super::{builder::merge_diff, change_set::ChangeSet};

/// Splits two ascending id sequences into `shard_count` pairs of sub-slices that
/// cover contiguous, non-overlapping id ranges.
///
/// Boundaries are taken from `current` and located in `previous` by binary search,
/// so an id present on both sides always lands in the same shard.
pub fn shard_ranges<'a>(
    previous: &'a [StableId],
    current: &'a [StableId],
    shard_count: usize,
) -> Vec<(&'a [StableId], &'a [StableId])> {
    let shard_count = shard_count.max(1);
    let mut output = Vec::with_capacity(shard_count);
    let mut previous_start = 0;
    let mut current_start = 0;

    for shard in 1..shard_count {
        let boundary_index = shard * current.len() / shard_count;
        let Some(boundary) = current.get(boundary_index) else {
            break;
        };
        let previous_end = previous.partition_point(|id| id < boundary);
        let current_end = current.partition_point(|id| id < boundary);
        if current_end == current_start {
            continue;
        }
        output.push((
            &previous[previous_start..previous_end],
            &current[current_start..current_end],
        ));
        previous_start = previous_end;
        current_start = current_end;
    }

    output.push((&previous[previous_start..], &current[current_start..]));
    output
}

/// Diffs independent id ranges on scoped worker threads and stitches the results
/// together in range order. The output equals a single
/// [`merge_diff`] over the whole input.
pub fn diff_ids_sharded_with<F>(
    previous: &[StableId],
    current: &[StableId],
    shard_count: usize,
    content_changed: F,
) -> ChangeSet
where
    F: Fn(&StableId) -> bool + Sync,
{
    let shards = shard_ranges(previous, current, shard_count);
    if shards.len() == 1 {
        return merge_diff(previous, current, &content_changed);
    }

    debug!("Diffing {} shards in parallel", shards.len());

    let content_changed = &content_changed;
    let results: Vec<ChangeSet> = thread::scope(|scope| {
        let handles: Vec<_> = shards
            .into_iter()
            .map(|(previous_shard, current_shard)| {
                scope.spawn(move || merge_diff(previous_shard, current_shard, content_changed))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(change_set) => change_set,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut output = ChangeSet::new();
    for shard in results {
        output.added.extend(shard.added);
        output.removed.extend(shard.removed);
        output.changed.extend(shard.changed);
    }
    output
}

pub fn diff_ids_sharded(previous: &[StableId], current: &[StableId], shard_count: usize) -> ChangeSet {
    diff_ids_sharded_with(previous, current, shard_count, |_| false)
}
