/// PROPERTY-BASED TESTS: change-set builder
///
/// Key invariants:
/// 1. Added is current minus previous, removed is previous minus current
/// 2. Diffing a snapshot against itself is empty
/// 3. Swapping the inputs swaps added and removed
/// 4. Applying a diff to the previous set yields the current set
/// 5. The sharded diff equals the single-pass diff
/// 6. With a symmetric comparator, changed is the same in both directions and
///    every id on either side is accounted for exactly once
use std::collections::{BTreeMap, BTreeSet};

use livelink_shared::{
    diff_ids_sharded, merge_diff, ChangeSet, ChangeSetBuilder, ComponentData, ComponentKind,
    FingerprintComparator, StableId,
};
use livelink_test::TestWorld;
use proptest::prelude::*;

fn id_set_strategy() -> impl Strategy<Value = Vec<StableId>> {
    prop::collection::btree_set(0u128..512u128, 0..150)
        .prop_map(|ids| ids.into_iter().map(StableId::from_u128).collect())
}

fn as_set(ids: &[StableId]) -> BTreeSet<StableId> {
    ids.iter().copied().collect()
}

// Small value range so shared ids often keep the same content
fn world_contents_strategy() -> impl Strategy<Value = BTreeMap<u128, u8>> {
    prop::collection::btree_map(0u128..96u128, 0u8..3, 0..60)
}

fn world_from(contents: &BTreeMap<u128, u8>) -> TestWorld {
    let mut world = TestWorld::new(1);
    for (id, value) in contents {
        world.insert_with_id(
            StableId::from_u128(*id),
            vec![ComponentData::inline(ComponentKind::new(1), vec![*value])],
        );
    }
    world
}

/// Checks that `a` and `b` are partitioned by the forward and backward diffs
fn check_partition(
    a: &BTreeSet<StableId>,
    b: &BTreeSet<StableId>,
    forward: &ChangeSet,
    backward: &ChangeSet,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(&forward.changed, &backward.changed);
    prop_assert_eq!(&forward.added, &backward.removed);
    prop_assert_eq!(&forward.removed, &backward.added);

    let changed = as_set(&forward.changed);
    let unchanged: BTreeSet<StableId> = a
        .intersection(b)
        .filter(|id| !changed.contains(id))
        .copied()
        .collect();

    let mut rebuilt_b = as_set(&forward.added);
    prop_assert!(rebuilt_b.is_disjoint(&unchanged) && rebuilt_b.is_disjoint(&changed));
    rebuilt_b.extend(unchanged.iter().copied());
    rebuilt_b.extend(changed.iter().copied());
    prop_assert_eq!(&rebuilt_b, b);

    let mut rebuilt_a = as_set(&forward.removed);
    prop_assert!(rebuilt_a.is_disjoint(&unchanged) && rebuilt_a.is_disjoint(&changed));
    rebuilt_a.extend(unchanged.iter().copied());
    rebuilt_a.extend(changed.iter().copied());
    prop_assert_eq!(&rebuilt_a, a);
    Ok(())
}

proptest! {
    #[test]
    fn prop_diff_is_set_difference(previous in id_set_strategy(), current in id_set_strategy()) {
        let change_set = ChangeSetBuilder::new().diff_ids(&previous, &current);

        let expected_added: Vec<StableId> =
            as_set(&current).difference(&as_set(&previous)).copied().collect();
        let expected_removed: Vec<StableId> =
            as_set(&previous).difference(&as_set(&current)).copied().collect();

        prop_assert_eq!(&change_set.added, &expected_added);
        prop_assert_eq!(&change_set.removed, &expected_removed);
        prop_assert!(change_set.changed.is_empty());
    }

    #[test]
    fn prop_self_diff_is_empty(ids in id_set_strategy()) {
        let change_set = ChangeSetBuilder::new().diff_ids(&ids, &ids);
        prop_assert!(change_set.is_empty());
    }

    #[test]
    fn prop_reverse_diff_swaps_sides(previous in id_set_strategy(), current in id_set_strategy()) {
        let builder = ChangeSetBuilder::new();
        let forward = builder.diff_ids(&previous, &current);
        let backward = builder.diff_ids(&current, &previous);

        prop_assert_eq!(forward.added, backward.removed);
        prop_assert_eq!(forward.removed, backward.added);
    }

    #[test]
    fn prop_applying_diff_reaches_current(previous in id_set_strategy(), current in id_set_strategy()) {
        let change_set = ChangeSetBuilder::new().diff_ids(&previous, &current);

        let mut rebuilt = as_set(&previous);
        for id in &change_set.removed {
            prop_assert!(rebuilt.remove(id));
        }
        for id in &change_set.added {
            prop_assert!(rebuilt.insert(*id));
        }
        prop_assert_eq!(rebuilt, as_set(&current));
    }

    #[test]
    fn prop_symmetric_predicate_diff_inverts(previous in id_set_strategy(), current in id_set_strategy()) {
        let symmetric = |id: &StableId| id.to_u128() % 3 == 0;
        let forward = merge_diff(&previous, &current, symmetric);
        let backward = merge_diff(&current, &previous, symmetric);

        check_partition(&as_set(&previous), &as_set(&current), &forward, &backward)?;
    }

    #[test]
    fn prop_fingerprint_diff_inverts(
        previous in world_contents_strategy(),
        current in world_contents_strategy(),
    ) {
        let a = world_from(&previous);
        let b = world_from(&current);
        let builder = ChangeSetBuilder::new().with_comparator(FingerprintComparator);

        let forward = builder.diff_snapshots(&a, &b);
        let backward = builder.diff_snapshots(&b, &a);

        let expected_changed: Vec<StableId> = previous
            .iter()
            .filter(|(id, value)| current.get(*id).map_or(false, |other| other != *value))
            .map(|(id, _)| StableId::from_u128(*id))
            .collect();
        prop_assert_eq!(&forward.changed, &expected_changed);

        let ids_a: BTreeSet<StableId> = previous.keys().map(|id| StableId::from_u128(*id)).collect();
        let ids_b: BTreeSet<StableId> = current.keys().map(|id| StableId::from_u128(*id)).collect();
        check_partition(&ids_a, &ids_b, &forward, &backward)?;
    }

    #[test]
    fn prop_outputs_are_ascending(previous in id_set_strategy(), current in id_set_strategy()) {
        let change_set = merge_diff(&previous, &current, |id| id.to_u128() % 3 == 0);

        for list in [&change_set.added, &change_set.removed, &change_set.changed] {
            prop_assert!(list.windows(2).all(|pair| pair[0] < pair[1]));
        }
        let shared: BTreeSet<StableId> =
            as_set(&previous).intersection(&as_set(&current)).copied().collect();
        prop_assert!(change_set.changed.iter().all(|id| shared.contains(id)));
    }

    #[test]
    fn prop_sharded_matches_single_pass(
        previous in id_set_strategy(),
        current in id_set_strategy(),
        shard_count in 1usize..9,
    ) {
        let single = ChangeSetBuilder::new().diff_ids(&previous, &current);
        let sharded = diff_ids_sharded(&previous, &current, shard_count);

        prop_assert_eq!(single, sharded);
    }
}
