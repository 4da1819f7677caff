use super::stable_id::StableId;

/// Where an element currently lives in its world's storage. Transient: it changes
/// whenever storage is compacted or the element moves between chunks.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct EntityLocation {
    pub index: u32,
    pub version: u32,
}

impl EntityLocation {
    pub const fn new(index: u32, version: u32) -> Self {
        Self { index, version }
    }
}

/// One snapshot entry: a storage location paired with the stable id found there.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct LocatedId {
    pub location: EntityLocation,
    pub id: StableId,
}

impl LocatedId {
    pub const fn new(location: EntityLocation, id: StableId) -> Self {
        Self { location, id }
    }
}

/// Sorts snapshot entries by stable id, the order every diffing step expects.
/// Entries sharing an id keep their relative order.
pub fn sort_by_stable_id(entries: &mut [LocatedId]) {
    entries.sort_by_key(|entry| entry.id);
}
