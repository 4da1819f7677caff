use log::error;

use super::{error::IntegrityError, located_id::LocatedId, stable_id::StableId};

/// Finds stable ids that occur more than once in `sorted`.
///
/// `sorted` must be ordered by stable id; the scan only compares neighbours. Each
/// duplicated id is reported once, however long its run is.
pub fn find_duplicate_ids(sorted: &[LocatedId]) -> Vec<StableId> {
    debug_assert!(
        sorted.windows(2).all(|pair| pair[0].id <= pair[1].id),
        "find_duplicate_ids requires entries sorted by stable id"
    );

    let mut output = Vec::new();
    let mut in_duplicate_run = false;

    for pair in sorted.windows(2) {
        if pair[0].id == pair[1].id {
            if !in_duplicate_run {
                output.push(pair[1].id);
                in_duplicate_run = true;
            }
        } else {
            in_duplicate_run = false;
        }
    }

    output
}

/// Like [`find_duplicate_ids`], but turns any duplicate into an
/// [`IntegrityError`], logging each offending id and its locations.
pub fn validate_unique_ids(sorted: &[LocatedId]) -> Result<(), IntegrityError> {
    let ids = find_duplicate_ids(sorted);
    if ids.is_empty() {
        return Ok(());
    }

    for id in &ids {
        let start = sorted.partition_point(|entry| entry.id < *id);
        let locations: Vec<_> = sorted[start..]
            .iter()
            .take_while(|entry| entry.id == *id)
            .map(|entry| entry.location)
            .collect();
        error!(
            "Duplicate stable id {:?} found at locations {:?}",
            id, locations
        );
    }

    Err(IntegrityError::DuplicateStableIds { ids })
}
