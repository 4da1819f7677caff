use log::debug;

use super::{error::IdentityError, stable_id::StableId};

/// Hands out [`StableId`]s for one session.
///
/// Sequence numbers only ever increase, so an id is never handed out twice, even
/// after the element that held it is destroyed.
pub struct StableIdAllocator {
    session: u64,
    next_sequence: u64,
}

impl StableIdAllocator {
    pub fn new(session: u64) -> Self {
        debug!("StableIdAllocator: starting session {:x}", session);
        Self {
            session,
            next_sequence: 0,
        }
    }

    /// Resumes a session whose ids up to (excluding) `next_sequence` are taken.
    pub fn resume(session: u64, next_sequence: u64) -> Self {
        Self {
            session,
            next_sequence,
        }
    }

    pub fn try_allocate(&mut self) -> Result<StableId, IdentityError> {
        let sequence = self.next_sequence;
        self.next_sequence = sequence
            .checked_add(1)
            .ok_or(IdentityError::SequenceExhausted {
                session: self.session,
            })?;
        Ok(StableId::new(self.session, sequence))
    }

    /// # Panics
    ///
    /// Panics if the session has run out of sequence numbers.
    pub fn allocate(&mut self) -> StableId {
        self.try_allocate()
            .expect("StableIdAllocator ran out of sequence numbers")
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn allocated_count(&self) -> u64 {
        self.next_sequence
    }
}
