use livelink_serde::{BufferReader, BufferWriter, Serde, SerdeErr};

use crate::world::{
    content::{EntityContent, EntityContentDelta},
    entity::stable_id::StableId,
};

/// Result of one diff pass.
///
/// All id lists are ascending and pairwise disjoint. `contents` holds the full
/// content of added and changed entities, ascending by id, when the pass was asked
/// to collect it.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ChangeSet {
    pub added: Vec<StableId>,
    pub removed: Vec<StableId>,
    pub changed: Vec<StableId>,
    pub contents: Vec<EntityContentDelta>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether applying this change-set would do nothing
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn content(&self, id: &StableId) -> Option<&EntityContent> {
        self.contents
            .binary_search_by_key(id, |delta| delta.id)
            .ok()
            .map(|index| &self.contents[index].content)
    }
}

impl Serde for ChangeSet {
    fn ser(&self, writer: &mut BufferWriter) {
        self.added.ser(writer);
        self.removed.ser(writer);
        self.changed.ser(writer);
        self.contents.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            added: Vec::de(reader)?,
            removed: Vec::de(reader)?,
            changed: Vec::de(reader)?,
            contents: Vec::de(reader)?,
        })
    }

    fn byte_length(&self) -> u32 {
        self.added.byte_length()
            + self.removed.byte_length()
            + self.changed.byte_length()
            + self.contents.byte_length()
    }
}
