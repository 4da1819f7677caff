use livelink_serde::{BufferReader, BufferWriter, Serde, SerdeErr};

use super::resource_id::ResourceId;

/// Which resources are loaded right now and which were just removed.
///
/// `loaded` is a complete snapshot, not a delta. The message cannot be changed
/// once built.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ResourceSetMessage {
    loaded: Vec<ResourceId>,
    removed: Vec<ResourceId>,
}

impl ResourceSetMessage {
    pub fn new(loaded: Vec<ResourceId>, removed: Vec<ResourceId>) -> Self {
        Self { loaded, removed }
    }

    pub fn loaded(&self) -> &[ResourceId] {
        &self.loaded
    }

    pub fn removed(&self) -> &[ResourceId] {
        &self.removed
    }

    pub fn into_parts(self) -> (Vec<ResourceId>, Vec<ResourceId>) {
        (self.loaded, self.removed)
    }
}

impl Serde for ResourceSetMessage {
    fn ser(&self, writer: &mut BufferWriter) {
        self.loaded.ser(writer);
        self.removed.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            loaded: Vec::de(reader)?,
            removed: Vec::de(reader)?,
        })
    }

    fn byte_length(&self) -> u32 {
        self.loaded.byte_length() + self.removed.byte_length()
    }
}
