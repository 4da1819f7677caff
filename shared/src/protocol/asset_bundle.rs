use livelink_serde::{BufferReader, BufferWriter, ObjectRef, Serde, SerdeErr};

use crate::resources::resource_id::ResourceId;

/// A built, content-addressed bundle of asset data.
///
/// The bundle bytes are shared through the object table rather than copied into
/// the payload.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AssetBundle {
    pub id: ResourceId,
    /// Hash of the bundle as built for the requesting target
    pub target_hash: u128,
    pub data: ObjectRef<Vec<u8>>,
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct AssetBundleRequest {
    pub ids: Vec<ResourceId>,
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct AssetBundleResponse {
    pub bundles: Vec<AssetBundle>,
}

/// Source of asset bundles for answering requests.
pub trait AssetBundleProvider {
    fn asset_bundle(&self, id: &ResourceId) -> Option<AssetBundle>;
}

impl Serde for AssetBundle {
    fn ser(&self, writer: &mut BufferWriter) {
        self.id.ser(writer);
        self.target_hash.ser(writer);
        self.data.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            id: ResourceId::de(reader)?,
            target_hash: u128::de(reader)?,
            data: ObjectRef::de(reader)?,
        })
    }

    fn byte_length(&self) -> u32 {
        self.id.byte_length() + self.target_hash.byte_length() + self.data.byte_length()
    }
}

impl Serde for AssetBundleRequest {
    fn ser(&self, writer: &mut BufferWriter) {
        self.ids.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            ids: Vec::de(reader)?,
        })
    }

    fn byte_length(&self) -> u32 {
        self.ids.byte_length()
    }
}

impl Serde for AssetBundleResponse {
    fn ser(&self, writer: &mut BufferWriter) {
        self.bundles.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            bundles: Vec::de(reader)?,
        })
    }

    fn byte_length(&self) -> u32 {
        self.bundles.byte_length()
    }
}
