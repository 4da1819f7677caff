use std::fmt;

use livelink_serde::{BufferReader, BufferWriter, ConstByteLength, Serde, SerdeErr};

/// 128-bit content-independent identifier of a loadable resource, such as a scene
/// unit or an asset bundle.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ResourceId(u128);

impl ResourceId {
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    pub const fn to_u128(&self) -> u128 {
        self.0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({:032x})", self.0)
    }
}

impl Serde for ResourceId {
    fn ser(&self, writer: &mut BufferWriter) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self(u128::de(reader)?))
    }

    fn byte_length(&self) -> u32 {
        Self::const_byte_length()
    }
}

impl ConstByteLength for ResourceId {
    fn const_byte_length() -> u32 {
        u128::const_byte_length()
    }
}
