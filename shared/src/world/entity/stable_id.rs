use std::fmt;

use livelink_serde::{BufferReader, BufferWriter, ConstByteLength, Serde, SerdeErr};

/// Persistent identity of a world element.
///
/// Independent of where the element currently lives in storage, so snapshots taken
/// at different times or in different processes can be compared by id. The high 64
/// bits name the session that allocated the id, the low 64 bits are that session's
/// sequence counter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct StableId(u128);

impl StableId {
    pub const fn new(session: u64, sequence: u64) -> Self {
        Self(((session as u128) << 64) | sequence as u128)
    }

    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    pub const fn to_u128(&self) -> u128 {
        self.0
    }

    pub const fn session(&self) -> u64 {
        (self.0 >> 64) as u64
    }

    pub const fn sequence(&self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Debug for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StableId({:x}:{})", self.session(), self.sequence())
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl Serde for StableId {
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

impl ConstByteLength for StableId {
    fn const_byte_length() -> u32 {
        u128::const_byte_length()
    }
}
