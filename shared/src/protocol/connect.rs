use livelink_serde::{BufferReader, BufferWriter, ConstByteLength, Serde, SerdeErr};

/// Handshake a remote process sends when it (re)connects.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ConnectMessage {
    pub protocol_version: u32,
    /// Identifies the remote process instance, for logging
    pub session: u64,
}

impl Serde for ConnectMessage {
    fn ser(&self, writer: &mut BufferWriter) {
        self.protocol_version.ser(writer);
        self.session.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            protocol_version: u32::de(reader)?,
            session: u64::de(reader)?,
        })
    }

    fn byte_length(&self) -> u32 {
        Self::const_byte_length()
    }
}

impl ConstByteLength for ConnectMessage {
    fn const_byte_length() -> u32 {
        u32::const_byte_length() + u64::const_byte_length()
    }
}
