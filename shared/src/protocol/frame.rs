use livelink_serde::{BufferReader, BufferWriter, ObjectTable, Serde, DEFAULT_ALIGNMENT};

use super::{error::ProtocolError, opcode::Opcode};

/// Opcode tag plus payload length
pub const FRAME_HEADER_LENGTH: usize = 16 + 4;

/// One protocol unit: an opcode and its payload.
///
/// `objects` is the table the payload was written with. It does not go into the
/// frame bytes; whoever carries the bytes must carry the table alongside.
#[derive(Clone, Debug)]
pub struct MessageFrame {
    opcode: Opcode,
    payload: Vec<u8>,
    objects: ObjectTable,
}

impl MessageFrame {
    pub fn new(opcode: Opcode, payload: Vec<u8>, objects: ObjectTable) -> Self {
        Self {
            opcode,
            payload,
            objects,
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }

    #[cfg(test)]
    pub(crate) fn payload_capacity(&self) -> usize {
        self.payload.capacity()
    }

    pub fn encoded_length(&self) -> usize {
        FRAME_HEADER_LENGTH + self.payload.len()
    }

    pub fn try_to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let length = payload_length(self.payload.len())?;
        let mut writer = BufferWriter::with_capacity(self.encoded_length(), DEFAULT_ALIGNMENT);
        self.opcode.to_tag().ser(&mut writer);
        length.ser(&mut writer);
        writer.write_bytes(&self.payload);
        let (bytes, _) = writer.finish();
        Ok(bytes)
    }

    /// # Panics
    ///
    /// Panics if the payload is longer than `u32::MAX` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.try_to_bytes().expect("Frame payload too large to encode")
    }

    /// Reads one frame from the front of `bytes`, returning it with the number of
    /// bytes it occupied. `objects` must be the table the payload was written with.
    pub fn read(bytes: &[u8], objects: ObjectTable) -> Result<(Self, usize), ProtocolError> {
        let truncated = || ProtocolError::TruncatedHeader {
            len: bytes.len(),
            expected: FRAME_HEADER_LENGTH,
        };

        let header_objects = ObjectTable::new();
        let mut reader = BufferReader::new(bytes, &header_objects);
        let tag = u128::de(&mut reader).map_err(|_| truncated())?;
        let declared = u32::de(&mut reader).map_err(|_| truncated())?;
        let opcode = Opcode::from_tag(tag)?;

        let available = reader.remaining();
        let payload = reader
            .read_bytes(declared as usize)
            .map_err(|_| ProtocolError::PayloadLengthMismatch {
                declared,
                available,
            })?;

        let frame = Self::new(opcode, payload.to_vec(), objects);
        Ok((frame, reader.position()))
    }

    /// Like [`MessageFrame::read`], but `bytes` must hold exactly one frame.
    pub fn read_exact(bytes: &[u8], objects: ObjectTable) -> Result<Self, ProtocolError> {
        let (frame, consumed) = Self::read(bytes, objects)?;
        if consumed != bytes.len() {
            return Err(ProtocolError::TrailingBytes {
                remaining: bytes.len() - consumed,
            });
        }
        Ok(frame)
    }
}

fn payload_length(len: usize) -> Result<u32, ProtocolError> {
    u32::try_from(len).map_err(|_| ProtocolError::PayloadTooLarge { len })
}
