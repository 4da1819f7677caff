use std::{any::Any, sync::Arc};

use crate::{error::SerdeErr, object_table::ObjectTable};

/// Reads values back out of a byte slice written by a
/// [`BufferWriter`](crate::BufferWriter).
pub struct BufferReader<'b> {
    buffer: &'b [u8],
    cursor: usize,
    objects: &'b ObjectTable,
}

impl<'b> BufferReader<'b> {
    pub fn new(buffer: &'b [u8], objects: &'b ObjectTable) -> Self {
        Self {
            buffer,
            cursor: 0,
            objects,
        }
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'b [u8], SerdeErr> {
        if len > self.remaining() {
            return Err(SerdeErr::UnexpectedEnd {
                offset: self.cursor,
                requested: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buffer[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let mut output = [0u8; N];
        output.copy_from_slice(self.read_bytes(N)?);
        Ok(output)
    }

    /// Resolves an object table index to the value registered there.
    pub fn object<T: Any + Send + Sync>(&self, index: u32) -> Result<Arc<T>, SerdeErr> {
        self.objects.get::<T>(index)
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}
